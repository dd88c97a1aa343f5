//! Tera-based template rendering.

use std::error::Error as _;

use ::tera::{Context, Tera};
use tracing::instrument;

use metacode_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::MetacodeResult,
};

/// Renders templates with [Tera](https://keats.github.io/tera/).
///
/// Every call compiles the source into a fresh `Tera` instance, so user
/// overrides and bundled templates are treated the same and no state is
/// shared between renders. Autoescaping is off: the output is Python,
/// reStructuredText and TOML, never HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip_all, fields(template = %name))]
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> MetacodeResult<String> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)
            .map_err(|e| rendering_failed(name, &e))?;

        let context = Context::from_value(context.to_value()).map_err(|e| rendering_failed(name, &e))?;
        tera.render(name, &context).map_err(|e| rendering_failed(name, &e))
    }
}

/// Tera nests the useful message in the error's source chain.
fn rendering_failed(name: &str, error: &::tera::Error) -> metacode_core::error::MetacodeError {
    let mut reason = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    ApplicationError::RenderingFailed {
        template: name.to_string(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use metacode_core::error::MetacodeError;

    fn context() -> RenderContext {
        RenderContext::new()
            .with("package.name", "foo")
            .with("cls.name", "Baz")
    }

    #[test]
    fn substitutes_nested_values() {
        let out = TeraRenderer::new()
            .render("t", "class {{ cls.name }}:  # {{ package.name }}\n", &context())
            .unwrap();
        assert_eq!(out, "class Baz:  # foo\n");
    }

    #[test]
    fn does_not_escape_markup() {
        let ctx = RenderContext::new().with("package.description", "<a & b>");
        let out = TeraRenderer::new()
            .render("page.html", "{{ package.description }}", &ctx)
            .unwrap();
        assert_eq!(out, "<a & b>");
    }

    #[test]
    fn keeps_leading_and_trailing_newlines() {
        let out = TeraRenderer::new()
            .render("class.py", "\n\nclass {{ cls.name }}:\n    pass\n", &context())
            .unwrap();
        assert_eq!(out, "\n\nclass Baz:\n    pass\n");
    }

    #[test]
    fn conditional_on_version() {
        let source = "{% if package.version != '0.1' %}added {{ package.version }}{% endif %}";
        let renderer = TeraRenderer::new();
        let old = RenderContext::new().with("package.version", "0.1");
        let new = RenderContext::new().with("package.version", "0.3");
        assert_eq!(renderer.render("t", source, &old).unwrap(), "");
        assert_eq!(renderer.render("t", source, &new).unwrap(), "added 0.3");
    }

    #[test]
    fn syntax_errors_name_the_template() {
        let err = TeraRenderer::new()
            .render("code/broken.py", "{% if %}", &context())
            .unwrap_err();
        assert!(matches!(
            err,
            MetacodeError::Application(ApplicationError::RenderingFailed { ref template, .. })
                if template == "code/broken.py"
        ));
    }

    #[test]
    fn undefined_variables_fail_loudly() {
        let err = TeraRenderer::new()
            .render("t", "{{ missing.key }}", &context())
            .unwrap_err();
        assert!(matches!(
            err,
            MetacodeError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }
}
