use metacode_core::error::MetacodeResult;

use super::TemplateSource;

macro_rules! template {
    ($name:literal) => {
        ($name, include_str!(concat!("../../templates/", $name)))
    };
}

/// Every template shipped with metacode, by qualified name.
static TEMPLATES: &[(&str, &str)] = &[
    template!("MANIFEST.in"),
    template!("README.rst"),
    template!("code/class.py"),
    template!("code/function.py"),
    template!("code/gui_app.py"),
    template!("code/gui_dialog.py"),
    template!("code/gui_mainwindow.py"),
    template!("code/gui_utils.py"),
    template!("code/gui_widget.py"),
    template!("code/gui_window.py"),
    template!("code/module.py"),
    template!("code/test_class.py"),
    template!("code/test_function.py"),
    template!("code/test_gui_module.py"),
    template!("code/test_guiclass.py"),
    template!("code/test_module.py"),
    template!("docs/Makefile"),
    template!("docs/_templates/page.html"),
    template!("docs/_templates/versions.html"),
    template!("docs/api_index.rst"),
    template!("docs/api_module.rst"),
    template!("docs/api_subpackage_index.rst"),
    template!("docs/audience.rst"),
    template!("docs/changelog.rst"),
    template!("docs/conf.py"),
    template!("docs/developers.rst"),
    template!("docs/installing.rst"),
    template!("docs/main-toctree.rst"),
    template!("docs/make.bat"),
    template!("docs/people.rst"),
    template!("docs/roadmap.rst"),
    template!("docs/usecases.rst"),
    template!("gitignore"),
    template!("gui/icon.svg"),
    template!("gui/splash.svg"),
    template!("incrementVersion.sh"),
    template!("licenses/bsd-2clause.txt"),
    template!("licenses/gpl-3.txt"),
    template!("licenses/lgpl-3.txt"),
    template!("prospector.yaml"),
    template!("setup.py"),
];

/// The templates compiled into the binary. Always the last source.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTemplates;

impl BundledTemplates {
    /// Qualified names of all bundled templates.
    pub fn names() -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(name, _)| *name)
    }

    pub fn get(name: &str) -> Option<&'static str> {
        TEMPLATES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, content)| *content)
    }
}

impl TemplateSource for BundledTemplates {
    fn describe(&self) -> String {
        "bundled".into()
    }

    fn fetch(&self, name: &str) -> MetacodeResult<Option<String>> {
        Ok(Self::get(name).map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = BundledTemplates::names().collect();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn licenses_are_bundled() {
        for name in ["licenses/bsd-2clause.txt", "licenses/gpl-3.txt", "licenses/lgpl-3.txt"] {
            assert!(BundledTemplates::get(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(BundledTemplates.fetch("code/nope.py").unwrap(), None);
    }
}
