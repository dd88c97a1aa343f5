//! Every bundled template must render with the values the generators
//! provide.

use metacode_adapters::{BundledTemplates, TeraRenderer};
use metacode_core::domain::derive_context;
use metacode_core::prelude::*;

/// Copied byte for byte, never rendered.
const VERBATIM: &[&str] = &[
    "gitignore",
    "prospector.yaml",
    "MANIFEST.in",
    "incrementVersion.sh",
    "docs/Makefile",
    "docs/make.bat",
    "docs/_templates/page.html",
    "docs/_templates/versions.html",
    "gui/icon.svg",
    "gui/splash.svg",
];

fn full_context(gui: bool) -> RenderContext {
    let mut configuration = Configuration::default();
    configuration.package.name = "foo".into();
    configuration.package.author = "Jane Doe".into();
    configuration.package.keywords = vec!["science".into()];
    configuration.options.gui = gui;

    let context = RenderContext::from_configuration(&configuration)
        .with("package.version", "0.2")
        .with("module.name", "bar")
        .with("module.package", "foo")
        .with("module.qualified", "foo.bar")
        .with("header_extension", "=======")
        .with("cls.name", "FooBar")
        .with("cls.instance", "foo_bar")
        .with("function.name", "do_things")
        .with("function.name_camelcase", "DoThings")
        .with("subpackage.name", "sub")
        .with("subpackage.qualified", "foo.sub");
    derive_context(&context)
}

#[test]
fn every_rendered_template_renders() {
    let renderer = TeraRenderer::new();
    for gui in [false, true] {
        let context = full_context(gui);
        for name in BundledTemplates::names().filter(|name| !VERBATIM.contains(name)) {
            let source = BundledTemplates::get(name).unwrap();
            let rendered = renderer
                .render(name, source, &context)
                .unwrap_or_else(|err| panic!("{name} failed to render: {err}"));
            assert!(!rendered.contains("{{"), "{name} left a placeholder");
        }
    }
}

#[test]
fn verbatim_templates_are_bundled() {
    for name in VERBATIM {
        assert!(BundledTemplates::get(name).is_some(), "{name} not bundled");
    }
}

#[test]
fn version_directive_follows_package_version() {
    let renderer = TeraRenderer::new();
    let source = BundledTemplates::get("code/class.py").unwrap();

    let later = renderer.render("code/class.py", source, &full_context(false)).unwrap();
    assert!(later.contains("    .. versionadded:: 0.2\n"));

    let first = full_context(false).with("package.version", "0.1");
    let rendered = renderer.render("code/class.py", source, &first).unwrap();
    assert!(!rendered.contains("versionadded"));
    assert!(rendered.contains("class FooBar:"));
}

#[test]
fn setup_lists_gui_requirements_only_with_gui() {
    let renderer = TeraRenderer::new();
    let source = BundledTemplates::get("setup.py").unwrap();

    let plain = renderer.render("setup.py", source, &full_context(false)).unwrap();
    assert!(!plain.contains("PySide6"));
    assert!(plain.contains("keywords=["));

    let gui = renderer.render("setup.py", source, &full_context(true)).unwrap();
    assert!(gui.contains("\"PySide6\","));
    assert!(gui.contains("\"gui_scripts\": [\"foo = foo.gui.app:main\"]"));
}
