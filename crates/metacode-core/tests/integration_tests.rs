//! Integration tests for metacode-core's public domain API.

use std::path::PathBuf;

use metacode_core::domain::{
    BlockInsertion, DomainError, GuiComponent, ModulePath, PackageLayout, camel_case_to_underscore,
    packaging::{add_entry_point, add_requirement, ensure_manifest_line},
    underscore_to_camel_case,
};

const API_INDEX: &str = "\
API documentation
=================

.. toctree::
    :maxdepth: 1


Subpackages
===========

.. toctree::
    :maxdepth: 1

";

const SETUP_PY: &str = "\
setuptools.setup(
    name=\"foo\",
    install_requires=[
    ],
)
";

// ============================================================================
// Layout
// ============================================================================

#[test]
fn nested_module_maps_onto_source_tests_and_docs() {
    let layout = PackageLayout::new("/work/foo", "foo");
    let module: ModulePath = "sub.mod".parse().unwrap();

    assert_eq!(layout.module_file(&module), PathBuf::from("/work/foo/foo/sub/mod.py"));
    assert_eq!(layout.test_file(&module), PathBuf::from("/work/foo/tests/sub/test_mod.py"));
    assert_eq!(
        layout.api_doc_file(&module),
        PathBuf::from("/work/foo/docs/api/sub/foo.sub.mod.rst")
    );
    assert_eq!(layout.api_index(&module), PathBuf::from("/work/foo/docs/api/sub/index.rst"));
    assert_eq!(module.qualified("foo"), "foo.sub.mod");
    assert_eq!(module.parent_package("foo"), "foo.sub");
}

#[test]
fn malformed_module_names_are_rejected() {
    assert!(matches!(
        "".parse::<ModulePath>(),
        Err(DomainError::MissingArgument { .. })
    ));
    assert!(matches!(
        "sub..mod".parse::<ModulePath>(),
        Err(DomainError::InvalidName { .. })
    ));
    assert!(matches!(
        "1st".parse::<ModulePath>(),
        Err(DomainError::InvalidName { .. })
    ));
}

// ============================================================================
// Naming
// ============================================================================

#[test]
fn naming_conversions() {
    assert_eq!(camel_case_to_underscore("FooBar"), "foo_bar");
    assert_eq!(underscore_to_camel_case("do_things"), "DoThings");

    let names = GuiComponent::Window.names("main");
    assert_eq!(names.module, "mainwindow");
    assert_eq!(names.class, "MainWindow");
}

// ============================================================================
// Toctree blocks
// ============================================================================

#[test]
fn modules_and_subpackages_land_in_their_own_blocks() {
    let with_module = BlockInsertion::toctree()
        .sorted()
        .apply(API_INDEX, &["foo.bar"])
        .unwrap();
    let with_both = BlockInsertion::toctree()
        .sorted()
        .after("Subpackages")
        .apply(&with_module, &["sub/index"])
        .unwrap();

    let module = with_both.find("    foo.bar").unwrap();
    let heading = with_both.find("Subpackages").unwrap();
    let subpackage = with_both.find("    sub/index").unwrap();
    assert!(module < heading && heading < subpackage);
}

#[test]
fn document_without_toctree_is_an_error() {
    let err = BlockInsertion::toctree()
        .apply("Title\n=====\n", &["foo.bar"])
        .unwrap_err();
    assert!(matches!(err, DomainError::MarkerNotFound { .. }));
}

// ============================================================================
// Packaging edits
// ============================================================================

#[test]
fn packaging_edits_are_idempotent() {
    let once = add_entry_point(SETUP_PY, "gui_scripts", "foo = foo.gui.app:main").unwrap();
    let once = add_requirement(&once, "PySide6").unwrap();
    let twice = add_entry_point(&once, "gui_scripts", "foo = foo.gui.app:main").unwrap();
    let twice = add_requirement(&twice, "PySide6").unwrap();

    assert_eq!(once, twice);
    assert!(once.contains("    entry_points={\n"));
    assert!(once.contains("        \"PySide6\",\n    ],"));

    let manifest = ensure_manifest_line("include VERSION\n", "include foo/gui/ui/*");
    assert_eq!(ensure_manifest_line(&manifest, "include foo/gui/ui/*"), manifest);
}
