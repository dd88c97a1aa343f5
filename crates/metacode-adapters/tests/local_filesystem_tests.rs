//! Generation against the real filesystem.

mod common;

use common::*;
use metacode_core::prelude::*;
use tempfile::TempDir;

#[test]
fn package_on_disk_is_complete() {
    let tmp = TempDir::new().unwrap();
    let generator = local_generator(tmp.path(), configuration());

    generator.create_package().unwrap();
    generator.create_module("bar").unwrap();
    generator.create_class("Baz", "bar").unwrap();

    let root = tmp.path().join(PACKAGE);
    assert!(root.join("foo/__init__.py").is_file());
    assert_eq!(std::fs::read_to_string(root.join("VERSION")).unwrap(), "0.1.0.dev0\n");
    let module = std::fs::read_to_string(root.join("foo/bar.py")).unwrap();
    assert!(module.contains("class Baz:"));
}

#[cfg(unix)]
#[test]
fn version_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    local_generator(tmp.path(), configuration()).create_package().unwrap();

    let script = tmp.path().join("foo/bin/incrementVersion.sh");
    let mode = std::fs::metadata(script).unwrap().permissions().mode();
    assert!(mode & 0o100 != 0);
}

#[test]
fn repeated_generation_leaves_tree_untouched() {
    let tmp = TempDir::new().unwrap();
    let generator = local_generator(tmp.path(), configuration());
    generator.create_package().unwrap();
    generator.create_subpackage("sub").unwrap();
    generator.create_module("sub.mod").unwrap();
    generator.create_function("run", "sub.mod").unwrap();
    let before = tree_snapshot(tmp.path());

    generator.create_package().unwrap();
    generator.create_subpackage("sub").unwrap();
    generator.create_module("sub.mod").unwrap();
    generator.create_function("run", "sub.mod").unwrap();

    assert_eq!(tree_snapshot(tmp.path()), before);
}

#[test]
fn cloned_repository_keeps_its_files() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join(PACKAGE);
    std::fs::create_dir_all(root.join("docs")).unwrap();
    std::fs::write(root.join("README.rst"), "Cloned readme\n").unwrap();
    std::fs::write(root.join(".gitignore"), "*.pyc\n").unwrap();
    std::fs::write(root.join("docs/conf.py"), "project = 'mine'\n").unwrap();

    let report = local_generator(tmp.path(), configuration()).create_package().unwrap();

    assert_eq!(std::fs::read_to_string(root.join("README.rst")).unwrap(), "Cloned readme\n");
    assert_eq!(std::fs::read_to_string(root.join(".gitignore")).unwrap(), "*.pyc\n");
    assert_eq!(std::fs::read_to_string(root.join("docs/conf.py")).unwrap(), "project = 'mine'\n");
    assert_eq!(report.skipped.len(), 3);
    assert!(report.skipped.iter().all(|s| s.artifact == ArtifactKind::File));
    assert!(root.join("setup.py").is_file());
    assert!(root.join("foo/__init__.py").is_file());
}

#[test]
fn handwritten_module_survives() {
    let tmp = TempDir::new().unwrap();
    let generator = local_generator(tmp.path(), configuration());
    generator.create_package().unwrap();
    let module = tmp.path().join("foo/foo/bar.py");
    std::fs::write(&module, "VALUE = 1\n").unwrap();

    let report = generator.create_module("bar").unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(std::fs::read_to_string(module).unwrap(), "VALUE = 1\n");
}
