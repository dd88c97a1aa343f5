#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use metacode_adapters::{LayeredTemplateStore, LocalFilesystem, MemoryFilesystem, TeraRenderer};
use metacode_core::prelude::*;

pub const PACKAGE: &str = "foo";

pub fn configuration() -> Configuration {
    let mut configuration = Configuration::default();
    configuration.package.name = PACKAGE.into();
    configuration.package.author = "Jane Doe".into();
    configuration.package.author_email = "jane@example.org".into();
    configuration.package.description = "A package for testing".into();
    configuration
}

pub fn engine(filesystem: Box<dyn Filesystem>) -> ScaffoldEngine {
    ScaffoldEngine::new(
        Box::new(LayeredTemplateStore::bundled()),
        Box::new(TeraRenderer::new()),
        filesystem,
    )
}

/// Generator for package `foo` rooted at `foo/` in memory.
pub fn memory_generator(fs: &MemoryFilesystem, configuration: Configuration) -> CodeGenerator {
    CodeGenerator::new(engine(Box::new(fs.clone())), configuration, PACKAGE)
}

/// A freshly created package `foo` in memory.
pub fn memory_package() -> (MemoryFilesystem, CodeGenerator) {
    let fs = MemoryFilesystem::new();
    let generator = memory_generator(&fs, configuration());
    let report = generator.create_package().expect("package creation");
    assert!(report.is_complete());
    (fs, generator)
}

/// Generator for package `foo` rooted at `<dir>/foo` on disk.
pub fn local_generator(dir: &Path, configuration: Configuration) -> CodeGenerator {
    CodeGenerator::new(engine(Box::new(LocalFilesystem::new())), configuration, dir.join(PACKAGE))
}

/// Path below the in-memory package root.
pub fn p(relative: &str) -> PathBuf {
    Path::new(PACKAGE).join(relative)
}

/// Every file below `root` with its bytes.
pub fn tree_snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let bytes = std::fs::read(entry.path()).expect("readable file");
            (entry.path().strip_prefix(root).expect("below root").to_path_buf(), bytes)
        })
        .collect()
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
