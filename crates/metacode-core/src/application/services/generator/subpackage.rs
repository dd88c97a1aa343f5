use tracing::{info, instrument};

use super::{CodeGenerator, GenerationReport};
use crate::{
    domain::{ArtifactKind, ModulePath, TemplateRef},
    error::MetacodeResult,
};

impl CodeGenerator {
    /// Add a subpackage with its test package and API index.
    ///
    /// `name` may itself be nested (`sub.inner`) when the parent exists.
    /// The new index is registered in the `Subpackages` block of the parent
    /// API index.
    #[instrument(skip_all, fields(package = %self.layout.name(), subpackage = %name))]
    pub fn create_subpackage(&self, name: &str) -> MetacodeResult<GenerationReport> {
        let path: ModulePath = name.parse()?;
        let mut report = GenerationReport::new();

        let parents = path.subpackages();
        if path.is_nested() {
            let parent = self.layout.package_dir(parents);
            if !self.engine.directory_exists(&parent) {
                report.skip_missing(ArtifactKind::Subpackage, parent);
                return Ok(report);
            }
        }

        let segments: Vec<String> = parents
            .iter()
            .cloned()
            .chain(std::iter::once(path.name().to_string()))
            .collect();
        let directory = self.layout.package_dir(&segments);
        if self.engine.directory_exists(&directory) {
            report.skip(ArtifactKind::Subpackage, directory);
            return Ok(report);
        }

        self.write_subpackage(&segments, &mut report)?;
        info!(subpackage = %path, "subpackage created");
        Ok(report)
    }

    /// Directories, marker files and API index of a subpackage.
    ///
    /// Shared with the GUI generator, which creates `gui` the same way.
    pub(super) fn write_subpackage(&self, segments: &[String], report: &mut GenerationReport) -> MetacodeResult<()> {
        let (name, parents) = match segments.split_last() {
            Some((name, parents)) => (name.as_str(), parents),
            None => return Ok(()),
        };

        let directory = self.layout.package_dir(segments);
        self.ensure_dir(&directory, report)?;
        self.ensure_marker_file(&directory.join("__init__.py"), report)?;

        let tests = self.layout.tests_package_dir(segments);
        self.ensure_dir(&tests, report)?;
        self.ensure_marker_file(&tests.join("__init__.py"), report)?;

        let docs = self.layout.api_docs_package_dir(segments);
        let index = docs.join("index.rst");
        if self.engine.file_exists(&index) {
            report.skip(ArtifactKind::Documentation, index);
            return Ok(());
        }

        let qualified = std::iter::once(self.layout.name())
            .chain(segments.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(".");
        let context = self
            .base_context()
            .with("subpackage.name", name)
            .with("subpackage.qualified", qualified.as_str())
            .with("header_extension", "=".repeat(qualified.chars().count()));
        self.ensure_dir(&docs, report)?;
        self.create_file(TemplateRef::new("docs", "api_subpackage_index.rst"), index, &context, report)?;

        let parent_index = self.layout.api_docs_package_dir(parents).join("index.rst");
        self.register_subpackage(&parent_index, format!("{name}/index"))
    }
}
