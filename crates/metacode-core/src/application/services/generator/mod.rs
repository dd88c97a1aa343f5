//! Artifact generators.
//!
//! One public method per artifact kind, each a short linear pipeline:
//! validate, guard, render the primary artifact, render its companion test,
//! then write and register its documentation. An artifact that already
//! exists is never touched: it is recorded as skipped, logged with `warn!`,
//! and everything downstream of it is left out.
//!
//! The generator methods live in the submodules, grouped by artifact
//! family; the shared plumbing is here.

mod gui;
mod module;
mod package;
mod subpackage;
mod symbol;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    application::{ScaffoldEngine, ports::VersionControl},
    domain::{
        ArtifactDescriptor, ArtifactKind, BlockInsertion, Configuration, ModulePath, PackageLayout,
        RenderContext, TemplateRef,
    },
    error::MetacodeResult,
};

/// Version used for `versionadded` directives when `VERSION` is missing.
const FALLBACK_VERSION: &str = "0.1";

/// Why an artifact was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The artifact is already there.
    Exists,
    /// The directory it would live in is missing.
    MissingParent,
}

/// An artifact the generator did not write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedArtifact {
    pub artifact: ArtifactKind,
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::Exists => write!(f, "{} '{}' exists already", self.artifact, self.path.display()),
            SkipReason::MissingParent => {
                write!(f, "{} '{}' does not exist", self.artifact, self.path.display())
            }
        }
    }
}

/// What a generator call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files and directories written, in creation order.
    pub created: Vec<PathBuf>,
    /// Existing files that were appended to or edited.
    pub updated: Vec<PathBuf>,
    /// Artifacts that already existed and were skipped.
    pub skipped: Vec<SkippedArtifact>,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// True when the call did not write anything.
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty()
    }

    pub fn was_created(&self, path: &Path) -> bool {
        self.created.iter().any(|p| p == path)
    }

    fn created(&mut self, path: impl Into<PathBuf>) {
        self.created.push(path.into());
    }

    fn updated(&mut self, path: impl Into<PathBuf>) {
        self.updated.push(path.into());
    }

    /// Record and warn about an existing artifact.
    fn skip(&mut self, artifact: ArtifactKind, path: impl Into<PathBuf>) {
        self.push_skipped(artifact, path.into(), SkipReason::Exists);
    }

    /// Record and warn about an artifact whose parent is missing.
    fn skip_missing(&mut self, artifact: ArtifactKind, path: impl Into<PathBuf>) {
        self.push_skipped(artifact, path.into(), SkipReason::MissingParent);
    }

    fn push_skipped(&mut self, artifact: ArtifactKind, path: PathBuf, reason: SkipReason) {
        let skipped = SkippedArtifact { artifact, path, reason };
        warn!(artifact = %skipped.artifact, path = %skipped.path.display(), "{skipped}");
        self.skipped.push(skipped);
    }

    fn merge(&mut self, other: GenerationReport) {
        self.created.extend(other.created);
        self.updated.extend(other.updated);
        self.skipped.extend(other.skipped);
    }
}

/// Generates and extends one package.
///
/// `root` is the package root: the directory holding `setup.py`, `VERSION`
/// and the `.package_config.toml`. The configuration is never modified;
/// every render gets a fresh context built from it.
pub struct CodeGenerator {
    engine: ScaffoldEngine,
    configuration: Configuration,
    layout: PackageLayout,
    version_control: Option<Box<dyn VersionControl>>,
}

impl CodeGenerator {
    pub fn new(engine: ScaffoldEngine, configuration: Configuration, root: impl Into<PathBuf>) -> Self {
        let layout = PackageLayout::new(root, configuration.package.name.clone());
        Self {
            engine,
            configuration,
            layout,
            version_control: None,
        }
    }

    /// Enable repository initialisation for `create_package`.
    ///
    /// Only consulted when `options.git` is set.
    pub fn with_version_control(mut self, version_control: Box<dyn VersionControl>) -> Self {
        self.version_control = Some(version_control);
        self
    }

    pub fn layout(&self) -> &PackageLayout {
        &self.layout
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    // -------------------------------------------------------------------------
    // Shared plumbing
    // -------------------------------------------------------------------------

    /// A new context from the configuration. Never reused across renders.
    fn base_context(&self) -> RenderContext {
        RenderContext::from_configuration(&self.configuration)
    }

    /// `major.minor` from the `VERSION` file.
    fn package_version(&self) -> MetacodeResult<String> {
        let path = self.layout.version_file();
        if !self.engine.file_exists(&path) {
            debug!(path = %path.display(), "no VERSION file, using fallback version");
            return Ok(FALLBACK_VERSION.to_string());
        }
        let content = self.engine.filesystem().read_to_string(&path)?;
        let version = content
            .trim()
            .split('.')
            .take(2)
            .collect::<Vec<_>>()
            .join(".");
        if version.is_empty() {
            Ok(FALLBACK_VERSION.to_string())
        } else {
            Ok(version)
        }
    }

    fn ensure_dir(&self, path: &Path, report: &mut GenerationReport) -> MetacodeResult<()> {
        if !self.engine.directory_exists(path) {
            self.engine.filesystem().create_dir_all(path)?;
            report.created(path);
        }
        Ok(())
    }

    fn ensure_marker_file(&self, path: &Path, report: &mut GenerationReport) -> MetacodeResult<()> {
        if self.engine.ensure_file(path)? {
            report.created(path);
        }
        Ok(())
    }

    /// Render `template` into a new file at `destination`.
    fn create_file(
        &self,
        template: TemplateRef,
        destination: PathBuf,
        context: &RenderContext,
        report: &mut GenerationReport,
    ) -> MetacodeResult<()> {
        let artifact = ArtifactDescriptor::create(template, &destination);
        self.engine.execute(&artifact, context)?;
        report.created(destination);
        Ok(())
    }

    fn append_to_file(&self, template: TemplateRef, destination: &Path, context: &RenderContext) -> MetacodeResult<()> {
        self.engine.execute(&ArtifactDescriptor::append(template, destination), context)
    }

    /// Copy an unrendered template to `destination`.
    fn copy_file(&self, template: TemplateRef, destination: PathBuf, report: &mut GenerationReport) -> MetacodeResult<()> {
        self.engine.copy_verbatim(&template, &destination)?;
        report.created(destination);
        Ok(())
    }

    /// Write a module's API doc stub and register it in its index.
    ///
    /// An existing stub is skipped together with its registration. A
    /// missing index is a simpler layout, so registration is then skipped
    /// silently.
    fn write_module_docs(&self, module: &ModulePath, report: &mut GenerationReport) -> MetacodeResult<()> {
        let destination = self.layout.api_doc_file(module);
        if self.engine.file_exists(&destination) {
            report.skip(ArtifactKind::Documentation, destination);
            return Ok(());
        }

        let package = self.layout.name();
        let qualified = module.qualified(package);
        let context = self
            .base_context()
            .with("module.name", module.name())
            .with("module.qualified", qualified.as_str())
            .with("header_extension", "=".repeat(qualified.chars().count()));

        self.ensure_dir(&self.layout.api_docs_package_dir(module.subpackages()), report)?;
        self.create_file(TemplateRef::new("docs", "api_module.rst"), destination, &context, report)?;

        self.register_in_index(
            &self.layout.api_index(module),
            &BlockInsertion::toctree().sorted(),
            qualified,
        )
    }

    /// Register a subpackage index in the `Subpackages` block of `index`.
    fn register_subpackage(&self, index: &Path, entry: String) -> MetacodeResult<()> {
        self.register_in_index(index, &BlockInsertion::toctree().sorted().after("Subpackages"), entry)
    }

    fn register_in_index(&self, index: &Path, insertion: &BlockInsertion, entry: String) -> MetacodeResult<()> {
        if !self.engine.file_exists(index) {
            debug!(index = %index.display(), "no index file, registration skipped");
            return Ok(());
        }
        self.engine.insert_into_marked_block(index, insertion, &[entry])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_artifact_names_kind_and_path() {
        let skipped = SkippedArtifact {
            artifact: ArtifactKind::Module,
            path: PathBuf::from("foo/bar.py"),
            reason: SkipReason::Exists,
        };
        assert_eq!(skipped.to_string(), "module 'foo/bar.py' exists already");

        let missing = SkippedArtifact {
            artifact: ArtifactKind::Subpackage,
            path: PathBuf::from("foo/missing"),
            reason: SkipReason::MissingParent,
        };
        assert_eq!(missing.to_string(), "subpackage 'foo/missing' does not exist");
    }

    #[test]
    fn report_tracks_created_and_skipped() {
        let mut report = GenerationReport::new();
        assert!(report.is_empty());
        report.created("a.py");
        report.skip(ArtifactKind::TestModule, "tests/test_a.py");
        assert!(report.was_created(Path::new("a.py")));
        assert!(!report.is_complete());

        let mut other = GenerationReport::new();
        other.created("b.py");
        report.merge(other);
        assert_eq!(report.created.len(), 2);
    }
}
