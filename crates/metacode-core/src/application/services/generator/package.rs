use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::{CodeGenerator, GenerationReport};
use crate::{
    domain::{ArtifactKind, DomainError, RenderContext, TemplateRef},
    error::MetacodeResult,
};

const INITIAL_VERSION: &str = "0.1.0.dev0\n";
const DOCUMENTATION_PAGES: [&str; 7] = [
    "audience",
    "changelog",
    "developers",
    "installing",
    "people",
    "roadmap",
    "usecases",
];
const PRE_COMMIT_HOOK: &str = "#!/bin/sh\n./bin/incrementVersion.sh\n";

impl CodeGenerator {
    /// Create the package skeleton in the generator's root directory.
    ///
    /// If the source directory `<root>/<name>` already exists the whole
    /// package is skipped. Otherwise every file already present in `<root>`
    /// is skipped on its own and the rest is generated around it. With `options.git` the repository is initialised
    /// afterwards, with `options.gui` the GUI subsystem is added.
    #[instrument(skip_all, fields(package = %self.layout.name(), root = %self.layout.root().display()))]
    pub fn create_package(&self) -> MetacodeResult<GenerationReport> {
        if self.layout.name().is_empty() {
            return Err(DomainError::MissingArgument {
                argument: "package name",
            }
            .into());
        }

        let mut report = GenerationReport::new();
        let source = self.layout.source_dir();
        if self.engine.directory_exists(&source) {
            report.skip(ArtifactKind::Package, source);
            return Ok(report);
        }

        self.write_skeleton(&mut report)?;
        self.write_metadata(&mut report)?;
        self.write_documentation(&mut report)?;
        self.init_version_control();

        if self.configuration.options.gui {
            let gui = self.create_gui()?;
            report.merge(gui);
        }

        info!(files = report.created.len(), "package created");
        Ok(report)
    }

    fn write_skeleton(&self, report: &mut GenerationReport) -> MetacodeResult<()> {
        let layout = &self.layout;
        for directory in [
            layout.root().to_path_buf(),
            layout.source_dir(),
            layout.tests_dir(),
            layout.api_docs_dir(),
            layout.docs_dir().join("_templates"),
            layout.root().join("bin"),
        ] {
            self.ensure_dir(&directory, report)?;
        }
        self.ensure_marker_file(&layout.source_dir().join("__init__.py"), report)?;
        self.ensure_marker_file(&layout.tests_dir().join("__init__.py"), report)?;
        Ok(())
    }

    fn write_metadata(&self, report: &mut GenerationReport) -> MetacodeResult<()> {
        let root = self.layout.root();
        let context = self.base_context();

        self.copy_new_file(TemplateRef::root("gitignore"), root.join(".gitignore"), report)?;
        self.copy_new_file(TemplateRef::root("prospector.yaml"), root.join(".prospector.yaml"), report)?;

        let version = self.layout.version_file();
        if self.is_absent(&version, report) {
            self.engine.filesystem().write_file(&version, INITIAL_VERSION)?;
            report.created(version);
        }

        let license = self.configuration.package.license;
        self.create_new_file(
            TemplateRef::new("licenses", license.template_name()),
            root.join("LICENSE"),
            &context,
            report,
        )?;
        self.copy_new_file(TemplateRef::root("MANIFEST.in"), self.layout.manifest_file(), report)?;
        self.create_new_file(TemplateRef::root("setup.py"), self.layout.setup_file(), &context, report)?;
        self.create_new_file(TemplateRef::root("README.rst"), root.join("README.rst"), &context, report)?;

        let script = root.join("bin").join("incrementVersion.sh");
        if self.copy_new_file(TemplateRef::root("incrementVersion.sh"), script.clone(), report)? {
            self.engine.filesystem().set_executable(&script)?;
        }
        Ok(())
    }

    fn write_documentation(&self, report: &mut GenerationReport) -> MetacodeResult<()> {
        let docs = self.layout.docs_dir();
        let context = self.base_context();

        for file in ["Makefile", "make.bat"] {
            self.copy_new_file(TemplateRef::new("docs", file), docs.join(file), report)?;
        }
        self.create_new_file(TemplateRef::new("docs", "conf.py"), docs.join("conf.py"), &context, report)?;

        // The docs landing page is the README followed by the main toctree.
        let index = docs.join("index.rst");
        if self.is_absent(&index, report) {
            let readme = self
                .engine
                .filesystem()
                .read_to_string(&self.layout.root().join("README.rst"))?;
            self.engine.filesystem().write_file(&index, &readme)?;
            self.append_to_file(TemplateRef::new("docs", "main-toctree.rst"), &index, &context)?;
            report.created(index);
        }

        self.create_new_file(
            TemplateRef::new("docs", "api_index.rst"),
            self.layout.api_docs_dir().join("index.rst"),
            &context,
            report,
        )?;
        for page in DOCUMENTATION_PAGES {
            let name = format!("{page}.rst");
            self.create_new_file(TemplateRef::new("docs", name.as_str()), docs.join(&name), &context, report)?;
        }

        let templates = docs.join("_templates");
        for file in ["page.html", "versions.html"] {
            self.copy_new_file(TemplateRef::new("docs/_templates", file), templates.join(file), report)?;
        }
        Ok(())
    }

    /// Package-level files may predate the package, e.g. in a cloned
    /// repository holding only a README. Those are skipped one by one.
    fn is_absent(&self, path: &Path, report: &mut GenerationReport) -> bool {
        if self.engine.file_exists(path) {
            report.skip(ArtifactKind::File, path);
            return false;
        }
        true
    }

    fn create_new_file(
        &self,
        template: TemplateRef,
        destination: PathBuf,
        context: &RenderContext,
        report: &mut GenerationReport,
    ) -> MetacodeResult<bool> {
        if !self.is_absent(&destination, report) {
            return Ok(false);
        }
        self.create_file(template, destination, context, report)?;
        Ok(true)
    }

    fn copy_new_file(&self, template: TemplateRef, destination: PathBuf, report: &mut GenerationReport) -> MetacodeResult<bool> {
        if !self.is_absent(&destination, report) {
            return Ok(false);
        }
        self.copy_file(template, destination, report)?;
        Ok(true)
    }

    /// `git init` plus a pre-commit hook bumping the version.
    ///
    /// Failures are logged and otherwise ignored.
    fn init_version_control(&self) {
        if !self.configuration.options.git {
            return;
        }
        let Some(vcs) = &self.version_control else {
            warn!("git requested but no version control available");
            return;
        };
        let root = self.layout.root();
        if let Err(error) = vcs.init_repository(root) {
            warn!(%error, "repository initialisation failed");
            return;
        }
        if let Err(error) = vcs.install_hook(root, "pre-commit", PRE_COMMIT_HOOK) {
            warn!(%error, "installing pre-commit hook failed");
        }
    }
}
