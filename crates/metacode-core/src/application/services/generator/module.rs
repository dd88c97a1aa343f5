use tracing::{info, instrument};

use super::{CodeGenerator, GenerationReport};
use crate::{
    domain::{ArtifactKind, ModulePath, TemplateRef},
    error::MetacodeResult,
};

impl CodeGenerator {
    /// Add a module with its test module and API documentation.
    ///
    /// `name` may be qualified (`sub.bar`); the subpackage must exist,
    /// otherwise the module is skipped with a warning. An existing module
    /// file skips everything, an existing test or doc file skips only that
    /// file.
    #[instrument(skip_all, fields(package = %self.layout.name(), module = %name))]
    pub fn create_module(&self, name: &str) -> MetacodeResult<GenerationReport> {
        let module: ModulePath = name.parse()?;
        let mut report = GenerationReport::new();

        if module.is_nested() {
            let subpackage = self.layout.package_dir(module.subpackages());
            if !self.engine.directory_exists(&subpackage) {
                report.skip_missing(ArtifactKind::Subpackage, subpackage);
                return Ok(report);
            }
        }

        let source = self.layout.module_file(&module);
        if self.engine.file_exists(&source) {
            report.skip(ArtifactKind::Module, source);
            return Ok(report);
        }

        let context = self
            .base_context()
            .with("module.name", module.name())
            .with("module.package", module.parent_package(self.layout.name()));
        self.create_file(TemplateRef::new("code", "module.py"), source, &context, &mut report)?;

        let test = self.layout.test_file(&module);
        if self.engine.file_exists(&test) {
            report.skip(ArtifactKind::TestModule, test);
        } else {
            self.ensure_dir(&self.layout.tests_package_dir(module.subpackages()), &mut report)?;
            self.create_file(TemplateRef::new("code", "test_module.py"), test, &context, &mut report)?;
        }

        self.write_module_docs(&module, &mut report)?;

        info!(module = %module, "module created");
        Ok(report)
    }
}
