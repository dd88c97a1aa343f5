use tracing::{info, instrument};

use super::{CodeGenerator, GenerationReport};
use crate::{
    application::SymbolKind,
    domain::{
        ArtifactKind, DomainError, ModulePath, RenderContext, TemplateRef, camel_case_to_underscore,
        is_identifier, underscore_to_camel_case,
    },
    error::MetacodeResult,
};

impl CodeGenerator {
    /// Append a class and its test class to an existing module.
    #[instrument(skip_all, fields(package = %self.layout.name(), class = %name, module = %module))]
    pub fn create_class(&self, name: &str, module: &str) -> MetacodeResult<GenerationReport> {
        let context = self
            .base_context()
            .with("cls.name", name)
            .with("cls.instance", camel_case_to_underscore(name));
        self.append_symbol(SymbolKind::Class, name, module, context)
    }

    /// Append a function and its test class to an existing module.
    #[instrument(skip_all, fields(package = %self.layout.name(), function = %name, module = %module))]
    pub fn create_function(&self, name: &str, module: &str) -> MetacodeResult<GenerationReport> {
        let context = self
            .base_context()
            .with("function.name", name)
            .with("function.name_camelcase", underscore_to_camel_case(name));
        self.append_symbol(SymbolKind::Function, name, module, context)
    }

    fn append_symbol(
        &self,
        kind: SymbolKind,
        name: &str,
        module: &str,
        context: RenderContext,
    ) -> MetacodeResult<GenerationReport> {
        let (artifact, template, test_template) = match kind {
            SymbolKind::Class => (ArtifactKind::Class, "class.py", "test_class.py"),
            SymbolKind::Function => (ArtifactKind::Function, "function.py", "test_function.py"),
        };

        if name.is_empty() {
            return Err(DomainError::MissingArgument {
                argument: match kind {
                    SymbolKind::Class => "class name",
                    SymbolKind::Function => "function name",
                },
            }
            .into());
        }
        if !is_identifier(name) {
            return Err(DomainError::InvalidName {
                name: name.to_string(),
                reason: "not a valid Python identifier".into(),
            }
            .into());
        }
        let module: ModulePath = module.parse()?;

        let source = self.layout.module_file(&module);
        self.engine
            .require_file(&source, format!("module '{module}' does not exist"))?;
        let test = self.layout.test_file(&module);
        self.engine
            .require_file(&test, format!("test module for '{module}' does not exist"))?;

        let mut report = GenerationReport::new();
        if self.engine.symbol_defined_in_file(&source, kind, name)? {
            report.skip(artifact, source);
            return Ok(report);
        }

        let context = context
            .with("package.version", self.package_version()?)
            .with("module.name", module.name())
            .with("module.package", module.parent_package(self.layout.name()));

        self.append_to_file(TemplateRef::new("code", template), &source, &context)?;
        report.updated(source);
        self.append_to_file(TemplateRef::new("code", test_template), &test, &context)?;
        report.updated(test);

        info!(%kind, name, module = %module, "symbol appended");
        Ok(report)
    }
}
