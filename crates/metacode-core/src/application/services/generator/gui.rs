use tracing::{debug, info, instrument};

use super::{CodeGenerator, GenerationReport};
use crate::{
    domain::{
        ArtifactKind, DomainError, GuiComponent, ModulePath, RenderContext, TemplateRef, is_identifier,
        packaging::{add_entry_point, add_requirement, ensure_manifest_line},
    },
    error::MetacodeResult,
};

const GUI_PACKAGE: &str = "gui";
const GUI_REQUIREMENTS: [&str; 2] = ["PySide6", "qtbricks"];
const GUI_MODULES: [(&str, &str); 3] = [
    ("app", "gui_app.py"),
    ("mainwindow", "gui_mainwindow.py"),
    ("utils", "gui_utils.py"),
];
const GUI_IMAGES: [&str; 2] = ["icon.svg", "splash.svg"];

impl CodeGenerator {
    /// Add the GUI subsystem: app shell, main window, images, tests, docs.
    ///
    /// Also wires the `gui_scripts` entry point and the Qt requirements into
    /// `setup.py` and the GUI data files into `MANIFEST.in`. Both edits are
    /// idempotent.
    #[instrument(skip_all, fields(package = %self.layout.name()))]
    pub fn create_gui(&self) -> MetacodeResult<GenerationReport> {
        let mut report = GenerationReport::new();
        let gui_dir = self.layout.gui_dir();
        if self.engine.directory_exists(&gui_dir) {
            report.skip(ArtifactKind::Gui, gui_dir);
            return Ok(report);
        }

        self.write_subpackage(&[GUI_PACKAGE.to_string()], &mut report)?;

        let context = self.gui_context();
        for (module, template) in GUI_MODULES {
            self.create_file(
                TemplateRef::new("code", template),
                gui_dir.join(format!("{module}.py")),
                &context,
                &mut report,
            )?;
        }

        let images = gui_dir.join("images");
        self.ensure_dir(&images, &mut report)?;
        for image in GUI_IMAGES {
            self.copy_file(TemplateRef::new("gui", image), images.join(image), &mut report)?;
        }
        self.ensure_dir(&gui_dir.join("ui"), &mut report)?;

        let mainwindow = GuiComponent::Window.names("main");
        self.write_gui_test(&mainwindow.module, &mainwindow.class, &mut report)?;

        for (module, _) in GUI_MODULES {
            let module = ModulePath::nested(vec![GUI_PACKAGE.to_string()], module);
            self.write_module_docs(&module, &mut report)?;
        }

        self.wire_gui_packaging(&mut report)?;

        info!("GUI created");
        Ok(report)
    }

    /// Add a window, widget or dialog module to an existing GUI.
    #[instrument(skip_all, fields(package = %self.layout.name(), %component, name = %name))]
    pub fn create_gui_component(&self, component: GuiComponent, name: &str) -> MetacodeResult<GenerationReport> {
        if name.trim().is_empty() {
            return Err(DomainError::MissingArgument {
                argument: match component {
                    GuiComponent::Window => "window name",
                    GuiComponent::Widget => "widget name",
                    GuiComponent::Dialog => "dialog name",
                },
            }
            .into());
        }
        let names = component.names(name.trim());
        if !is_identifier(&names.module) {
            return Err(DomainError::InvalidName {
                name: name.to_string(),
                reason: format!("'{}' is not a valid Python module name", names.module),
            }
            .into());
        }

        let gui_dir = self.layout.gui_dir();
        self.engine
            .require_directory(&gui_dir, "the GUI does not exist, run 'add gui' first")?;

        let module = ModulePath::nested(vec![GUI_PACKAGE.to_string()], names.module.as_str());
        let mut report = GenerationReport::new();

        let source = self.layout.module_file(&module);
        if self.engine.file_exists(&source) {
            report.skip(ArtifactKind::Module, source);
            return Ok(report);
        }

        let context = self
            .gui_context()
            .with("cls.name", names.class.as_str())
            .with("module.name", names.module.as_str());
        self.create_file(
            TemplateRef::new("code", component.template_name()),
            source,
            &context,
            &mut report,
        )?;
        self.write_gui_test(&names.module, &names.class, &mut report)?;
        self.write_module_docs(&module, &mut report)?;

        info!(module = %names.module, class = %names.class, "GUI component created");
        Ok(report)
    }

    fn gui_context(&self) -> RenderContext {
        self.base_context().with("options.gui", true)
    }

    /// `tests/gui/test_<module>.py`: imports header plus one test class.
    fn write_gui_test(&self, module: &str, class: &str, report: &mut GenerationReport) -> MetacodeResult<()> {
        let test = self
            .layout
            .test_file(&ModulePath::nested(vec![GUI_PACKAGE.to_string()], module));
        if self.engine.file_exists(&test) {
            report.skip(ArtifactKind::TestModule, test);
            return Ok(());
        }

        let context = self
            .gui_context()
            .with("module.name", module)
            .with("module.package", format!("{}.{GUI_PACKAGE}", self.layout.name()))
            .with("cls.name", class);
        self.create_file(TemplateRef::new("code", "test_gui_module.py"), test.clone(), &context, report)?;
        self.append_to_file(TemplateRef::new("code", "test_guiclass.py"), &test, &context)
    }

    fn wire_gui_packaging(&self, report: &mut GenerationReport) -> MetacodeResult<()> {
        let package = self.layout.name();

        let setup = self.layout.setup_file();
        if self.engine.file_exists(&setup) {
            let entry = format!("{package} = {package}.gui.app:main");
            let changed = self.engine.edit_file(&setup, |content| {
                let mut content = add_entry_point(content, "gui_scripts", &entry)?;
                for requirement in GUI_REQUIREMENTS {
                    content = add_requirement(&content, requirement)?;
                }
                Ok(content)
            })?;
            if changed {
                report.updated(setup);
            }
        } else {
            debug!(path = %setup.display(), "no setup.py, packaging not wired");
        }

        let manifest = self.layout.manifest_file();
        if self.engine.file_exists(&manifest) {
            let changed = self.engine.edit_file(&manifest, |content| {
                let content = ensure_manifest_line(content, &format!("include {package}/gui/images/*"));
                Ok(ensure_manifest_line(&content, &format!("include {package}/gui/ui/*")))
            })?;
            if changed {
                report.updated(manifest);
            }
        }
        Ok(())
    }
}
