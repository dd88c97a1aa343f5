//! `pymeta add ...`: extend the package in the working directory.

use metacode_adapters::{LocalFilesystem, read_configuration, write_configuration};
use metacode_core::prelude::{CodeGenerator, GenerationReport};
use tracing::{debug, instrument};

use crate::{
    cli::AddCommand,
    commands::Workspace,
    error::CliResult,
    output::OutputManager,
};

/// Run an `add` command against `.package_config.toml` in the working
/// directory. A missing configuration is a configuration error.
#[instrument(skip_all, fields(command = ?command))]
pub fn execute(command: AddCommand, workspace: &Workspace, output: &OutputManager) -> CliResult<()> {
    let fs = LocalFilesystem::new();
    let configuration = read_configuration(&fs, &workspace.package_configuration())?;
    let generator = workspace.generator(configuration, workspace.directory().to_path_buf());

    let (report, message) = match command {
        AddCommand::Module { name } => (
            generator.create_module(&name)?,
            format!("Added module \"{name}\""),
        ),
        AddCommand::Class { name, module } => (
            generator.create_class(&name, &module)?,
            format!("Added class \"{name}\" to module \"{module}\""),
        ),
        AddCommand::Function { name, module } => (
            generator.create_function(&name, &module)?,
            format!("Added function \"{name}\" to module \"{module}\""),
        ),
        AddCommand::Subpackage { name } => (
            generator.create_subpackage(&name)?,
            format!("Added subpackage \"{name}\""),
        ),
        AddCommand::Gui => {
            let report = generator.create_gui()?;
            enable_gui_option(&fs, workspace, &generator)?;
            (report, "Added GUI".to_string())
        }
        AddCommand::GuiComponent { component, name } => {
            let module = component.names(name.trim()).module;
            (
                generator.create_gui_component(component, &name)?,
                format!("Added {module} to GUI"),
            )
        }
    };

    announce(&report, &message, output)
}

/// Record `options.gui = true` so later package edits know about the GUI.
fn enable_gui_option(fs: &LocalFilesystem, workspace: &Workspace, generator: &CodeGenerator) -> CliResult<()> {
    if generator.configuration().options.gui {
        return Ok(());
    }
    let mut configuration = generator.configuration().clone();
    configuration.options.gui = true;
    write_configuration(fs, &workspace.package_configuration(), &configuration)?;
    debug!("options.gui enabled in package configuration");
    Ok(())
}

/// Skipped artifacts were already reported as warnings by the generator.
fn announce(report: &GenerationReport, message: &str, output: &OutputManager) -> CliResult<()> {
    if !report.is_empty() {
        output.success(message)?;
    }
    Ok(())
}
