//! `pymeta create package from <file>`.

use std::path::Path;

use metacode_adapters::{LocalFilesystem, read_configuration};
use metacode_core::{domain::CONFIG_FILE_NAME, prelude::Filesystem};
use tracing::{debug, instrument};

use crate::{commands::Workspace, error::CliResult, output::OutputManager};

/// Create the package described by `configuration_file` below the working
/// directory and keep a copy of the configuration in its root.
#[instrument(skip_all, fields(configuration = %configuration_file.display()))]
pub fn execute(configuration_file: &Path, workspace: &Workspace, output: &OutputManager) -> CliResult<()> {
    let fs = LocalFilesystem::new();
    let source = workspace.resolve(configuration_file);
    let configuration = read_configuration(&fs, &source)?;
    let name = configuration.package.name.clone();
    let root = workspace.resolve(Path::new(&name));

    let report = workspace
        .generator(configuration, root.clone())
        .create_package()?;
    copy_configuration(&fs, &source, &root)?;

    if !report.is_empty() {
        output.success(&format!(
            "Created package \"{name}\" in directory \"{name}\""
        ))?;
        output.info(&format!(
            "Run further pymeta commands from within \"{name}\""
        ))?;
    }
    Ok(())
}

/// Copy the configuration file verbatim to `<root>/.package_config.toml`
/// unless the package already has one.
fn copy_configuration(fs: &dyn Filesystem, source: &Path, root: &Path) -> CliResult<()> {
    let target = root.join(CONFIG_FILE_NAME);
    if fs.exists(&target) {
        debug!(path = %target.display(), "package configuration kept");
        return Ok(());
    }
    let content = fs.read_to_string(source)?;
    fs.write_file(&target, &content)?;
    Ok(())
}
