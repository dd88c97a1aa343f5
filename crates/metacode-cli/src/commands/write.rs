//! `pymeta write config [to <file>]`: write the default package
//! configuration for the user to fill in.

use std::path::Path;

use metacode_adapters::{LocalFilesystem, write_configuration};
use metacode_core::prelude::Configuration;
use tracing::{info, instrument};

use crate::{commands::Workspace, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(destination = %destination.display()))]
pub fn execute(destination: &Path, workspace: &Workspace, output: &OutputManager) -> CliResult<()> {
    let path = workspace.resolve(destination);
    write_configuration(&LocalFilesystem::new(), &path, &Configuration::default())?;
    info!(path = %path.display(), "configuration written");

    output.success(&format!(
        "Wrote configuration to file \"{}\"",
        destination.display()
    ))?;
    Ok(())
}
