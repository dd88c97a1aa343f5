//! `git` invoked as an external process.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use metacode_core::{
    application::{ApplicationError, ports::VersionControl},
    error::MetacodeResult,
};

/// Runs the `git` executable found on `PATH` (or a configured one).
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific executable instead of `git` from `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

fn failed(reason: impl Into<String>) -> metacode_core::error::MetacodeError {
    ApplicationError::VersionControlFailed {
        reason: reason.into(),
    }
    .into()
}

impl VersionControl for GitCli {
    #[instrument(skip(self), fields(root = %root.display()))]
    fn init_repository(&self, root: &Path) -> MetacodeResult<()> {
        let output = Command::new(&self.program)
            .arg("init")
            .current_dir(root)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| failed(format!("could not run '{}': {e}", self.program)))?;

        if !output.status.success() {
            return Err(failed(format!(
                "'{} init' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        debug!("repository initialised");
        Ok(())
    }

    #[instrument(skip(self, script), fields(root = %root.display()))]
    fn install_hook(&self, root: &Path, name: &str, script: &str) -> MetacodeResult<()> {
        let hooks = root.join(".git").join("hooks");
        std::fs::create_dir_all(&hooks).map_err(|e| failed(format!("creating {}: {e}", hooks.display())))?;

        let hook = hooks.join(name);
        std::fs::write(&hook, script).map_err(|e| failed(format!("writing {}: {e}", hook.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&hook, std::fs::Permissions::from_mode(0o755))
                .map_err(|e| failed(format!("making {} executable: {e}", hook.display())))?;
        }
        debug!(hook = %hook.display(), "hook installed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = GitCli::with_program("metacode-no-such-git")
            .init_repository(dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("metacode-no-such-git"));
    }

    #[test]
    fn hook_is_written_into_git_dir() {
        let dir = tempfile::tempdir().unwrap();
        GitCli::new()
            .install_hook(dir.path(), "pre-commit", "#!/bin/sh\n")
            .unwrap();
        let hook = dir.path().join(".git/hooks/pre-commit");
        assert_eq!(std::fs::read_to_string(&hook).unwrap(), "#!/bin/sh\n");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&hook).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }
}
