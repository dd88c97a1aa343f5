use std::path::PathBuf;

use tracing::debug;

/// Environment variable naming a highest-priority template directory.
pub const TEMPLATES_DIR_ENV: &str = "METACODE_TEMPLATES_DIR";

#[cfg(unix)]
const SITE_TEMPLATES_DIR: Option<&str> = Some("/usr/share/metacode/templates");
#[cfg(not(unix))]
const SITE_TEMPLATES_DIR: Option<&str> = None;

/// Template override directories, in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateLocations {
    /// Explicit overrides (`$METACODE_TEMPLATES_DIR`, tool configuration).
    pub overrides: Vec<PathBuf>,
    /// Per-user data directory.
    pub user: Option<PathBuf>,
    /// System-wide data directory.
    pub site: Option<PathBuf>,
}

impl TemplateLocations {
    /// Look up the override directories for this machine.
    ///
    /// `configured` is the template directory from the tool configuration;
    /// it ranks below the environment variable.
    pub fn discover(configured: Option<PathBuf>) -> Self {
        let mut overrides = Vec::new();
        if let Some(dir) = std::env::var_os(TEMPLATES_DIR_ENV).filter(|v| !v.is_empty()) {
            let dir = PathBuf::from(dir);
            debug!(path = %dir.display(), "template override from ${TEMPLATES_DIR_ENV}");
            overrides.push(dir);
        }
        overrides.extend(configured);

        let user = directories::ProjectDirs::from("org", "metacode", "metacode")
            .map(|dirs| dirs.data_dir().join("templates"));
        let site = SITE_TEMPLATES_DIR.map(PathBuf::from);

        Self { overrides, user, site }
    }

    /// Only the given directories, no user or site lookup.
    pub fn from_directories(overrides: Vec<PathBuf>) -> Self {
        Self {
            overrides,
            user: None,
            site: None,
        }
    }

    /// All directories, highest priority first.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.overrides
            .iter()
            .cloned()
            .chain(self.user.clone())
            .chain(self.site.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_are_ordered_by_priority() {
        let locations = TemplateLocations {
            overrides: vec![PathBuf::from("env"), PathBuf::from("config")],
            user: Some(PathBuf::from("user")),
            site: Some(PathBuf::from("site")),
        };
        assert_eq!(
            locations.directories(),
            ["env", "config", "user", "site"].map(PathBuf::from).to_vec()
        );
    }

    #[test]
    fn configured_directory_is_kept() {
        let locations = TemplateLocations::discover(Some(PathBuf::from("/opt/templates")));
        assert!(locations.overrides.contains(&PathBuf::from("/opt/templates")));
    }
}
