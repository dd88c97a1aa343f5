//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generators need from the outside world.
//! The `metacode-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::RenderContext;
use crate::error::MetacodeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `metacode_adapters::filesystem::LocalFilesystem` (production)
/// - `metacode_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MetacodeResult<()>;

    /// Write content to a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> MetacodeResult<()>;

    /// Append content to an existing file. Fails if the file is missing.
    fn append_file(&self, path: &Path, content: &str) -> MetacodeResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> MetacodeResult<String>;

    /// Add the executable bit (no-op where unsupported).
    fn set_executable(&self, path: &Path) -> MetacodeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by `metacode_adapters::template_store::LayeredTemplateStore`,
/// which searches user, site and bundled locations in that order.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Source text of the template with the given slash-separated name.
    ///
    /// Fails with `ApplicationError::TemplateNotFound` if no location has it.
    fn load(&self, name: &str) -> MetacodeResult<String>;
}

/// Port for template rendering.
///
/// Implemented by `metacode_adapters::renderer::TeraRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` (registered under `name` for error messages).
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> MetacodeResult<String>;
}

/// Port for the optional version-control integration.
///
/// Implemented by `metacode_adapters::vcs::GitCli`.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Initialise a repository in `root`.
    fn init_repository(&self, root: &Path) -> MetacodeResult<()>;

    /// Install an executable hook script called `name`.
    fn install_hook(&self, root: &Path, name: &str, script: &str) -> MetacodeResult<()>;
}
