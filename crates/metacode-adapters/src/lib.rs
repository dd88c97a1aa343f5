//! Infrastructure adapters for metacode.
//!
//! This crate implements the ports defined in `metacode_core::application::ports`.
//! It contains all external dependencies and I/O operations: the local and
//! in-memory filesystems, the Tera renderer, the layered template store with
//! the bundled templates, the git wrapper, and configuration persistence.

pub mod config_file;
pub mod filesystem;
pub mod renderer;
pub mod template_store;
pub mod vcs;

// Re-export commonly used adapters
pub use config_file::{read_configuration, write_configuration};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::TeraRenderer;
pub use template_store::{BundledTemplates, LayeredTemplateStore, TemplateLocations};
pub use vcs::GitCli;
