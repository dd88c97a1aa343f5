//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `metacode-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template lookup across override locations
//!   - `TemplateRenderer`: Template rendering
//!   - `VersionControl`: Optional repository initialisation
//!
//! - **Driving (Input) Ports**: `CodeGenerator`'s public methods, called by the CLI

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TemplateStore, VersionControl};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer, MockTemplateStore, MockVersionControl};
