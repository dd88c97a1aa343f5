//! Application layer for metacode.
//!
//! This layer contains:
//! - **Services**: the scaffold engine and the artifact generators
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Generators compose the engine's three capabilities (existence guard,
//! template rendering, structural insertion) into multi-file artifacts.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CodeGenerator, GenerationReport, ScaffoldEngine, SkipReason, SkippedArtifact, SymbolKind,
};

pub use ports::{Filesystem, TemplateRenderer, TemplateStore, VersionControl};

pub use error::ApplicationError;
