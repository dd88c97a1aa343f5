//! Metacode Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the metacode
//! package scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          metacode-cli (pymeta)          │
//! │       (words -> Command -> handler)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (CodeGenerator, ScaffoldEngine)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (Filesystem, TemplateStore, Renderer,   │
//! │  VersionControl)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   metacode-adapters (Infrastructure)    │
//! │  (LocalFilesystem, TeraRenderer, git)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Configuration, naming, toctree blocks) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use metacode_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>, store: Box<dyn TemplateStore>,
//! #         renderer: Box<dyn TemplateRenderer>) -> MetacodeResult<()> {
//! let engine = ScaffoldEngine::new(store, renderer, filesystem);
//! let mut configuration = Configuration::default();
//! configuration.package.name = "foo".into();
//!
//! let generator = CodeGenerator::new(engine, configuration, "foo");
//! generator.create_module("bar")?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, CodeGenerator, GenerationReport, ScaffoldEngine, SkipReason,
        SkippedArtifact, SymbolKind,
        ports::{Filesystem, TemplateRenderer, TemplateStore, VersionControl},
    };
    pub use crate::domain::{
        ArtifactDescriptor, ArtifactKind, BlockInsertion, Configuration, DomainError,
        GuiComponent, License, ModulePath, PackageLayout, RenderContext, TemplateRef, WriteMode,
    };
    pub use crate::error::{MetacodeError, MetacodeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
