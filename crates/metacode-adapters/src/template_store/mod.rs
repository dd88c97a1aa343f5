//! Template lookup across override locations.
//!
//! A [`LayeredTemplateStore`] asks an ordered list of [`TemplateSource`]s
//! for a template and returns the first hit:
//!
//! 1. `$METACODE_TEMPLATES_DIR` and the tool configuration's directory
//! 2. the user data directory (`<data dir>/metacode/templates`)
//! 3. the site directory (`/usr/share/metacode/templates`, Unix only)
//! 4. the templates bundled into the binary
//!
//! Which directories exist on this machine is decided by
//! [`TemplateLocations::discover`]; the lookup itself is the pure
//! [`resolve`] function and never touches the process environment.

mod bundled;
mod directory;
mod layered;
mod locations;
mod memory;

pub use bundled::BundledTemplates;
pub use directory::DirectorySource;
pub use layered::{LayeredTemplateStore, TemplateSource, resolve};
pub use locations::{TEMPLATES_DIR_ENV, TemplateLocations};
pub use memory::MemorySource;
