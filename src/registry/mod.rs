//! Registry loading and lookup.
//!
//! The registry is a JSON object keyed by entry id. It is read once through a
//! [`RegistryCache`] and never mutated afterwards.

mod error;
mod model;
mod store;

pub use error::RegistryLoadError;
pub use model::{Entry, InstallationSpec, VariableSpec};
pub use store::{Registry, RegistryCache};
