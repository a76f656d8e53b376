//! Domain module.
//!
//! # Module Structure
//!
//! - `model`: Domain identifiers, kinds, fallbacks and profiles
//! - `registry`: The validated, immutable `DomainRegistry`
//! - `builtin`: Compiled-in rule tables for every domain

pub(crate) mod builtin;
mod model;
mod registry;

pub use model::{DocumentEntry, DomainId, DomainKind, DomainProfile, Fallback};
pub use registry::DomainRegistry;
