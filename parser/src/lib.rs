//! Schema-parsing helpers that run before client code is emitted.
//!
//! Currently this covers enum vendor extensions: `extend_enum` overlays the
//! `x-enum-*` arrays of a schema node onto the members parsed from its
//! `enum` list.

pub mod extension;
pub mod model;

pub use extension::{extend_enum, EnumExtensions};
pub use model::{EnumKind, EnumMember};
