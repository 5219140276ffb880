//! In-memory level document: entities with ordered keyvalues, brush solids and I/O wiring.

pub mod entity;
pub mod error;
pub mod level;

pub use entity::{Entity, EntityId, Output};
pub use error::Error;
pub use level::Level;

/// Marker entities placed by the editor for each item cell.
pub const INSTANCE_CLASS: &str = "func_instance";
