//! Axis-aligned boxes and brush prisms.

pub mod bbox;
pub mod prism;

pub use bbox::Bbox;
pub use prism::{Face, Prism, NODRAW};

use paneforge_core::Vec3;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("solid from ({min}) to ({max}) has no volume")]
    Degenerate { min: Vec3, max: Vec3 },
}
