use paneforge_core::Direction;
use serde::{Deserialize, Serialize};

use crate::{Bbox, GeometryError};

/// Tool texture that compiles to nothing visible.
pub const NODRAW: &str = "tools/toolsnodraw";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Outward-facing normal.
    pub normal: Direction,
    pub material: String,
}

/// Six-sided axis-aligned brush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prism {
    pub bounds: Bbox,
    /// One face per [`Direction`], in [`Direction::ALL`] order.
    pub faces: Vec<Face>,
}

impl Prism {
    /// Builds a prism with every face set to `material`.
    ///
    /// Fails when the bounds have zero or negative extent on any axis.
    pub fn new(bounds: Bbox, material: &str) -> Result<Self, GeometryError> {
        if bounds.is_degenerate() {
            return Err(GeometryError::Degenerate {
                min: bounds.min,
                max: bounds.max,
            });
        }
        let faces = Direction::ALL
            .iter()
            .map(|&normal| Face {
                normal,
                material: material.to_string(),
            })
            .collect();
        Ok(Self { bounds, faces })
    }

    #[must_use]
    pub fn face(&self, normal: Direction) -> Option<&Face> {
        self.faces.iter().find(|f| f.normal == normal)
    }

    /// Retextures the face pointing along `normal`, leaving the others untouched.
    pub fn set_material(&mut self, normal: Direction, material: &str) {
        for face in self.faces.iter_mut().filter(|f| f.normal == normal) {
            face.material = material.to_string();
        }
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.bounds.volume()
    }
}
