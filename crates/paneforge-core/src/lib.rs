//! Vector and orientation primitives shared by the paneforge crates.
//!
//! Coordinates follow the level editor's conventions: Z is up, one grid cell is 128 units and
//! orientations are `pitch yaw roll` triples in degrees.

pub mod angles;
pub mod vec3;

pub use angles::Angles;
pub use vec3::{Axis, Direction, Vec3};

use thiserror::Error;

/// Tolerance used when comparing rotated unit vectors.
pub const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected 3 numbers separated by spaces, got \"{0}\"")]
    Arity(String),

    #[error("invalid number \"{value}\" in \"{input}\"")]
    Number { input: String, value: String },

    #[error("non-finite number \"{value}\" in \"{input}\"")]
    NonFinite { input: String, value: String },
}

pub(crate) fn parse_triple(input: &str) -> Result<[f64; 3], ParseError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ParseError::Arity(input.to_string()));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        let value = part.parse::<f64>().map_err(|_| ParseError::Number {
            input: input.to_string(),
            value: part.to_string(),
        })?;
        if !value.is_finite() {
            return Err(ParseError::NonFinite {
                input: input.to_string(),
                value: part.to_string(),
            });
        }
        *slot = value;
    }
    Ok(out)
}

/// Formats a coordinate the way level files store them: integral values without a fraction.
#[must_use]
pub fn format_num(v: f64) -> String {
    let rounded = v.round();
    if (v - rounded).abs() < 1e-9 {
        // `as i64` also folds -0.0 into 0.
        format!("{}", rounded as i64)
    } else {
        format!("{v}")
    }
}
