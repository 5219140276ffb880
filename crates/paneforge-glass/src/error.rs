use paneforge_core::{Angles, Direction, Vec3};
use paneforge_parser::FrameKind;
use thiserror::Error;

/// Why a pane could not be built. Every variant names the pane's target.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlassError {
    #[error("\"{target}\" is inconsistently rotated: pane faces {expected}, a marker faces {found}")]
    InconsistentNormal {
        target: String,
        expected: Direction,
        found: Direction,
    },

    #[error("\"{target}\" has multiple configs: \"{first}\" and \"{second}\"")]
    MultipleConfigs {
        target: String,
        first: String,
        second: String,
    },

    #[error("\"{target}\": marker angles ({angles}) do not face along an axis")]
    UnalignedMarker { target: String, angles: Angles },

    #[error("\"{target}\": invalid marker: {message}")]
    InvalidMarker { target: String, message: String },

    #[error("\"{target}\": {solid} solid from ({min}) to ({max}) has no volume")]
    DegenerateGeometry {
        target: String,
        solid: &'static str,
        min: Vec3,
        max: Vec3,
    },

    #[error("\"{target}\": no {kind} frame orientation faces {normal} with up {up}")]
    FrameOrientation {
        target: String,
        kind: FrameKind,
        normal: Direction,
        up: Direction,
    },
}

impl GlassError {
    /// Target name of the pane that failed.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            GlassError::InconsistentNormal { target, .. }
            | GlassError::MultipleConfigs { target, .. }
            | GlassError::UnalignedMarker { target, .. }
            | GlassError::InvalidMarker { target, .. }
            | GlassError::DegenerateGeometry { target, .. }
            | GlassError::FrameOrientation { target, .. } => target,
        }
    }
}
