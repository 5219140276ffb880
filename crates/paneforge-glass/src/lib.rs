//! Breakable glass synthesis.
//!
//! Glass items are placed as one marker instance per 128-unit cell. This crate merges the
//! markers of each pane into a bounding box, then replaces them with a breakable surface, an
//! inner clip slab that dies when the surface breaks, and the frame instances around the pane.
//!
//! The pass runs in three steps, each usable on its own:
//! - [`take_pane_groups`] consumes the markers and yields one [`PaneGroup`] per target name.
//! - [`build_glass`] turns a group into [`GlassGeometry`], including the frame pieces from
//!   [`synthesize_frames`].
//! - [`commit`] writes the geometry into the level.
//!
//! [`run`] drives all three and reports per pane, leaving the abort policy to the caller.

pub mod axes;
pub mod error;
pub mod frames;
pub mod group;
pub mod pass;
pub mod surface;

pub use axes::{pane_axes, CornerName, PaneAxes, Pick};
pub use error::GlassError;
pub use frames::{synthesize_frames, FramePiece};
pub use group::{group_markers, take_markers, take_pane_groups, InstanceMarker, PaneGroup, PaneGroups};
pub use pass::{build_pane, commit, run, FrameCounts, PaneReport};
pub use surface::{build_glass, clip_name, surf_name, GlassGeometry};

pub use paneforge_parser::FrameKind;

/// Edge length of one grid cell.
pub const CELL_SIZE: f64 = 128.0;

/// Distance from a cell's face to its center.
pub const HALF_CELL: f64 = 64.0;

/// Largest coordinate magnitude a marker may sit at; the engine's map bounds.
pub const MAP_EXTENT: f64 = 16384.0;
