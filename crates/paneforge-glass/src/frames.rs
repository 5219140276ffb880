use paneforge_core::{Angles, Axis, Direction, Vec3};
use paneforge_parser::FrameKind;
use tracing::debug;

use crate::axes::pane_axes;
use crate::group::PaneGroup;
use crate::{GlassError, CELL_SIZE, HALF_CELL, MAP_EXTENT};

/// A frame instance to place around a pane.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePiece {
    pub kind: FrameKind,
    pub target: String,
    pub origin: Vec3,
    pub angles: Angles,
}

struct FrameBuilder<'a> {
    target: &'a str,
    normal: Direction,
    pieces: Vec<FramePiece>,
}

impl FrameBuilder<'_> {
    /// Places a piece at `at`, facing the frame normal and rolled so its top points along
    /// `up` (an in-plane axis and sign). Origins sit half a cell behind `at`.
    fn place(
        &mut self,
        kind: FrameKind,
        at: Vec3,
        up: Option<(Axis, f64)>,
    ) -> Result<(), GlassError> {
        let facing = self.normal.to_vec();
        let angles = match up {
            None => Angles::facing(facing),
            Some((axis, sign)) => Angles::facing_with_up(facing, Vec3::on_axis(axis, sign))
                .ok_or_else(|| GlassError::FrameOrientation {
                    target: self.target.to_string(),
                    kind,
                    normal: self.normal,
                    up: Direction::new(axis, sign > 0.0),
                })?,
        };
        let origin = at - facing * HALF_CELL;
        debug!(pane = %self.target, %kind, %origin, %angles, "frame piece");
        self.pieces.push(FramePiece {
            kind,
            target: self.target.to_string(),
            origin,
            angles,
        });
        Ok(())
    }
}

/// Most cells that fit across the map on one axis.
const MAX_CELLS: usize = (2.0 * MAP_EXTENT / CELL_SIZE) as usize;

/// Cell positions strictly between `min` and `max`, one cell apart, at most [`MAX_CELLS`].
fn interior_steps(min: f64, max: f64) -> impl Iterator<Item = f64> {
    let cells = ((max - min) / CELL_SIZE).ceil();
    let count = if cells > 1.0 {
        (cells as usize - 1).min(MAX_CELLS)
    } else {
        0
    };
    (1..=count).map(move |i| min + CELL_SIZE * i as f64)
}

/// Outlines `group` with frame pieces facing `normal`.
///
/// - A single cell gets one `single` piece.
/// - A strip one cell wide gets a `ubend` cap at each end.
/// - Anything wider gets four `corner`s plus `edge`s at every cell between them.
pub fn synthesize_frames(
    group: &PaneGroup,
    normal: Direction,
) -> Result<Vec<FramePiece>, GlassError> {
    let axes = pane_axes(normal);
    let (u, v, n) = (axes.u, axes.v, normal.axis());
    let bbox = group.bbox;
    let plane = bbox.min.get(n);
    let at = |u_pos: f64, v_pos: f64| Vec3::ZERO.with(u, u_pos).with(v, v_pos).with(n, plane);
    let (u_min, u_max) = (bbox.min.get(u), bbox.max.get(u));
    let (v_min, v_max) = (bbox.min.get(v), bbox.max.get(v));

    let mut frames = FrameBuilder {
        target: &group.target,
        normal,
        pieces: Vec::new(),
    };

    let strip_axis = match (bbox.is_flat(u), bbox.is_flat(v)) {
        (true, true) => {
            frames.place(FrameKind::Single, at(u_min, v_min), None)?;
            return Ok(frames.pieces);
        }
        (true, false) => Some(v),
        (false, true) => Some(u),
        (false, false) => None,
    };

    if let Some(long) = strip_axis {
        // One cell wide: cap both ends of the long axis, nothing else.
        frames.place(FrameKind::Ubend, at(u_min, v_min), Some((long, 1.0)))?;
        frames.place(FrameKind::Ubend, at(u_max, v_max), Some((long, -1.0)))?;
        return Ok(frames.pieces);
    }

    frames.place(FrameKind::Corner, at(u_min, v_min), Some((v, 1.0)))?;
    frames.place(FrameKind::Corner, at(u_max, v_max), Some((v, -1.0)))?;
    frames.place(FrameKind::Corner, at(u_min, v_max), Some((u, 1.0)))?;
    frames.place(FrameKind::Corner, at(u_max, v_min), Some((u, -1.0)))?;

    for u_pos in interior_steps(u_min, u_max) {
        frames.place(FrameKind::Edge, at(u_pos, v_min), Some((v, 1.0)))?;
        frames.place(FrameKind::Edge, at(u_pos, v_max), Some((v, -1.0)))?;
    }
    for v_pos in interior_steps(v_min, v_max) {
        frames.place(FrameKind::Edge, at(u_min, v_pos), Some((u, 1.0)))?;
        frames.place(FrameKind::Edge, at(u_max, v_pos), Some((u, -1.0)))?;
    }

    Ok(frames.pieces)
}
