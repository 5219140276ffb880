use paneforge_core::{Axis, Direction, Vec3};
use paneforge_geometry::{Bbox, GeometryError, Prism, NODRAW};
use paneforge_level::Output;

use crate::axes::{CornerName, Pick};
use crate::frames::{synthesize_frames, FramePiece};
use crate::group::PaneGroup;
use crate::{GlassError, HALF_CELL};

/// Glass sheet depth along the normal, starting at the configured offset.
pub const SURF_DEPTH: f64 = 1.0;
/// Clip slab span along the normal, relative to the configured offset.
pub const CLIP_NEAR: f64 = 0.3;
pub const CLIP_FAR: f64 = 0.6;

pub const SURF_CLASS: &str = "func_breakable_surf";
pub const CLIP_CLASS: &str = "func_brush";

/// Fixed keyvalues of the breakable surface entity.
pub const SURF_KEYS: [(&str, &str); 7] = [
    // Physics damage decals, and takes damage from held objects.
    ("spawnflags", "3"),
    ("drawinfastreflection", "1"),
    ("health", "20"),
    // Full gibs on all platforms.
    ("performancemode", "2"),
    // Glass.
    ("surfacetype", "0"),
    // Low, so fewer collisions shatter it.
    ("fragility", "30"),
    ("error", "0"),
];

#[must_use]
pub fn surf_name(target: &str) -> String {
    format!("{target}-surf")
}

#[must_use]
pub fn clip_name(target: &str) -> String {
    format!("{target}-clip")
}

/// Everything emitted for one pane, computed before anything touches the level.
#[derive(Debug, Clone, PartialEq)]
pub struct GlassGeometry {
    pub target: String,
    /// Visible breakable sheet; only the face along the pane normal is textured.
    pub surf: Prism,
    /// Invisible slab inside the sheet that blocks what the sheet lets through.
    pub clip: Prism,
    /// Shatter corners, in [`CornerName::ALL`] order.
    pub corners: [(CornerName, Vec3); 4],
    pub break_output: Output,
    pub frames: Vec<FramePiece>,
}

/// `face` pushed `near..far` units off its plane along `normal`.
///
/// In-plane bounds are kept as given, so a face inset past its own width stays inverted.
fn offset_slab(face: Bbox, normal: Direction, near: f64, far: f64) -> Bbox {
    let axis = normal.axis();
    let (a, b) = (normal.sign() * near, normal.sign() * far);
    Bbox {
        min: face.min.with(axis, face.min.get(axis) + a.min(b)),
        max: face.max.with(axis, face.max.get(axis) + a.max(b)),
    }
}

/// Builds the sheet, clip slab, corner points and frames for `group`.
pub fn build_glass(group: &PaneGroup) -> Result<GlassGeometry, GlassError> {
    let cfg = &group.config;
    let axes = group.axes();
    let (u, v) = (axes.u, axes.v);
    let n_axis = group.normal.axis();
    let n = group.normal.to_vec();
    let degenerate = |solid: &'static str| {
        let target = group.target.clone();
        move |err: GeometryError| match err {
            GeometryError::Degenerate { min, max } => GlassError::DegenerateGeometry {
                target,
                solid,
                min,
                max,
            },
        }
    };

    let inset = HALF_CELL - cfg.border_size;
    let face = group.bbox.grow(u, inset).grow(v, inset);
    let surf_bounds = offset_slab(face, group.normal, cfg.offset, cfg.offset + SURF_DEPTH);
    let mut surf = Prism::new(surf_bounds, NODRAW).map_err(degenerate("surface"))?;
    surf.set_material(group.normal, &cfg.material);

    let slab = group.bbox.grow(u, HALF_CELL).grow(v, HALF_CELL);
    let clip_bounds = offset_slab(
        slab,
        group.normal,
        cfg.offset + CLIP_NEAR,
        cfg.offset + CLIP_FAR,
    );
    let clip = Prism::new(clip_bounds, NODRAW).map_err(degenerate("clip"))?;

    let plane = (group.bbox.min + n * (cfg.offset + SURF_DEPTH)).get(n_axis);
    let corner = |picks: [Pick; 3]| {
        let mut p = Vec3::ZERO;
        for axis in Axis::ALL {
            let value = match picks[axis.index()] {
                Pick::Min => surf_bounds.min.get(axis),
                Pick::Max => surf_bounds.max.get(axis),
                Pick::Plane => plane,
            };
            p.set(axis, value);
        }
        p
    };
    let corners = [0, 1, 2, 3].map(|i| (CornerName::ALL[i], corner(axes.corners[i])));

    let break_output = Output::new("OnBreak", &clip_name(&group.target), "Kill").once();

    // Frames face into the room, away from the wall the glass sits in.
    let frames = synthesize_frames(group, group.normal.opposite())?;

    Ok(GlassGeometry {
        target: group.target.clone(),
        surf,
        clip,
        corners,
        break_output,
        frames,
    })
}
