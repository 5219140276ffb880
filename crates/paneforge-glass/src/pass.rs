use paneforge_level::{Level, INSTANCE_CLASS};
use paneforge_parser::{ConfigRegistry, FrameKind};
use tracing::{debug, info};

use crate::frames::FramePiece;
use crate::group::{take_pane_groups, PaneGroup};
use crate::surface::{build_glass, clip_name, surf_name, GlassGeometry, CLIP_CLASS, SURF_CLASS, SURF_KEYS};
use crate::GlassError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounts {
    pub single: usize,
    pub corner: usize,
    pub edge: usize,
    pub ubend: usize,
}

impl FrameCounts {
    #[must_use]
    pub fn of(pieces: &[FramePiece]) -> Self {
        let mut counts = Self::default();
        for piece in pieces {
            match piece.kind {
                FrameKind::Single => counts.single += 1,
                FrameKind::Corner => counts.corner += 1,
                FrameKind::Edge => counts.edge += 1,
                FrameKind::Ubend => counts.ubend += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.single + self.corner + self.edge + self.ubend
    }
}

/// What was written for one pane.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneReport {
    pub target: String,
    pub cells: usize,
    pub surf: String,
    pub clip: String,
    pub frames: FrameCounts,
}

/// Runs the glass pass over `level`.
///
/// All markers are grouped (and removed) before any pane is built. Each pane then succeeds or
/// fails on its own; a failed pane writes nothing.
pub fn run(level: &mut Level, registry: &ConfigRegistry) -> Vec<Result<PaneReport, GlassError>> {
    let groups: Vec<_> = take_pane_groups(level, registry).collect();
    debug!(panes = groups.len(), "grouped glass markers");
    groups
        .into_iter()
        .map(|group| group.and_then(|group| build_pane(level, &group)))
        .collect()
}

/// Builds one pane and writes it into the level.
pub fn build_pane(level: &mut Level, group: &PaneGroup) -> Result<PaneReport, GlassError> {
    info!(pane = %group.target, cells = group.cells, normal = %group.normal, "making glass");
    let geometry = build_glass(group)?;
    Ok(commit(level, group, geometry))
}

/// Writes prebuilt geometry for `group` into the level.
pub fn commit(level: &mut Level, group: &PaneGroup, geometry: GlassGeometry) -> PaneReport {
    let GlassGeometry {
        target,
        surf,
        clip,
        corners,
        break_output,
        frames,
    } = geometry;
    let surf_target = surf_name(&target);
    let clip_target = clip_name(&target);

    let ent = level.create_ent(SURF_CLASS);
    ent.set("targetname", &surf_target);
    for (key, value) in SURF_KEYS {
        ent.set(key, value);
    }
    for (name, point) in corners {
        ent.set(name.key(), point);
    }
    ent.solids.push(surf);
    ent.add_out(break_output);

    let ent = level.create_ent(CLIP_CLASS);
    ent.set("targetname", &clip_target)
        .set("origin", group.bbox.min)
        .set("spawnflags", 0);
    ent.solids.push(clip);

    let counts = FrameCounts::of(&frames);
    for piece in frames {
        level
            .create_ent(INSTANCE_CLASS)
            .set("targetname", &piece.target)
            .set("file", group.config.frames.get(piece.kind))
            .set("origin", piece.origin)
            .set("angles", piece.angles);
    }

    PaneReport {
        target,
        cells: group.cells,
        surf: surf_target,
        clip: clip_target,
        frames: counts,
    }
}
