use std::sync::Arc;

use indexmap::IndexMap;
use paneforge_core::{Angles, Axis, Direction, Vec3};
use paneforge_geometry::Bbox;
use paneforge_level::{Entity, EntityId, Level, INSTANCE_CLASS};
use paneforge_parser::{ConfigRegistry, ItemConfig};
use tracing::debug;

use crate::axes::{pane_axes, PaneAxes};
use crate::{GlassError, HALF_CELL, MAP_EXTENT};

/// One placed glass cell, read from a marker instance.
#[derive(Debug, Clone)]
pub struct InstanceMarker {
    pub id: EntityId,
    pub target: String,
    pub origin: Vec3,
    pub angles: Angles,
    pub config: Arc<ItemConfig>,
}

impl InstanceMarker {
    /// Reads a marker entity already matched to `config`.
    pub fn from_entity(ent: &Entity, config: Arc<ItemConfig>) -> Result<Self, GlassError> {
        let target = ent.targetname().to_string();
        let invalid = |e: paneforge_level::Error| GlassError::InvalidMarker {
            target: target.clone(),
            message: e.to_string(),
        };
        let origin = ent.origin().map_err(invalid)?;
        let angles = ent.angles().map_err(invalid)?;
        if Axis::ALL.iter().any(|&axis| origin.get(axis).abs() > MAP_EXTENT) {
            return Err(GlassError::InvalidMarker {
                target,
                message: format!("origin ({origin}) is outside the map (limit {MAP_EXTENT})"),
            });
        }
        Ok(Self {
            id: ent.id,
            target,
            origin,
            angles,
            config,
        })
    }

    /// Direction the marker faces; markers always face out of the wall they sit on.
    pub fn normal(&self) -> Result<Direction, GlassError> {
        self.angles
            .facing_direction()
            .ok_or_else(|| GlassError::UnalignedMarker {
                target: self.target.clone(),
                angles: self.angles,
            })
    }

    /// Center of the occupied cell, half a cell behind the placed origin.
    #[must_use]
    pub fn cell_origin(&self, normal: Direction) -> Vec3 {
        self.origin - normal.to_vec() * HALF_CELL
    }
}

/// All cells sharing one target name, merged into a single pane.
#[derive(Debug, Clone)]
pub struct PaneGroup {
    pub target: String,
    /// Inclusive bounds over the cell origins.
    pub bbox: Bbox,
    pub normal: Direction,
    pub config: Arc<ItemConfig>,
    pub cells: usize,
}

impl PaneGroup {
    #[must_use]
    pub fn new(target: &str, origin: Vec3, normal: Direction, config: Arc<ItemConfig>) -> Self {
        Self {
            target: target.to_string(),
            bbox: Bbox::point(origin),
            normal,
            config,
            cells: 1,
        }
    }

    /// Folds another cell in. The cell must face the same way and share the same config.
    pub fn absorb(
        &mut self,
        origin: Vec3,
        normal: Direction,
        config: &Arc<ItemConfig>,
    ) -> Result<(), GlassError> {
        if normal != self.normal {
            return Err(GlassError::InconsistentNormal {
                target: self.target.clone(),
                expected: self.normal,
                found: normal,
            });
        }
        if !Arc::ptr_eq(config, &self.config) {
            return Err(GlassError::MultipleConfigs {
                target: self.target.clone(),
                first: self.config.item_id.clone(),
                second: config.item_id.clone(),
            });
        }
        self.bbox.include(origin);
        self.cells += 1;
        Ok(())
    }

    #[must_use]
    pub fn axes(&self) -> &'static PaneAxes {
        pane_axes(self.normal)
    }
}

/// Finished panes in first-seen order. Consumed once; the markers are gone from the level.
#[derive(Debug)]
pub struct PaneGroups {
    inner: indexmap::map::IntoIter<String, Result<PaneGroup, GlassError>>,
}

impl Iterator for PaneGroups {
    type Item = Result<PaneGroup, GlassError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, group)| group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PaneGroups {}

/// Reads every configured marker, then removes all of them from the level.
///
/// Markers whose template has no config are left alone.
pub fn take_markers(
    level: &mut Level,
    registry: &ConfigRegistry,
) -> Vec<Result<InstanceMarker, GlassError>> {
    let mut consumed = Vec::new();
    let markers: Vec<_> = level
        .by_class(INSTANCE_CLASS)
        .filter_map(|ent| {
            let config = registry.lookup(ent.get("file")?)?;
            consumed.push(ent.id);
            Some(InstanceMarker::from_entity(ent, Arc::clone(config)))
        })
        .collect();
    level.remove_all(&consumed);
    markers
}

/// Buckets markers by target name and folds each bucket into a pane.
///
/// A bad marker fails its whole pane; later markers of that pane are still consumed.
pub fn group_markers(
    markers: impl IntoIterator<Item = Result<InstanceMarker, GlassError>>,
) -> PaneGroups {
    let mut groups: IndexMap<String, Result<PaneGroup, GlassError>> = IndexMap::new();
    for marker in markers {
        let marker = match marker {
            Ok(marker) => marker,
            Err(err) => {
                let target = err.target().to_string();
                if !matches!(groups.get(&target), Some(Err(_))) {
                    groups.insert(target, Err(err));
                }
                continue;
            }
        };
        let folded = marker.normal().and_then(|normal| {
            let origin = marker.cell_origin(normal);
            debug!(pane = %marker.target, %origin, %normal, "folding glass cell");
            match groups.get_mut(&marker.target) {
                Some(Ok(group)) => group.absorb(origin, normal, &marker.config),
                Some(Err(_)) => Ok(()),
                None => {
                    let group = PaneGroup::new(&marker.target, origin, normal, marker.config.clone());
                    groups.insert(marker.target.clone(), Ok(group));
                    Ok(())
                }
            }
        });
        if let Err(err) = folded {
            if !matches!(groups.get(&marker.target), Some(Err(_))) {
                groups.insert(marker.target.clone(), Err(err));
            }
        }
    }
    PaneGroups {
        inner: groups.into_iter(),
    }
}

/// Consumes the level's glass markers and merges them into panes.
pub fn take_pane_groups(level: &mut Level, registry: &ConfigRegistry) -> PaneGroups {
    group_markers(take_markers(level, registry))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(id: &str) -> Arc<ItemConfig> {
        Arc::new(ItemConfig::new(id, &format!("{id}.vmf"), "glass/clear"))
    }

    fn marker(target: &str, origin: Vec3, angles: Angles, config: &Arc<ItemConfig>) -> InstanceMarker {
        InstanceMarker {
            id: EntityId(0),
            target: target.to_string(),
            origin,
            angles,
            config: Arc::clone(config),
        }
    }

    #[test]
    fn cell_origin_steps_back_along_normal() {
        let cfg = config("glass");
        let m = marker("pane", Vec3::new(64.0, 0.0, 0.0), Angles::default(), &cfg);
        let normal = m.normal().unwrap();
        assert_eq!(normal, Direction::PosX);
        assert_eq!(m.cell_origin(normal), Vec3::ZERO);
    }

    #[test]
    fn markers_merge_per_target() {
        let cfg = config("glass");
        let up = Angles::new(-90.0, 0.0, 0.0);
        let groups: Vec<_> = group_markers(vec![
            Ok(marker("a", Vec3::new(0.0, 0.0, 64.0), up, &cfg)),
            Ok(marker("b", Vec3::new(512.0, 0.0, 64.0), up, &cfg)),
            Ok(marker("a", Vec3::new(256.0, 128.0, 64.0), up, &cfg)),
        ])
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].target, "a");
        assert_eq!(groups[0].cells, 2);
        assert_eq!(groups[0].normal, Direction::PosZ);
        assert_eq!(groups[0].bbox.min, Vec3::ZERO);
        assert_eq!(groups[0].bbox.max, Vec3::new(256.0, 128.0, 0.0));
        assert_eq!(groups[1].bbox, Bbox::point(Vec3::new(512.0, 0.0, 0.0)));
    }

    #[test]
    fn mixed_configs_fail_the_pane() {
        let a = config("a");
        let b = config("b");
        let mut groups = group_markers(vec![
            Ok(marker("pane", Vec3::ZERO, Angles::default(), &a)),
            Ok(marker("pane", Vec3::new(0.0, 128.0, 0.0), Angles::default(), &b)),
        ]);
        let err = groups.next().unwrap().unwrap_err();
        assert!(matches!(err, GlassError::MultipleConfigs { .. }));
        assert!(groups.next().is_none());
    }

    #[test]
    fn equal_but_distinct_configs_are_still_mixed() {
        let a = config("glass");
        let b = config("glass");
        let err = group_markers(vec![
            Ok(marker("pane", Vec3::ZERO, Angles::default(), &a)),
            Ok(marker("pane", Vec3::new(0.0, 128.0, 0.0), Angles::default(), &b)),
        ])
        .next()
        .unwrap()
        .unwrap_err();
        assert_eq!(err.target(), "pane");
    }

    #[test]
    fn failed_pane_does_not_recover() {
        let cfg = config("glass");
        let sideways = Angles::new(0.0, 90.0, 0.0);
        let mut groups = group_markers(vec![
            Ok(marker("pane", Vec3::ZERO, Angles::default(), &cfg)),
            Ok(marker("pane", Vec3::new(0.0, 128.0, 0.0), sideways, &cfg)),
            Ok(marker("pane", Vec3::new(0.0, 256.0, 0.0), Angles::default(), &cfg)),
            Ok(marker("other", Vec3::ZERO, Angles::default(), &cfg)),
        ]);
        assert!(matches!(
            groups.next(),
            Some(Err(GlassError::InconsistentNormal { .. }))
        ));
        assert!(matches!(groups.next(), Some(Ok(g)) if g.target == "other"));
    }

    #[test]
    fn unaligned_marker_is_an_error() {
        let cfg = config("glass");
        let err = group_markers(vec![Ok(marker(
            "pane",
            Vec3::ZERO,
            Angles::new(0.0, 45.0, 0.0),
            &cfg,
        ))])
        .next()
        .unwrap()
        .unwrap_err();
        assert!(matches!(err, GlassError::UnalignedMarker { .. }));
    }
}
