use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{RawConfig, RawItem};
use crate::error::Error;
use crate::expr::ScalarExpr;

pub const DEFAULT_OFFSET: f64 = 0.5;
pub const DEFAULT_BORDER_SIZE: f64 = 0.0;
pub const DEFAULT_THICKNESS: f64 = 4.0;

/// The four frame variants placed around a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Single,
    Corner,
    Edge,
    Ubend,
}

impl FrameKind {
    pub const ALL: [FrameKind; 4] = [
        FrameKind::Edge,
        FrameKind::Single,
        FrameKind::Ubend,
        FrameKind::Corner,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FrameKind::Single => "single",
            FrameKind::Corner => "corner",
            FrameKind::Edge => "edge",
            FrameKind::Ubend => "ubend",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Instance template paths for each frame variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTemplates {
    pub edge: String,
    pub single: String,
    pub ubend: String,
    pub corner: String,
}

impl FrameTemplates {
    /// Templates named after the base instance: `dir/glass.vmf` -> `dir/glass_frame_edge.vmf`.
    #[must_use]
    pub fn derived(instance: &str) -> Self {
        let name = |kind: FrameKind| {
            let file_start = instance.rfind('/').map_or(0, |i| i + 1);
            match instance[file_start..].rfind('.') {
                Some(dot) => {
                    let (stem, ext) = instance.split_at(file_start + dot);
                    format!("{stem}_frame_{kind}{ext}")
                }
                None => format!("{instance}_frame_{kind}"),
            }
        };
        Self {
            edge: name(FrameKind::Edge),
            single: name(FrameKind::Single),
            ubend: name(FrameKind::Ubend),
            corner: name(FrameKind::Corner),
        }
    }

    #[must_use]
    pub fn get(&self, kind: FrameKind) -> &str {
        match kind {
            FrameKind::Edge => &self.edge,
            FrameKind::Single => &self.single,
            FrameKind::Ubend => &self.ubend,
            FrameKind::Corner => &self.corner,
        }
    }
}

/// Resolved settings for one breakable glass item type.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemConfig {
    pub item_id: String,
    /// Base instance template that marks a glass cell.
    pub instance: String,
    /// Material applied to the visible face of the breakable surface.
    pub material: String,
    /// Distance into the cell at which the glass sheet starts.
    pub offset: f64,
    /// Inset from the frame edges, so shatter effects stay inside the frame.
    pub border_size: f64,
    /// Carried through from the description; the emitted sheets are fixed-depth.
    pub thickness: f64,
    pub frames: FrameTemplates,
}

impl ItemConfig {
    /// Config with default numbers and frame templates derived from `instance`.
    #[must_use]
    pub fn new(item_id: &str, instance: &str, material: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
            instance: instance.to_string(),
            material: material.to_string(),
            offset: DEFAULT_OFFSET,
            border_size: DEFAULT_BORDER_SIZE,
            thickness: DEFAULT_THICKNESS,
            frames: FrameTemplates::derived(instance),
        }
    }

    pub fn from_raw(raw: &RawItem) -> Result<Self, Error> {
        let item = raw.item.as_str();
        let required = |value: &Option<String>, field: &str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| Error::MissingField {
                    item: item.to_string(),
                    field: field.to_string(),
                })
        };
        let number = |value: &Option<ScalarExpr>, field: &str, default: f64| match value {
            Some(v) => v.to_f64(item, field),
            None => Ok(default),
        };

        let instance = required(&raw.instance, "instance")?;
        let material = required(&raw.material, "material")?;
        let derived = FrameTemplates::derived(&instance);
        let frame = |value: &Option<String>, fallback: String| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map_or(fallback, str::to_string)
        };

        Ok(Self {
            item_id: item.to_string(),
            offset: number(&raw.offset, "offset", DEFAULT_OFFSET)?,
            border_size: number(&raw.border_size, "border_size", DEFAULT_BORDER_SIZE)?,
            thickness: number(&raw.thickness, "thickness", DEFAULT_THICKNESS)?,
            frames: FrameTemplates {
                edge: frame(&raw.frames.edge, derived.edge),
                single: frame(&raw.frames.single, derived.single),
                ubend: frame(&raw.frames.ubend, derived.ubend),
                corner: frame(&raw.frames.corner, derived.corner),
            },
            instance,
            material,
        })
    }
}

/// Immutable lookup from base instance template to item config.
///
/// Keys are compared case-insensitively, the same way the editor treats instance paths.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    items: IndexMap<String, Arc<ItemConfig>>,
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    items: IndexMap<String, Arc<ItemConfig>>,
}

impl RegistryBuilder {
    pub fn insert(mut self, config: ItemConfig) -> Result<Self, Error> {
        let key = fold_case(&config.instance);
        if let Some(existing) = self.items.get(&key) {
            return Err(Error::DuplicateInstance {
                instance: config.instance,
                first: existing.item_id.clone(),
                second: config.item_id,
            });
        }
        debug!(item = %config.item_id, instance = %config.instance, "registered glass item");
        self.items.insert(key, Arc::new(config));
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> ConfigRegistry {
        ConfigRegistry { items: self.items }
    }
}

impl ConfigRegistry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn from_raw(raw: &RawConfig) -> Result<Self, Error> {
        let mut builder = Self::builder();
        for item in &raw.items {
            builder = builder.insert(ItemConfig::from_raw(item)?)?;
        }
        Ok(builder.build())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        Self::from_raw(&RawConfig::from_yaml_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Self::from_raw(&RawConfig::from_json_str(json)?)
    }

    #[must_use]
    pub fn lookup(&self, instance: &str) -> Option<&Arc<ItemConfig>> {
        self.items.get(&fold_case(instance))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ItemConfig>> {
        self.items.values()
    }
}

fn fold_case(s: &str) -> String {
    s.trim().to_lowercase()
}
