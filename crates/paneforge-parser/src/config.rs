use serde::{Deserialize, Serialize};

use crate::expr::ScalarExpr;

/// The config description as written on disk, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub items: Vec<RawItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    pub item: String,
    #[serde(default)]
    pub instance: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub offset: Option<ScalarExpr>,
    #[serde(default)]
    pub border_size: Option<ScalarExpr>,
    #[serde(default)]
    pub thickness: Option<ScalarExpr>,
    #[serde(default)]
    pub frames: RawFrames,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFrames {
    #[serde(default)]
    pub edge: Option<String>,
    #[serde(default)]
    pub single: Option<String>,
    #[serde(default)]
    pub ubend: Option<String>,
    #[serde(default)]
    pub corner: Option<String>,
}

impl RawConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, crate::Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, crate::Error> {
        serde_json::from_str(json).map_err(|e| crate::Error::Json(e.to_string()))
    }
}
