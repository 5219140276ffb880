use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A numeric config value, written either as a number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarExpr {
    Number(f64),
    String(String),
}

impl ScalarExpr {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarExpr::String(s) => Some(s),
            ScalarExpr::Number(_) => None,
        }
    }

    pub fn to_f64(&self, item: &str, field: &str) -> Result<f64, Error> {
        let parsed = match self {
            ScalarExpr::Number(n) => Some(*n),
            ScalarExpr::String(s) => s.trim().parse::<f64>().ok(),
        };
        match parsed {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(Error::InvalidNumber {
                item: item.to_string(),
                field: field.to_string(),
                value: match self {
                    ScalarExpr::Number(n) => n.to_string(),
                    ScalarExpr::String(s) => s.clone(),
                },
            }),
        }
    }
}
