use thiserror::Error;

use crate::EntityId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entity id {0} is used more than once")]
    DuplicateId(EntityId),

    #[error("entity {entity}: key \"{key}\" is not a valid vector: {message}")]
    InvalidVector {
        entity: EntityId,
        key: String,
        message: String,
    },
}
