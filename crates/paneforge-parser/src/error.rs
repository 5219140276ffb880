use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    Json(String),

    #[error("item \"{item}\" is missing required field \"{field}\"")]
    MissingField { item: String, field: String },

    #[error("item \"{item}\": \"{field}\" must be a finite number, got \"{value}\"")]
    InvalidNumber {
        item: String,
        field: String,
        value: String,
    },

    #[error("instance \"{instance}\" is configured by both \"{first}\" and \"{second}\"")]
    DuplicateInstance {
        instance: String,
        first: String,
        second: String,
    },
}
