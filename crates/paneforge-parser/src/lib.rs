//! Config description parsing and the item registry consumed by the glass pass.

pub mod config;
pub mod error;
pub mod expr;
pub mod registry;

pub use config::{RawConfig, RawFrames, RawItem};
pub use error::Error;
pub use expr::ScalarExpr;
pub use registry::{ConfigRegistry, FrameKind, FrameTemplates, ItemConfig, RegistryBuilder};
