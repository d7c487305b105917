pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    fields::{FieldId, FieldValue},
    session::ConverterSession,
    store::RawStore,
    Coordinates, DdmCoordinates, DerivedViews, DmsCoordinates, Format, LatDirection,
    LngDirection,
};
pub use crate::utils::error::{CoordError, Result};
