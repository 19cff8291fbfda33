//! Configuration: TOML file, defaults, validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, ConfirmConfig, ConfirmMode, Currency, DisplayConfig, Locale, LoggingConfig,
    StorageConfig, StorageKind,
};
