//! Core module - Application state, configuration, and common types

mod config;
mod error;
mod state;
mod types;

pub use config::{AppConfig, DataConfig, FeatureConfig, GeneralConfig, LocationConfig};
pub use error::{Error, Result};
pub use state::{PersistedState, StoredAuth};
pub use types::{weekday_key, AppState, Lang, DAY_KEYS};
