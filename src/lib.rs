pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpProfileSource, MemoryDisplay, TerminalDisplay};
pub use crate::config::{ClientConfig, Settings, SettingsLayer};
pub use crate::core::render::OutputFormat;
pub use crate::core::search::{fetch_and_render, SearchController};
pub use crate::domain::model::{Lookup, Profile, Trigger, View};
pub use crate::utils::error::{ProfileError, Result};
