//! Core logic for the Checklist to-do list.
//! Owns the item store, the list controller and screen rendering; front ends
//! only supply input and a title dialog.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod render;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError, ConfigOverrides};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{accept_title, Item, ItemId, ItemValidationError};
pub use prompt::{PromptRequest, PromptResponse, TitlePrompt, TITLE_PLACEHOLDER};
pub use render::{render_rows, render_screen, RowView};
pub use repo::item_repo::{ItemStore, SqliteItemStore, StoreError, StoreResult};
pub use service::list_controller::{AddOutcome, ControlState, ListController, Mode, TapOutcome};

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
