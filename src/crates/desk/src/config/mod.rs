//! Application configuration: TOML schema plus a dual-location loader.

pub mod loader;
pub mod schema;

pub use loader::{load_file, ConfigLoader};
pub use schema::{AssistSection, DeskConfig, UiSection};
