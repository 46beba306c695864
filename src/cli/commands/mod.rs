//! CLI command implementations.
//!
//! Each submodule implements one or two top-level CLI commands.

pub mod classify;
pub mod config;
pub mod grid;
pub mod level;
pub mod records;

pub use classify::{cmd_classify, cmd_score};
pub use config::cmd_config;
pub use grid::cmd_grid;
pub use level::cmd_level;
pub use records::cmd_records;
