pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::app::generators::GeminiGenerator;
pub use crate::config::ResolvedConfig;
pub use crate::core::{
    engine::ShellEngine,
    shell::{Shell, ShellState, GENERATION_FAILED_MESSAGE},
};
pub use crate::domain::model::{SyllabusData, ToolData, WeekCategory, WeekData};
pub use crate::domain::ports::SyllabusGenerator;
pub use crate::utils::error::{Result, SyllabusError};
