pub mod engine;
pub mod shell;

pub use crate::domain::model::{SyllabusData, ToolData, WeekCategory, WeekData};
pub use crate::domain::ports::{ConfigProvider, SyllabusGenerator};
pub use crate::utils::error::Result;
