pub mod generators;
#[cfg(feature = "cli")]
pub mod terminal;
