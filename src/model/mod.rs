//! Domain model types (pure).
//!
//! All types in this module are plain data: the word catalog, the filter
//! options and the user-facing actions.

pub mod catalog;
pub mod error;
pub mod key_action;
pub mod word_block;

// Re-export for convenience
pub use catalog::catalog;
pub use error::AppError;
pub use key_action::KeyAction;
pub use word_block::{FilterOption, InvalidFilter, PartOfSpeech, WordBlock};
