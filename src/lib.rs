//! translation-updater
//!
//! Applies section insertions and dotted-key updates to per-locale JSON
//! translation files, rewriting each file with 4-space indentation.

pub mod config;
pub mod edit;
pub mod error;
pub mod input;
pub mod plan;
pub mod runner;
pub mod types;

mod test_utils;

pub use error::UpdateError;
pub use runner::{
    BatchReport,
    TranslationUpdater,
};
