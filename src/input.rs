//! Translation file input and output.

pub mod translation;
