//! Utility functions for string normalization and matching.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{contains_ignore_case, normalize_call_up, normalize_phone};
