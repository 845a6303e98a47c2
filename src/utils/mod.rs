//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Loss accounting

pub mod error;
pub mod loss;

// Re-export commonly used items
pub use error::{ConversionError, ConversionResult};
pub use loss::Loss;
