//! Predictive entropy estimation along pixel traversal orders
//!
//! Visits every pixel of an image exactly once in a chosen order, predicts each
//! pixel's brightness from the pixels already visited, and estimates how many
//! bits an ideal order-0 entropy coder would need for the prediction residuals.
//! Comparing the estimate across traversal orders and predictors shows which
//! combination leaves the most compressible residual stream.

#![forbid(unsafe_code)]

/// Traversal-driven estimation pipeline
pub mod analysis;
/// Residual mapping, predictors, entropy sinks and the predictive encoder
pub mod coding;
/// Input/output operations and error handling
pub mod io;
/// Entropy mathematics over frequency tables
pub mod math;
/// Traversal strategies and traversal validation
pub mod traversal;

pub use io::error::{EntropyError, Result};
