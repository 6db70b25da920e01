//! Mathematical utilities for entropy estimation

/// Empirical entropy of symbol frequency tables
pub mod entropy;
