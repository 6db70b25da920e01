//! Pixel traversal strategies and their correctness harness
//!
//! This module contains:
//! - Traversal strategies enumerating every pixel of a rectangle
//! - The visited-pixel set used for duplicate detection
//! - The validator wrapping any strategy's per-pixel callback

/// Traversal strategies and their selection
pub mod order;
/// Validation of completeness and uniqueness of a traversal
pub mod validator;
/// Fixed-size set of visited row-major indices
pub mod visited;

pub use order::{Coordinate, PixelOrder, ScanLine, TraversalMethod};
pub use validator::{TraversalValidator, validated_pass};
pub use visited::VisitedSet;
