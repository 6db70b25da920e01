//! Traversal strategies visiting every pixel of a rectangle exactly once

use crate::io::configuration::{AUTO_METHOD, DEFAULT_METHOD};
use crate::io::error::{Result, invalid_parameter};
use std::fmt;

/// Pixel position within a `width` x `height` rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Column, fastest varying in scan-line order
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the coordinate lies inside the rectangle
    pub const fn is_within(self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }

    /// Row-major index `y * width + x`
    pub const fn linear_index(self, width: usize) -> usize {
        self.y * width + self.x
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// Algorithm enumerating the pixels of a rectangle
///
/// Every implementation must call `visit` exactly once for each coordinate
/// in `[0, width) x [0, height)`; only the order differs between strategies.
/// A zero width or height produces no calls.
pub trait PixelOrder {
    /// Name reported alongside the estimate
    fn name(&self) -> &'static str;

    /// Visit every pixel of the rectangle in strategy order
    fn pass(&self, width: usize, height: usize, visit: &mut dyn FnMut(Coordinate));
}

/// Row-major order, x fastest
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanLine;

impl PixelOrder for ScanLine {
    fn name(&self) -> &'static str {
        "ScanLine"
    }

    fn pass(&self, width: usize, height: usize, visit: &mut dyn FnMut(Coordinate)) {
        for y in 0..height {
            for x in 0..width {
                visit(Coordinate::new(x, y));
            }
        }
    }
}

/// Traversal strategies selectable from configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalMethod {
    /// [`ScanLine`]
    ScanLine,
}

impl TraversalMethod {
    /// Resolve a command-line method code
    ///
    /// `-1` requests the best available strategy, which is scan-line until
    /// another strategy exists to compare against.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for unknown codes
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            DEFAULT_METHOD | AUTO_METHOD => Ok(Self::ScanLine),
            other => Err(invalid_parameter(
                "method",
                &other,
                &"unknown traversal method",
            )),
        }
    }

    /// Strategy implementing this method
    pub fn strategy(self) -> Box<dyn PixelOrder> {
        match self {
            Self::ScanLine => Box::new(ScanLine),
        }
    }
}
