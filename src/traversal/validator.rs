//! Correctness harness wrapping the per-pixel callback of any traversal
//!
//! The validator sits between a [`PixelOrder`] and the code consuming its
//! coordinates. It rejects coordinates outside the rectangle and repeated
//! coordinates as they arrive, and checks coverage once the strategy returns.
//! After the first failure every later callback is suppressed, so a broken
//! strategy never produces a statistic.

use crate::io::error::{EntropyError, Result, computation_error};
use crate::traversal::order::{Coordinate, PixelOrder};
use crate::traversal::visited::VisitedSet;

/// Tracks one traversal run over a `width` x `height` rectangle
#[derive(Debug)]
pub struct TraversalValidator {
    width: usize,
    height: usize,
    visited: VisitedSet,
    failure: Option<EntropyError>,
}

impl TraversalValidator {
    /// Create a validator for a fresh run
    ///
    /// # Errors
    ///
    /// Returns a computation error if the pixel count overflows `usize`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let pixel_count = width.checked_mul(height).ok_or_else(|| {
            computation_error("traversal validation", &format!("{width}x{height} overflows"))
        })?;

        Ok(Self {
            width,
            height,
            visited: VisitedSet::new(pixel_count),
            failure: None,
        })
    }

    /// Check a delivered coordinate
    ///
    /// Returns `true` if the coordinate should be forwarded. Returns `false`
    /// once the run is invalid, including for the coordinate that made it so.
    pub fn admit(&mut self, coordinate: Coordinate) -> bool {
        if self.failure.is_some() {
            return false;
        }

        if !coordinate.is_within(self.width, self.height) {
            self.failure = Some(EntropyError::TraversalOutOfBounds {
                coordinate: (coordinate.x, coordinate.y),
                dimensions: (self.width, self.height),
            });
            return false;
        }

        if !self.visited.insert(coordinate.linear_index(self.width)) {
            self.failure = Some(EntropyError::TraversalDuplicate {
                coordinate: (coordinate.x, coordinate.y),
            });
            return false;
        }

        true
    }

    /// Mark the run invalid because a forwarded coordinate failed downstream
    ///
    /// The first recorded failure wins.
    pub fn reject(&mut self, error: EntropyError) {
        if self.failure.is_none() {
            self.failure = Some(error);
        }
    }

    /// Whether no failure has been recorded so far
    pub const fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// Number of distinct coordinates accepted
    pub const fn accepted(&self) -> usize {
        self.visited.len()
    }

    /// First pixel in row-major order that has not been accepted yet
    pub fn first_missing(&self) -> Option<Coordinate> {
        self.visited
            .missing()
            .next()
            .map(|index| Coordinate::new(index % self.width, index / self.width))
    }

    /// Conclude the run
    ///
    /// # Errors
    ///
    /// Returns the first recorded failure, or
    /// [`EntropyError::TraversalIncomplete`] if any pixel was never visited
    pub fn finish(self) -> Result<usize> {
        if let Some(failure) = self.failure {
            return Err(failure);
        }

        if !self.visited.is_complete() {
            if let Some(coordinate) = self.first_missing() {
                tracing::debug!(first_missing = %coordinate, "Traversal left pixels unvisited");
            }
            return Err(EntropyError::TraversalIncomplete {
                visited: self.visited.len(),
                expected: self.visited.capacity(),
            });
        }

        Ok(self.visited.len())
    }
}

/// Run a traversal strategy with every coordinate checked before forwarding
///
/// Returns the number of pixels forwarded, which equals `width * height` on
/// success.
///
/// # Errors
///
/// Returns the traversal failure detected by the validator, or the first
/// error returned by `forward`
pub fn validated_pass<F>(
    order: &dyn PixelOrder,
    width: usize,
    height: usize,
    mut forward: F,
) -> Result<usize>
where
    F: FnMut(Coordinate) -> Result<()>,
{
    let mut validator = TraversalValidator::new(width, height)?;

    order.pass(width, height, &mut |coordinate| {
        if validator.admit(coordinate)
            && let Err(error) = forward(coordinate)
        {
            validator.reject(error);
        }
    });

    let outcome = validator.finish();
    if let Err(error) = &outcome {
        tracing::warn!(strategy = order.name(), %error, "Traversal rejected");
    }
    outcome
}
