//! Residual sinks reporting the coded size of a residual stream

use crate::coding::zigzag::zigzag_encode;
use crate::io::configuration::DENSE_HISTOGRAM_CODES;
use crate::io::error::{EntropyError, Result};
use crate::math::entropy::total_bits;
use std::collections::BTreeMap;

/// Consumer of prediction residuals
///
/// A sink is initialised once, fed residuals in traversal order, closed, and
/// only then asked for its entropy. Bitstream-producing sinks flush partial
/// output on [`EntropySink::close`]; estimators treat it as a state change.
pub trait EntropySink {
    /// Reset the sink and open it for residuals
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot allocate its initial state
    fn init(&mut self) -> Result<()>;

    /// Record one residual
    ///
    /// # Errors
    ///
    /// Returns an error if the sink is not open
    fn put(&mut self, residual: i64) -> Result<()>;

    /// Flush and finalise buffered state, idempotent
    ///
    /// # Errors
    ///
    /// Returns an error if the sink was never initialised
    fn close(&mut self) -> Result<()>;

    /// Total information content of the recorded residuals in bits
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyUnsupported`] for sinks that cannot
    /// report a figure, and a lifecycle error if the sink is not closed or
    /// has seen no residuals
    fn entropy(&self) -> Result<u64>;
}

impl<S: EntropySink + ?Sized> EntropySink for Box<S> {
    fn init(&mut self) -> Result<()> {
        (**self).init()
    }

    fn put(&mut self, residual: i64) -> Result<()> {
        (**self).put(residual)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn entropy(&self) -> Result<u64> {
        (**self).entropy()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SinkState {
    Uninitialized,
    Open,
    Closed,
}

impl SinkState {
    const fn describe(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Histogram-based order-0 entropy estimator
///
/// Counts residual codes and reports the empirical Shannon entropy of the
/// stream. No bitstream is produced. Small codes live in a vector that grows
/// to the largest one seen; codes from [`DENSE_HISTOGRAM_CODES`] upwards are
/// kept sparse so a single outlier residual costs one map entry.
#[derive(Clone, Debug)]
pub struct HistogramEntropy {
    /// Occurrence count per zigzag residual code below the dense bound
    histogram: Vec<u64>,
    /// Occurrence count per larger residual code
    overflow: BTreeMap<u64, u64>,
    /// Number of residuals recorded, always the sum of all counts
    total: u64,
    state: SinkState,
}

impl Default for HistogramEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl HistogramEntropy {
    /// Create an estimator that still needs [`EntropySink::init`]
    pub const fn new() -> Self {
        Self {
            histogram: Vec::new(),
            overflow: BTreeMap::new(),
            total: 0,
            state: SinkState::Uninitialized,
        }
    }

    /// Occurrence counts indexed by residual code, for codes below
    /// [`DENSE_HISTOGRAM_CODES`]
    pub fn histogram(&self) -> &[u64] {
        &self.histogram
    }

    /// Occurrence count of one residual code
    pub fn count(&self, code: u64) -> u64 {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.histogram.get(index))
            .or_else(|| self.overflow.get(&code))
            .copied()
            .unwrap_or(0)
    }

    /// Every bucket count, dense codes first
    pub fn counts(&self) -> impl Iterator<Item = &u64> {
        self.histogram.iter().chain(self.overflow.values())
    }

    /// Number of residuals recorded
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Whether [`EntropySink::close`] has been called since the last init
    pub const fn is_closed(&self) -> bool {
        matches!(self.state, SinkState::Closed)
    }

    fn reject(&self, operation: &'static str) -> EntropyError {
        EntropyError::SinkState {
            operation,
            state: self.state.describe(),
        }
    }
}

impl EntropySink for HistogramEntropy {
    fn init(&mut self) -> Result<()> {
        self.histogram.clear();
        self.overflow.clear();
        self.total = 0;
        self.state = SinkState::Open;
        Ok(())
    }

    fn put(&mut self, residual: i64) -> Result<()> {
        if self.state != SinkState::Open {
            return Err(self.reject("record a residual"));
        }

        let code = zigzag_encode(residual);
        match usize::try_from(code) {
            Ok(index) if index < DENSE_HISTOGRAM_CODES => {
                if index >= self.histogram.len() {
                    self.histogram.resize(index + 1, 0);
                }
                if let Some(bucket) = self.histogram.get_mut(index) {
                    *bucket += 1;
                }
            }
            _ => *self.overflow.entry(code).or_insert(0) += 1,
        }
        self.total += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.state {
            SinkState::Uninitialized => Err(self.reject("close")),
            SinkState::Open | SinkState::Closed => {
                self.state = SinkState::Closed;
                Ok(())
            }
        }
    }

    fn entropy(&self) -> Result<u64> {
        if self.state != SinkState::Closed {
            return Err(self.reject("report entropy"));
        }
        if self.total == 0 {
            return Err(EntropyError::EmptyStream);
        }
        Ok(total_bits(self.counts(), self.total))
    }
}
