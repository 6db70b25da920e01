//! Plain-text report of one estimation run

use crate::analysis::pipeline::EntropyEstimate;
use crate::io::configuration::AVERAGE_ENTROPY_PRECISION;
use std::fmt;
use std::path::PathBuf;

/// Four-line summary printed after a successful run
///
/// Lines are the total bits, the input with its dimensions, the traversal
/// strategy, and the average bits per pixel. Number formatting does not
/// depend on the locale.
#[derive(Clone, Debug)]
pub struct EntropyReport {
    /// Input path as given on the command line
    pub input: PathBuf,
    /// Estimate being reported
    pub estimate: EntropyEstimate,
}

impl EntropyReport {
    /// Pair an estimate with the input it was computed from
    pub const fn new(input: PathBuf, estimate: EntropyEstimate) -> Self {
        Self { input, estimate }
    }
}

impl fmt::Display for EntropyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let estimate = &self.estimate;
        writeln!(f, "{}", estimate.total_bits)?;
        writeln!(
            f,
            "Image: {}[{}x{}]",
            self.input.display(),
            estimate.width,
            estimate.height
        )?;
        writeln!(f, "Order: {}", estimate.order)?;
        write!(
            f,
            "Average entropy: {:.precision$} bits per pixel",
            estimate.bits_per_pixel(),
            precision = AVERAGE_ENTROPY_PRECISION
        )
    }
}
