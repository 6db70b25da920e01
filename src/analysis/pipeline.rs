//! Traversal-driven predictive entropy estimation
//!
//! Drives a traversal strategy through the validator, looks up each visited
//! pixel's symbol, and feeds it to a predictive encoder. The estimate is only
//! produced when the traversal is structurally valid.

use crate::coding::encoder::PredictiveEncoder;
use crate::coding::predictor::Predictor;
use crate::coding::sink::{EntropySink, HistogramEntropy};
use crate::io::error::{Result, computation_error};
use crate::io::progress::TraversalProgress;
use crate::traversal::order::PixelOrder;
use crate::traversal::validator::validated_pass;

/// Rectangle of integer symbols addressed by pixel coordinate
pub trait SymbolSource {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Symbol at column `x`, row `y`, or `None` outside the rectangle
    fn symbol(&self, x: usize, y: usize) -> Option<i32>;
}

/// Outcome of one estimation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntropyEstimate {
    /// Estimated total information content in bits
    pub total_bits: u64,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Name of the traversal strategy
    pub order: &'static str,
}

impl EntropyEstimate {
    /// Number of pixels traversed
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Average bits per pixel, zero for an empty image
    pub fn bits_per_pixel(&self) -> f64 {
        match self.pixel_count() {
            0 => 0.0,
            pixels => self.total_bits as f64 / pixels as f64,
        }
    }
}

/// Feed every symbol of `source` to `encoder` in the order `order` visits them
///
/// Returns the number of symbols encoded. The encoder's sink is left open.
///
/// # Errors
///
/// Returns an error if:
/// - The traversal leaves the rectangle, repeats a pixel, or misses a pixel
/// - The source has no symbol at a visited coordinate
/// - The sink rejects a residual
pub fn encode_traversal<P, S>(
    source: &impl SymbolSource,
    order: &dyn PixelOrder,
    encoder: &mut PredictiveEncoder<P, S>,
    progress: &mut TraversalProgress,
) -> Result<usize>
where
    P: Predictor,
    S: EntropySink,
{
    let (width, height) = (source.width(), source.height());

    validated_pass(order, width, height, |coordinate| {
        let symbol = source.symbol(coordinate.x, coordinate.y).ok_or_else(|| {
            computation_error("pixel lookup", &format!("no symbol at {coordinate}"))
        })?;
        encoder.put(symbol)?;
        progress.advance();
        Ok(())
    })
}

/// Estimate the order-0 entropy of the prediction residuals of `source`
///
/// Builds a fresh [`HistogramEntropy`] sink, encodes the whole traversal,
/// closes the sink and reads its entropy.
///
/// # Errors
///
/// Returns the traversal, lookup or sink error that stopped the run; an
/// empty image yields [`crate::EntropyError::EmptyStream`]
pub fn estimate_entropy<P: Predictor>(
    source: &impl SymbolSource,
    order: &dyn PixelOrder,
    predictor: P,
    progress: &mut TraversalProgress,
) -> Result<EntropyEstimate> {
    let mut sink = HistogramEntropy::new();
    sink.init()?;

    let mut encoder = PredictiveEncoder::new(predictor, sink);
    encoder.init();

    let encoded = encode_traversal(source, order, &mut encoder, progress);
    progress.finish();
    let encoded = encoded?;
    encoder.close()?;
    let total_bits = encoder.entropy()?;

    tracing::info!(
        order = order.name(),
        pixels = encoded,
        total_bits,
        "Entropy estimated"
    );

    Ok(EntropyEstimate {
        total_bits,
        width: source.width(),
        height: source.height(),
        order: order.name(),
    })
}
