//! Command-line interface for estimating the residual entropy of one image

use crate::analysis::pipeline::{SymbolSource, estimate_entropy};
use crate::coding::predictor::PredictorKind;
use crate::io::configuration::{DEFAULT_METHOD, DEFAULT_PREDICTOR};
use crate::io::error::Result;
use crate::io::image::LumaPlane;
use crate::io::progress::TraversalProgress;
use crate::io::report::EntropyReport;
use crate::traversal::order::TraversalMethod;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixel-entropy")]
#[command(
    author,
    version,
    about = "Estimate the entropy of prediction residuals along a pixel traversal"
)]
/// Command-line arguments for the entropy estimator
pub struct Cli {
    /// Input image file
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Pixel order method (0 = scan-line, -1 = best available)
    #[arg(short, long, default_value_t = DEFAULT_METHOD, allow_negative_numbers = true)]
    pub method: i32,

    /// Predictor order (1 = previous pixel, unknown orders fall back to 1)
    #[arg(short, long, default_value_t = DEFAULT_PREDICTOR, allow_negative_numbers = true)]
    pub predictor: i32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one estimation from parsed command-line arguments
pub struct Analyzer {
    cli: Cli,
}

impl Analyzer {
    /// Create an analyzer for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve the configuration, load the input and estimate its entropy
    ///
    /// Configuration and decoding problems are reported before any pixel is
    /// visited. Every failure is logged at error level before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The traversal method is unknown
    /// - The input is missing or cannot be decoded
    /// - The traversal is rejected by validation
    pub fn run(&self) -> Result<EntropyReport> {
        self.estimate().inspect_err(|error| {
            tracing::error!(input = %self.cli.input.display(), %error, "Estimation failed");
        })
    }

    fn estimate(&self) -> Result<EntropyReport> {
        let method = TraversalMethod::from_code(self.cli.method)?;
        let predictor = PredictorKind::from_code(self.cli.predictor);
        let plane = LumaPlane::open(&self.cli.input)?;

        let order = method.strategy();
        tracing::debug!(
            order = order.name(),
            predictor = predictor.name(),
            "Configuration resolved"
        );

        let mut progress = if self.cli.should_show_progress() {
            let pixels = (plane.width() * plane.height()) as u64;
            TraversalProgress::new(pixels, order.name())
        } else {
            TraversalProgress::hidden()
        };

        let estimate = estimate_entropy(&plane, order.as_ref(), predictor.build(), &mut progress)?;
        Ok(EntropyReport::new(self.cli.input.clone(), estimate))
    }
}
