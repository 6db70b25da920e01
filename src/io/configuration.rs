//! Estimation constants and runtime configuration defaults

// Command-line defaults
/// Traversal method used when none is given (scan-line)
pub const DEFAULT_METHOD: i32 = 0;
/// Method code reserved for automatic strategy selection
pub const AUTO_METHOD: i32 = -1;
/// Predictor order used when none is given or the given one is unknown
pub const DEFAULT_PREDICTOR: i32 = 1;

// BT.601 luma weights on the 0..=255 scale
/// Red contribution to luma
pub const LUMA_RED_WEIGHT: f64 = 0.299;
/// Green contribution to luma
pub const LUMA_GREEN_WEIGHT: f64 = 0.587;
/// Blue contribution to luma
pub const LUMA_BLUE_WEIGHT: f64 = 0.114;

// Histogram layout
/// Residual codes below this bound are counted in a dense vector, larger
/// codes in a sparse map
pub const DENSE_HISTOGRAM_CODES: usize = 1 << 16;

// Progress bar display settings
/// Number of visited pixels between progress bar redraws
pub const PROGRESS_UPDATE_INTERVAL: u64 = 4096;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Decimal places of the average bits-per-pixel figure
pub const AVERAGE_ENTROPY_PRECISION: usize = 2;
/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "pixel_entropy=warn";
