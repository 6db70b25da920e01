/// Prediction-driven residual encoding
pub mod encoder;
/// Symbol prediction models
pub mod predictor;
/// Residual consumers reporting coded size
pub mod sink;
/// Signed residual to unsigned code mapping
pub mod zigzag;

pub use encoder::PredictiveEncoder;
pub use predictor::{LinearPredictor1, Predictor, PredictorKind};
pub use sink::{EntropySink, HistogramEntropy};
