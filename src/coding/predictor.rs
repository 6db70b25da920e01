//! Predictors estimating the next symbol from the symbols already observed

use crate::io::configuration::DEFAULT_PREDICTOR;

/// Stateful model estimating the next symbol of a stream
///
/// Callers read [`Predictor::predict`] for a position first and then hand the
/// observed value to [`Predictor::put`], exactly once per symbol.
pub trait Predictor {
    /// Reset accumulated history to the baseline
    fn init(&mut self);

    /// Incorporate the observed value of the current position
    fn put(&mut self, symbol: i32);

    /// Best estimate of the next symbol from history alone
    fn predict(&self) -> i32;
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn init(&mut self) {
        (**self).init();
    }

    fn put(&mut self, symbol: i32) {
        (**self).put(symbol);
    }

    fn predict(&self) -> i32 {
        (**self).predict()
    }
}

/// Order-1 linear predictor: the next symbol repeats the previous one
///
/// Predicts zero before any symbol has been seen.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearPredictor1 {
    last: i32,
}

impl LinearPredictor1 {
    /// Create a predictor at its baseline
    pub const fn new() -> Self {
        Self { last: 0 }
    }
}

impl Predictor for LinearPredictor1 {
    fn init(&mut self) {
        self.last = 0;
    }

    fn put(&mut self, symbol: i32) {
        self.last = symbol;
    }

    fn predict(&self) -> i32 {
        self.last
    }
}

/// Predictor models selectable from configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictorKind {
    /// [`LinearPredictor1`]
    Linear1,
}

impl PredictorKind {
    /// Resolve a command-line predictor code
    ///
    /// Unknown codes fall back to the order-1 linear predictor.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Linear1,
            other => {
                tracing::warn!(
                    code = other,
                    fallback = DEFAULT_PREDICTOR,
                    "Unknown predictor, using default"
                );
                Self::Linear1
            }
        }
    }

    /// Human-readable model name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear1 => "Linear1",
        }
    }

    /// Construct a fresh predictor of this kind
    pub fn build(self) -> Box<dyn Predictor> {
        match self {
            Self::Linear1 => Box::new(LinearPredictor1::new()),
        }
    }
}
