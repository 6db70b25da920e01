//! Predictive encoder feeding prediction residuals into an entropy sink

use crate::coding::predictor::Predictor;
use crate::coding::sink::EntropySink;
use crate::io::error::Result;

/// Pairs one predictor with one entropy sink for the lifetime of a run
///
/// The sink must already be initialised when handed over; [`Self::init`]
/// only resets the predictor.
#[derive(Debug)]
pub struct PredictiveEncoder<P, S> {
    predictor: P,
    sink: S,
}

impl<P: Predictor, S: EntropySink> PredictiveEncoder<P, S> {
    /// Take ownership of a predictor and an initialised sink
    pub const fn new(predictor: P, sink: S) -> Self {
        Self { predictor, sink }
    }

    /// Reset the predictor history
    pub fn init(&mut self) {
        self.predictor.init();
    }

    /// Encode one observed symbol
    ///
    /// The prediction is read before the predictor sees the symbol, and the
    /// predictor learns the true symbol rather than the residual.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the residual
    pub fn put(&mut self, symbol: i32) -> Result<()> {
        let prediction = self.predictor.predict();
        let residual = i64::from(symbol) - i64::from(prediction);
        self.predictor.put(symbol);
        self.sink.put(residual)
    }

    /// Finalise the sink
    ///
    /// # Errors
    ///
    /// Returns an error if the sink was never initialised
    pub fn close(&mut self) -> Result<()> {
        self.sink.close()
    }

    /// Entropy reported by the sink, in bits
    ///
    /// # Errors
    ///
    /// Propagates the sink's lifecycle and support errors
    pub fn entropy(&self) -> Result<u64> {
        self.sink.entropy()
    }

    /// Read-only access to the sink
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Release the predictor and sink
    pub fn into_parts(self) -> (P, S) {
        (self.predictor, self.sink)
    }
}
