// Classifier trait — the seam between the request handler and the model.
//
// Implementations receive one already-normalized text at a time and return
// the probability that the posting is fake. No batching, no retries: a
// failed call is returned to the caller as-is.

use anyhow::Result;
use async_trait::async_trait;

/// A pre-trained binary classifier over normalized posting text.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Probability of the "fake" class for a single input, nominally in [0, 1].
    async fn predict_probability(&self, text: &str) -> Result<f64>;
}

/// Classifier that always answers with the same probability.
/// A test double for exercising the handler and web routes without a model.
pub struct FixedClassifier(pub f64);

#[async_trait]
impl Classifier for FixedClassifier {
    async fn predict_probability(&self, _text: &str) -> Result<f64> {
        Ok(self.0)
    }
}
