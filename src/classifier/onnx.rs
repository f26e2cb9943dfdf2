// Local ONNX fake-posting classifier.
//
// Runs a fine-tuned sequence-classification model (DistilBERT/RoBERTa style
// export taking `input_ids` and `attention_mask`) entirely on the local CPU.
// The model is loaded once at startup and shared for the process lifetime.
//
// Output: logits of shape [1, 2] (real, fake) turned into P(fake) with a
// softmax, or a single logit [1, 1] turned into P(fake) with a sigmoid.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::debug;

use super::model_dir::{MODEL_FILE, TOKENIZER_FILE};
use super::traits::Classifier;

/// Longest token sequence the model accepts; longer postings are truncated.
pub const MAX_SEQ_LEN: usize = 512;

/// Index of the "fake" class in a two-column logit row.
const FAKE_CLASS_INDEX: usize = 1;

/// Local ONNX-based classifier. Holds the model session and tokenizer
/// behind Arc<Mutex> so inference can be offloaded to spawn_blocking without
/// blocking the async runtime.
pub struct OnnxClassifier {
    // ort::Session::run takes &mut self, and spawn_blocking needs 'static,
    // so the session lives behind Arc<Mutex>. Concurrent web requests are
    // serialized on this lock.
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
}

impl OnnxClassifier {
    /// Load the ONNX model and tokenizer from the given directory.
    ///
    /// Expects `model.onnx` and `tokenizer.json` to exist in `model_dir`.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let model_path = model_dir.join(MODEL_FILE);
        let tokenizer_path = model_dir.join(TOKENIZER_FILE);

        if !model_path.exists() {
            anyhow::bail!(
                "Model file not found: {}\nExport the trained classifier to ONNX and place it there.",
                model_path.display()
            );
        }
        if !tokenizer_path.exists() {
            anyhow::bail!(
                "Tokenizer file not found: {}\nCopy the tokenizer.json that matches the model.",
                tokenizer_path.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("Failed to configure tokenizer truncation: {}", e))?;

        debug!("Loaded ONNX classifier from {}", model_dir.display());

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
        })
    }
}

#[async_trait]
impl Classifier for OnnxClassifier {
    async fn predict_probability(&self, text: &str) -> Result<f64> {
        let session = Arc::clone(&self.session);
        let tokenizer = Arc::clone(&self.tokenizer);
        let text = text.to_string();

        // Tokenization and inference are CPU-bound
        tokio::task::spawn_blocking(move || {
            let encoding = tokenizer
                .encode(text.as_str(), true)
                .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

            let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
            let attention_mask: Vec<i64> = encoding
                .get_attention_mask()
                .iter()
                .map(|&m| m as i64)
                .collect();
            let shape = [1_i64, input_ids.len() as i64];

            let input_ids_tensor = Tensor::from_array((shape, input_ids))
                .context("Failed to create input_ids tensor")?;
            let attention_mask_tensor = Tensor::from_array((shape, attention_mask))
                .context("Failed to create attention_mask tensor")?;

            let logits = {
                let mut session = session
                    .lock()
                    .map_err(|e| anyhow::anyhow!("Session lock poisoned: {}", e))?;

                let outputs = session
                    .run(ort::inputs! {
                        "input_ids" => input_ids_tensor,
                        "attention_mask" => attention_mask_tensor
                    })
                    .context("ONNX inference failed")?;

                let (_out_shape, data) = outputs[0]
                    .try_extract_tensor::<f32>()
                    .context("Failed to extract output tensor")?;

                data.iter().map(|&x| x as f64).collect::<Vec<f64>>()
            };

            let probability = fake_probability_from_logits(&logits)?;

            debug!(
                fake_probability = probability,
                tokens = encoding.get_ids().len(),
                text_preview = %crate::output::truncate_chars(&text, 50),
                "ONNX classified text"
            );

            Ok(probability)
        })
        .await
        .context("spawn_blocking panicked")?
    }
}

/// Convert one row of model logits into P(fake).
fn fake_probability_from_logits(logits: &[f64]) -> Result<f64> {
    match logits.len() {
        1 => Ok(sigmoid(logits[0])),
        2 => Ok(softmax(logits)[FAKE_CLASS_INDEX]),
        n => anyhow::bail!("Expected 1 or 2 output logits for a binary classifier, got {n}"),
    }
}

/// Sigmoid activation: maps any real number to (0, 1).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Numerically stable softmax.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_zero() {
        let result = sigmoid(0.0);
        assert!((result - 0.5).abs() < 1e-10, "sigmoid(0) should be 0.5");
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[2.0, -1.0]);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-10);
        assert!(probs[0] > probs[1]);
    }

    #[test]
    fn test_softmax_large_logits_stay_finite() {
        let probs = softmax(&[1000.0, 1001.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
        assert!(probs[1] > 0.7);
    }

    #[test]
    fn test_two_logits_use_fake_column() {
        let p = fake_probability_from_logits(&[0.0, 0.0]).unwrap();
        assert!((p - 0.5).abs() < 1e-10);
        let p = fake_probability_from_logits(&[-3.0, 3.0]).unwrap();
        assert!(p > 0.99, "strong fake logit should dominate, got {p}");
    }

    #[test]
    fn test_single_logit_uses_sigmoid() {
        let p = fake_probability_from_logits(&[-10.0]).unwrap();
        assert!(p < 0.001);
    }

    #[test]
    fn test_unexpected_logit_count_is_an_error() {
        assert!(fake_probability_from_logits(&[0.1, 0.2, 0.7]).is_err());
        assert!(fake_probability_from_logits(&[]).is_err());
    }
}
