use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::classifier::model_dir;

/// Which classifier backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierBackend {
    /// Local ONNX model (default) — no network dependency
    Onnx,
    /// Model-serving endpoint — requires FAKEJOB_CLASSIFIER_URL
    Remote,
}

impl ClassifierBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierBackend::Onnx => "onnx",
            ClassifierBackend::Remote => "remote",
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Which classifier to use (default: Onnx)
    pub classifier_backend: ClassifierBackend,
    /// Directory containing the ONNX model files
    pub model_dir: PathBuf,
    /// Inference endpoint for the remote backend
    pub classifier_url: String,
    /// Address the web form binds to (FAKEJOB_BIND, default 127.0.0.1)
    pub bind: String,
    /// Port the web form listens on (FAKEJOB_PORT, default 8080)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let classifier_backend = match env::var("FAKEJOB_CLASSIFIER").as_deref() {
            Ok("remote") => ClassifierBackend::Remote,
            Ok("onnx") | Err(_) => ClassifierBackend::Onnx,
            Ok(other) => anyhow::bail!(
                "Unknown FAKEJOB_CLASSIFIER value '{other}'. Expected 'onnx' or 'remote'."
            ),
        };

        let model_dir = env::var("FAKEJOB_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| model_dir::default_model_dir());

        let port = match env::var("FAKEJOB_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("FAKEJOB_PORT must be a port number, got '{raw}'"))?,
            Err(_) => 8080,
        };

        Ok(Self {
            classifier_backend,
            model_dir,
            classifier_url: env::var("FAKEJOB_CLASSIFIER_URL").unwrap_or_default(),
            bind: env::var("FAKEJOB_BIND").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
        })
    }

    /// Validate that the chosen classifier backend has what it needs.
    /// For ONNX: model files must exist. For Remote: the URL must be set.
    pub fn require_classifier(&self) -> Result<()> {
        match self.classifier_backend {
            ClassifierBackend::Onnx => {
                if !model_dir::model_files_present(&self.model_dir) {
                    anyhow::bail!(
                        "ONNX model files not found in {}\n\
                         Expected {} and {}. Set FAKEJOB_MODEL_DIR to point elsewhere,\n\
                         or set FAKEJOB_CLASSIFIER=remote to use an inference endpoint.",
                        self.model_dir.display(),
                        model_dir::MODEL_FILE,
                        model_dir::TOKENIZER_FILE,
                    );
                }
                Ok(())
            }
            ClassifierBackend::Remote => {
                if self.classifier_url.is_empty() {
                    anyhow::bail!(
                        "FAKEJOB_CLASSIFIER_URL not set. Add it to your .env file\n\
                         or unset FAKEJOB_CLASSIFIER to use the local ONNX model."
                    );
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend: ClassifierBackend) -> Config {
        Config {
            classifier_backend: backend,
            model_dir: std::env::temp_dir().join("fakejob-config-test-missing"),
            classifier_url: String::new(),
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }

    #[test]
    fn test_onnx_without_model_files_fails() {
        let err = config(ClassifierBackend::Onnx)
            .require_classifier()
            .unwrap_err();
        assert!(err.to_string().contains("model files not found"));
    }

    #[test]
    fn test_remote_requires_url() {
        let mut cfg = config(ClassifierBackend::Remote);
        assert!(cfg.require_classifier().is_err());
        cfg.classifier_url = "http://localhost:9000/predict".to_string();
        assert!(cfg.require_classifier().is_ok());
    }
}
