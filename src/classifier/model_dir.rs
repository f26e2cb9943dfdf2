// Model file locations.
//
// Files are stored in a platform-appropriate directory
// (~/.local/share/fakejob/models/ on Linux) unless FAKEJOB_MODEL_DIR says
// otherwise.

use std::path::{Path, PathBuf};

/// Exported classifier weights.
pub const MODEL_FILE: &str = "model.onnx";
/// Tokenizer matching the exported model.
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// Returns the default directory for storing model files.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fakejob")
        .join("models")
}

/// Check whether both required model files exist.
pub fn model_files_present(dir: &Path) -> bool {
    dir.join(MODEL_FILE).exists() && dir.join(TOKENIZER_FILE).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dir_ends_with_app_models() {
        let dir = default_model_dir();
        assert!(dir.ends_with("fakejob/models"));
    }

    #[test]
    fn test_missing_dir_has_no_model_files() {
        let dir = std::env::temp_dir().join("fakejob-no-such-model-dir");
        assert!(!model_files_present(&dir));
    }

    #[test]
    fn test_partial_model_dir_is_not_present() {
        let dir = std::env::temp_dir().join(format!("fakejob-partial-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(TOKENIZER_FILE), "{}").unwrap();
        assert!(!model_files_present(&dir));
        std::fs::write(dir.join(MODEL_FILE), b"onnx").unwrap();
        assert!(model_files_present(&dir));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
