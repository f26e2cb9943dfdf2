// System status display — shows the configured classifier and model files.

use std::path::Path;

use colored::Colorize;

use crate::classifier::model_dir::{MODEL_FILE, TOKENIZER_FILE};
use crate::config::{ClassifierBackend, Config};

/// Display system status to the terminal.
pub fn show(config: &Config) {
    println!("Classifier backend: {}", config.classifier_backend.as_str());

    match config.classifier_backend {
        ClassifierBackend::Onnx => {
            println!("Model directory: {}", config.model_dir.display());
            for file in [MODEL_FILE, TOKENIZER_FILE] {
                println!("  {}", describe_file(&config.model_dir.join(file), file));
            }
        }
        ClassifierBackend::Remote => {
            if config.classifier_url.is_empty() {
                println!("Endpoint: {}", "not set (FAKEJOB_CLASSIFIER_URL)".yellow());
            } else {
                println!("Endpoint: {}", config.classifier_url);
            }
        }
    }

    match config.require_classifier() {
        Ok(()) => println!("\n{}", "Ready to classify postings.".green()),
        Err(_) => println!("\n{}", "Classifier not ready — see above.".yellow()),
    }
}

fn describe_file(path: &Path, name: &str) -> String {
    match std::fs::metadata(path) {
        Ok(meta) => format!("{name} ({})", format_bytes(meta.len())),
        Err(_) => format!("{name} {}", "(missing)".red()),
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
