use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use fakejob::classifier::traits::Classifier;
use fakejob::config::{ClassifierBackend, Config};
use fakejob::posting::JobPosting;

/// Fakejob: fake job posting detection.
///
/// Normalizes the posting text, asks a pre-trained classifier for the
/// probability that the posting is fake, and labels it Fake, Real or Unsure.
#[derive(Parser)]
#[command(name = "fakejob", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single job posting
    Predict {
        /// Job title
        #[arg(long, default_value = "")]
        title: String,

        /// Company profile
        #[arg(long, default_value = "")]
        company_profile: String,

        /// Job description
        #[arg(long, default_value = "")]
        description: String,

        /// Requirements
        #[arg(long, default_value = "")]
        requirements: String,

        /// Benefits (optional)
        #[arg(long, default_value = "")]
        benefits: String,

        /// Read the posting as JSON from a file instead ("-" for stdin)
        #[arg(
            long,
            conflicts_with_all = ["title", "company_profile", "description", "requirements", "benefits"]
        )]
        input: Option<PathBuf>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a piece of text is normalized before classification
    Normalize {
        /// The text to normalize
        text: String,
    },

    /// Show the configured classifier and whether its model is available
    Status,

    /// Serve the web form and JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (defaults to FAKEJOB_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (defaults to FAKEJOB_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fakejob=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            title,
            company_profile,
            description,
            requirements,
            benefits,
            input,
            json,
        } => {
            let posting = match input {
                Some(path) => read_posting(&path)?,
                None => JobPosting {
                    title,
                    company_profile,
                    description,
                    requirements,
                    benefits,
                },
            };

            let config = Config::load()?;
            config.require_classifier()?;
            let classifier = create_classifier(&config)?;

            let view = fakejob::handler::handle(&posting, classifier.as_ref()).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                fakejob::output::terminal::display_verdict(&view);
            }
        }

        Commands::Normalize { text } => {
            println!("{}", fakejob::normalize::normalize(&text));
        }

        Commands::Status => {
            let config = Config::load()?;
            fakejob::status::show(&config);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            config.require_classifier()?;
            let classifier = create_classifier(&config)?;

            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            fakejob::web::run_server(classifier, port, &bind).await?;
        }
    }

    Ok(())
}

/// Create the classifier for the configured backend. Called once per process.
fn create_classifier(config: &Config) -> Result<Arc<dyn Classifier>> {
    match config.classifier_backend {
        ClassifierBackend::Onnx => {
            info!("Using local ONNX classifier");
            let classifier = fakejob::classifier::onnx::OnnxClassifier::load(&config.model_dir)?;
            Ok(Arc::new(classifier))
        }
        ClassifierBackend::Remote => {
            info!(url = %config.classifier_url, "Using remote classifier");
            let classifier =
                fakejob::classifier::remote::RemoteClassifier::new(config.classifier_url.clone());
            Ok(Arc::new(classifier))
        }
    }
}

/// Read a JSON posting from a file, or from stdin when the path is "-".
fn read_posting(path: &Path) -> Result<JobPosting> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read posting from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read posting from {}", path.display()))?
    };

    serde_json::from_str(&raw).context("Posting JSON is not a valid job posting")
}
