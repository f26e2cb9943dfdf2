// Request handling: one posting in, one verdict out.
//
// Flow: validate required fields -> combine -> normalize -> classify ->
// decide. A posting with blank required fields is labelled Fake without
// consulting the classifier.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::classifier::traits::Classifier;
use crate::decision::{decide, Label, Tone};
use crate::normalize::normalize;
use crate::posting::{JobPosting, RequiredField};

/// Section heading shown above every verdict.
pub const HEADING: &str = "### Prediction Result";

/// Caption shown for every classifier-backed verdict.
pub const PROBABILITY_CAPTION: &str = "Predictions are probability-based. \
     Borderline cases are marked as UNSURE to reduce false accusations.";

/// Prefix of the caption shown when required fields are blank.
pub const MISSING_FIELDS_PREFIX: &str = "Reason: Missing required fields → ";

/// A classifier probability paired with the label it decides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub probability_of_fake: f64,
    pub label: Label,
}

impl Prediction {
    /// Build a prediction from a raw classifier output.
    ///
    /// Non-finite values are rejected. Finite values outside [0, 1] are
    /// clamped into range.
    pub fn from_probability(raw: f64) -> Result<Self> {
        if !raw.is_finite() {
            anyhow::bail!("Classifier returned a non-finite probability: {raw}");
        }
        let probability_of_fake = raw.clamp(0.0, 1.0);
        if probability_of_fake != raw {
            warn!(
                raw,
                clamped = probability_of_fake,
                "Classifier probability outside [0, 1], clamping"
            );
        }
        Ok(Self {
            probability_of_fake,
            label: decide(probability_of_fake),
        })
    }
}

/// Everything the presentation layer needs to render a verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictView {
    pub heading: String,
    pub label: Label,
    pub tone: Tone,
    pub headline: String,
    /// Absent when the classifier was not consulted.
    pub probability: Option<f64>,
    pub caption: String,
    pub missing_fields: Vec<RequiredField>,
}

impl VerdictView {
    fn missing(fields: Vec<RequiredField>) -> Self {
        let names: Vec<&str> = fields.iter().map(RequiredField::display_name).collect();
        Self::new(
            Label::Fake,
            None,
            format!("{MISSING_FIELDS_PREFIX}{}", names.join(", ")),
            fields,
        )
    }

    fn predicted(prediction: Prediction) -> Self {
        Self::new(
            prediction.label,
            Some(prediction.probability_of_fake),
            PROBABILITY_CAPTION.to_string(),
            Vec::new(),
        )
    }

    fn new(
        label: Label,
        probability: Option<f64>,
        caption: String,
        missing_fields: Vec<RequiredField>,
    ) -> Self {
        Self {
            heading: HEADING.to_string(),
            label,
            tone: label.tone(),
            headline: label.headline().to_string(),
            probability,
            caption,
            missing_fields,
        }
    }
}

/// Classify a single posting.
///
/// Returns an error only if the classifier itself fails or returns a
/// non-finite probability.
pub async fn handle(posting: &JobPosting, classifier: &dyn Classifier) -> Result<VerdictView> {
    let missing = posting.missing_fields();
    if !missing.is_empty() {
        info!(missing = ?missing, "Posting is missing required fields");
        return Ok(VerdictView::missing(missing));
    }

    let text = normalize(&posting.combined_text());
    debug!(
        chars = text.len(),
        text_preview = %crate::output::truncate_chars(&text, 80),
        "Normalized posting"
    );

    let raw = classifier
        .predict_probability(&text)
        .await
        .context("Classifier failed")?;
    let prediction = Prediction::from_probability(raw)?;

    info!(
        label = %prediction.label,
        fake_probability = prediction.probability_of_fake,
        "Classified posting"
    );

    Ok(VerdictView::predicted(prediction))
}
