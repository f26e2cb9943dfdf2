// Probability-to-label decision rule.
//
// The band between the two thresholds is deliberately left undecided:
// borderline postings are flagged for manual review instead of being
// accused of fraud on a coin flip.

use serde::{Deserialize, Serialize};

/// The three possible verdicts for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Fake,
    Real,
    Unsure,
}

/// How the presentation layer should style a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Error,
    Success,
    Warning,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fake => "Fake Job",
            Label::Real => "Real Job",
            Label::Unsure => "Unsure",
        }
    }

    /// Banner text shown above the caption.
    pub fn headline(&self) -> &'static str {
        match self {
            Label::Fake => "FAKE JOB POSTING",
            Label::Real => "REAL JOB POSTING",
            Label::Unsure => "UNSURE — NEEDS MANUAL REVIEW",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Label::Fake => Tone::Error,
            Label::Real => Tone::Success,
            Label::Unsure => Tone::Warning,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive decision thresholds on P(fake).
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// At or above this probability the posting is labelled Fake (default 0.6)
    pub fake_at_or_above: f64,
    /// At or below this probability the posting is labelled Real (default 0.4)
    pub real_at_or_below: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            fake_at_or_above: 0.6,
            real_at_or_below: 0.4,
        }
    }
}

impl Thresholds {
    /// Map a fake probability to a label. The Fake check runs first.
    pub fn decide(&self, fake_probability: f64) -> Label {
        match fake_probability {
            p if p >= self.fake_at_or_above => Label::Fake,
            p if p <= self.real_at_or_below => Label::Real,
            _ => Label::Unsure,
        }
    }
}

/// Decide a label using the default thresholds.
pub fn decide(fake_probability: f64) -> Label {
    Thresholds::default().decide(fake_probability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(decide(0.6), Label::Fake);
        assert_eq!(decide(0.4), Label::Real);
    }

    #[test]
    fn test_middle_band_is_unsure() {
        assert_eq!(decide(0.5), Label::Unsure);
        assert_eq!(decide(0.41), Label::Unsure);
        assert_eq!(decide(0.59), Label::Unsure);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(decide(0.0), Label::Real);
        assert_eq!(decide(1.0), Label::Fake);
    }

    #[test]
    fn test_nan_falls_to_unsure() {
        // NaN fails both comparisons
        assert_eq!(decide(f64::NAN), Label::Unsure);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = Thresholds {
            fake_at_or_above: 0.9,
            real_at_or_below: 0.1,
        };
        assert_eq!(strict.decide(0.75), Label::Unsure);
        assert_eq!(strict.decide(0.9), Label::Fake);
        assert_eq!(strict.decide(0.05), Label::Real);
    }

    #[test]
    fn test_tone_per_label() {
        assert_eq!(Label::Fake.tone(), Tone::Error);
        assert_eq!(Label::Real.tone(), Tone::Success);
        assert_eq!(Label::Unsure.tone(), Tone::Warning);
    }
}
