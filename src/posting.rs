// A single job posting as submitted by the user.
//
// Postings are ephemeral: one is built per submission, classified once,
// and dropped.

use serde::{Deserialize, Serialize};

/// The fields a user fills in. Only `benefits` is optional.
///
/// Absent keys deserialize as empty strings so that a posting with a
/// field left out reaches `missing_fields` instead of failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub title: String,
    pub company_profile: String,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
}

/// Fields that must be non-blank before the classifier is consulted.
/// Declaration order is the order they are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequiredField {
    Title,
    CompanyProfile,
    Description,
    Requirements,
}

impl RequiredField {
    pub const ALL: [RequiredField; 4] = [
        RequiredField::Title,
        RequiredField::CompanyProfile,
        RequiredField::Description,
        RequiredField::Requirements,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            RequiredField::Title => "Job Title",
            RequiredField::CompanyProfile => "Company Profile",
            RequiredField::Description => "Job Description",
            RequiredField::Requirements => "Requirements",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl JobPosting {
    pub fn field(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Title => &self.title,
            RequiredField::CompanyProfile => &self.company_profile,
            RequiredField::Description => &self.description,
            RequiredField::Requirements => &self.requirements,
        }
    }

    /// Required fields that are empty after trimming, in reporting order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|&f| self.field(f).trim().is_empty())
            .collect()
    }

    /// All five fields joined by single spaces, benefits last (even if empty).
    pub fn combined_text(&self) -> String {
        [
            self.title.as_str(),
            self.company_profile.as_str(),
            self.description.as_str(),
            self.requirements.as_str(),
            self.benefits.as_str(),
        ]
        .join(" ")
    }
}
