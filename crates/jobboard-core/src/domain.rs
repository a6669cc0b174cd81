//! # Listing Enumerations
//!
//! Defines the categorical fields of job postings and blog posts. The string
//! form of each variant is the exact label the Gateway stores and the filter
//! UI offers, so `as_str()`, `Display`, `FromStr` and serde all agree.
//!
//! Label parsing is case-sensitive: `"remote"` is not a [`Location`]. The
//! filter engine compares categorical fields by exact equality, and a
//! lenient parser here would let two spellings of one label diverge there.
//!
//! [`Category`] is the exception: blog categories are free text in the
//! Gateway, so unknown labels are preserved in [`Category::Other`] instead of
//! being rejected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Fully remote.
    Remote,
    /// At the employer's premises.
    #[serde(rename = "On-site")]
    OnSite,
    /// Split between remote and on-site.
    Hybrid,
}

impl Location {
    /// All locations in the order the filter UI lists them.
    pub fn all() -> &'static [Location] {
        &[Self::Remote, Self::OnSite, Self::Hybrid]
    }

    /// The stored label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::OnSite => "On-site",
            Self::Hybrid => "Hybrid",
        }
    }
}

/// Employment arrangement. Serialized under the wire name `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    /// Full-time employment.
    #[serde(rename = "Full-time")]
    FullTime,
    /// Part-time employment.
    #[serde(rename = "Part-time")]
    PartTime,
    /// Fixed-term or freelance contract.
    Contract,
    /// Internship.
    Internship,
}

impl JobType {
    /// All job types in the order the filter UI lists them.
    pub fn all() -> &'static [JobType] {
        &[Self::FullTime, Self::PartTime, Self::Contract, Self::Internship]
    }

    /// The stored label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }
}

/// Seniority expected of the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    /// 0-2 years.
    Fresher,
    /// 2-4 years.
    Junior,
    /// 4-6 years.
    #[serde(rename = "Mid-Level")]
    MidLevel,
    /// 6-10 years.
    Senior,
    /// 10+ years.
    Lead,
}

impl ExperienceLevel {
    /// All levels from least to most senior.
    pub fn all() -> &'static [ExperienceLevel] {
        &[
            Self::Fresher,
            Self::Junior,
            Self::MidLevel,
            Self::Senior,
            Self::Lead,
        ]
    }

    /// The stored label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fresher => "Fresher",
            Self::Junior => "Junior",
            Self::MidLevel => "Mid-Level",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
        }
    }

    /// Years of experience shown next to the label, e.g. `"6-10 years"`.
    pub fn years_hint(&self) -> &'static str {
        match self {
            Self::Fresher => "0-2 years",
            Self::Junior => "2-4 years",
            Self::MidLevel => "4-6 years",
            Self::Senior => "6-10 years",
            Self::Lead => "10+ years",
        }
    }
}

macro_rules! label_traits {
    ($ty:ident, $kind:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ValidationError::UnknownLabel {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

label_traits!(Location, "location");
label_traits!(JobType, "job type");
label_traits!(ExperienceLevel, "experience level");

/// Blog post category.
///
/// The four known categories get dedicated treatment in the presentation
/// layer. Anything else is kept verbatim and rendered with a default
/// treatment; check [`Category::is_known`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Career growth advice.
    CareerTips,
    /// Interview preparation.
    InterviewGuide,
    /// Finding openings and applying.
    JobSearch,
    /// Life at work.
    Workplace,
    /// Free-text category outside the known set.
    Other(String),
}

impl Category {
    /// The known categories in the order the admin form lists them.
    pub fn known() -> [Category; 4] {
        [
            Self::CareerTips,
            Self::InterviewGuide,
            Self::JobSearch,
            Self::Workplace,
        ]
    }

    /// The stored label. For [`Category::Other`] this is the original text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CareerTips => "Career Tips",
            Self::InterviewGuide => "Interview Guide",
            Self::JobSearch => "Job Search",
            Self::Workplace => "Workplace",
            Self::Other(label) => label.as_str(),
        }
    }

    /// Whether this is one of the four known categories.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Career Tips" => Self::CareerTips,
            "Interview Guide" => Self::InterviewGuide,
            "Job Search" => Self::JobSearch,
            "Workplace" => Self::Workplace,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
