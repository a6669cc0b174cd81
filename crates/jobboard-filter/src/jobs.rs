//! # Job Criteria
//!
//! The filter panel of the job listing: a search box, a location radio, a
//! job type checkbox group, an experience radio and a salary slider.
//!
//! Deserialises from the panel's JSON form state. Unselected radios arrive
//! as `""` and are treated as absent.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use jobboard_core::{ExperienceLevel, JobPosting, JobType, Location};

use crate::criteria::{Criteria, OneOf, SalaryRange};
use crate::search::{JobField, TextSearch};

/// Active filters of the job listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobCriteria {
    /// Free text matched against title, company and description.
    pub search: TextSearch<JobField>,
    /// Exact location, if chosen.
    #[serde(deserialize_with = "blank_as_none")]
    pub location: Option<Location>,
    /// Selected job types; empty means any.
    #[serde(rename = "type")]
    pub job_types: OneOf<JobType>,
    /// Exact experience level, if chosen.
    #[serde(deserialize_with = "blank_as_none")]
    pub experience_level: Option<ExperienceLevel>,
    /// Salary window, if set.
    pub salary_range: Option<SalaryRange>,
}

impl JobCriteria {
    /// No constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = TextSearch::new(query);
        self
    }

    /// Require a location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Select job types.
    pub fn with_types(mut self, types: impl IntoIterator<Item = JobType>) -> Self {
        self.job_types = OneOf::new(types);
        self
    }

    /// Require an experience level.
    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    /// Restrict salaries to `[low, high]`.
    pub fn with_salary_range(mut self, low: f64, high: f64) -> Self {
        self.salary_range = Some(SalaryRange::new(low, high));
        self
    }

    /// Check or uncheck one job type.
    pub fn toggle_type(&mut self, job_type: JobType) {
        self.job_types.toggle(job_type);
    }

    /// Reset every filter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of active filters, shown as a badge on the filter button.
    pub fn active_count(&self) -> usize {
        [
            Criteria::<JobPosting>::is_active(&self.search),
            self.location.is_some(),
            !self.job_types.is_empty(),
            self.experience_level.is_some(),
            self.salary_range.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

impl Criteria<JobPosting> for JobCriteria {
    fn matches(&self, job: &JobPosting) -> bool {
        self.search.matches(job)
            && self.location.map_or(true, |l| job.location == l)
            && self.job_types.admits(&job.job_type)
            && self.experience_level.map_or(true, |e| job.experience_level == e)
            && self.salary_range.matches(job)
    }

    fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}

/// Look up a job by the `:id` segment of `/job/:id`.
pub fn find_job_by_id<'a>(jobs: &'a [JobPosting], id: &str) -> Option<&'a JobPosting> {
    let found = jobs.iter().find(|job| job.id.as_str() == id);
    if found.is_none() {
        tracing::debug!(id, "no job with this id");
    }
    found
}

/// `null`, a missing key, or `""` all mean "not chosen".
pub(crate) fn blank_as_none<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
where
    D: Deserializer<'de>,
    V: FromStr,
    V::Err: std::fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => label.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
