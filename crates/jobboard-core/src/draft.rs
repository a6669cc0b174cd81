//! # Drafts: Admin Form Input
//!
//! Administrators create and edit records through forms. A draft holds the
//! raw form values; turning it into a record normalises and validates them
//! before anything is handed to the Gateway.
//!
//! ## Normalisation
//!
//! - Text fields are trimmed.
//! - A salary of `0` means "not disclosed" and is stored as `None`.
//! - A blog post slug is always passed through the slug codec. When the
//!   administrator leaves it blank, or it encodes to nothing, the slug is
//!   derived from the title.
//!
//! ## Lifecycle
//!
//! `posted_at` and `expires_at` are set once, when the job is created.
//! Editing a posting never moves either timestamp.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{Category, ExperienceLevel, JobType, Location};
use crate::error::ValidationError;
use crate::identity::{JobId, PostId};
use crate::record::{BlogPost, JobPosting, LISTING_TTL_DAYS};
use crate::slug::Slug;
use crate::temporal::Timestamp;

/// Form values for creating or editing a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    /// Role title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Remote, on-site or hybrid.
    pub location: Location,
    /// Employment arrangement.
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Expected seniority.
    pub experience_level: ExperienceLevel,
    /// Lower salary bound; `0` or absent means not disclosed.
    #[serde(default)]
    pub salary_min: Option<f64>,
    /// Upper salary bound; `0` or absent means not disclosed.
    #[serde(default)]
    pub salary_max: Option<f64>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Where candidates apply. Must be an absolute URL.
    pub apply_url: String,
    /// Administrator creating the posting.
    #[serde(default)]
    pub posted_by: Option<String>,
}

/// Validated, trimmed job fields shared by the create and edit paths.
struct JobFields {
    title: String,
    company: String,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    description: String,
    apply_url: String,
}

impl JobDraft {
    /// Create a posting listed from now for [`LISTING_TTL_DAYS`] days.
    pub fn create(self) -> Result<JobPosting, ValidationError> {
        self.into_posting(Timestamp::now(), LISTING_TTL_DAYS)
    }

    /// Create a posting listed from `posted_at` for `ttl_days` days.
    pub fn into_posting(
        self,
        posted_at: Timestamp,
        ttl_days: i64,
    ) -> Result<JobPosting, ValidationError> {
        let fields = self.normalized()?;
        let posting = JobPosting {
            id: JobId::new(),
            title: fields.title,
            company: fields.company,
            location: self.location,
            job_type: self.job_type,
            experience_level: self.experience_level,
            salary_min: fields.salary_min,
            salary_max: fields.salary_max,
            description: fields.description,
            apply_url: fields.apply_url,
            posted_by: self.posted_by,
            posted_at,
            expires_at: posted_at.plus_days(ttl_days),
        };
        tracing::debug!(
            id = %posting.id,
            expires_at = %posting.expires_at,
            "created job posting from draft"
        );
        Ok(posting)
    }

    /// Overwrite the editable fields of `posting`.
    ///
    /// On error `posting` is left untouched. `id`, `posted_by` and both
    /// timestamps are kept.
    pub fn apply_to(&self, posting: &mut JobPosting) -> Result<(), ValidationError> {
        let fields = self.normalized()?;
        posting.title = fields.title;
        posting.company = fields.company;
        posting.location = self.location;
        posting.job_type = self.job_type;
        posting.experience_level = self.experience_level;
        posting.salary_min = fields.salary_min;
        posting.salary_max = fields.salary_max;
        posting.description = fields.description;
        posting.apply_url = fields.apply_url;
        tracing::debug!(id = %posting.id, "applied draft to job posting");
        Ok(())
    }

    fn normalized(&self) -> Result<JobFields, ValidationError> {
        let title = required("title", &self.title)?;
        let company = required("company", &self.company)?;
        let salary_min = salary("salary_min", self.salary_min)?;
        let salary_max = salary("salary_max", self.salary_max)?;
        if let (Some(min), Some(max)) = (salary_min, salary_max) {
            if min > max {
                return Err(ValidationError::SalaryRangeInverted { min, max });
            }
        }

        let apply_url = self.apply_url.trim().to_string();
        Url::parse(&apply_url).map_err(|e| ValidationError::InvalidApplyUrl {
            value: apply_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(JobFields {
            title,
            company,
            salary_min,
            salary_max,
            description: self.description.trim().to_string(),
            apply_url,
        })
    }
}

/// Form values for creating or editing a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Headline.
    pub title: String,
    /// Optional slug override; encoded before use.
    #[serde(default)]
    pub slug: Option<String>,
    /// Known category or free text.
    #[serde(default)]
    pub category: Category,
    /// Teaser shown on cards.
    #[serde(default)]
    pub excerpt: String,
    /// Full article body.
    #[serde(default)]
    pub content: String,
    /// Estimated reading time in minutes.
    pub read_time: i64,
}

impl PostDraft {
    /// Create a post dated now.
    pub fn create(self) -> Result<BlogPost, ValidationError> {
        self.into_post(Timestamp::now())
    }

    /// Create a post dated `created_at`. The slug is fixed from here on.
    pub fn into_post(self, created_at: Timestamp) -> Result<BlogPost, ValidationError> {
        let title = required("title", &self.title)?;
        let read_time_minutes = read_time(self.read_time)?;
        let slug = self.resolved_slug(&title);
        let post = BlogPost {
            id: PostId::new(),
            title,
            slug,
            category: self.category,
            excerpt: self.excerpt.trim().to_string(),
            content: self.content.trim().to_string(),
            read_time_minutes,
            created_at,
        };
        tracing::debug!(id = %post.id, slug = %post.slug, "created blog post from draft");
        Ok(post)
    }

    /// Overwrite the editable fields of `post`.
    ///
    /// The slug only changes when the draft names one explicitly; retitling
    /// a post keeps its existing links working.
    pub fn apply_to(&self, post: &mut BlogPost) -> Result<(), ValidationError> {
        let title = required("title", &self.title)?;
        let read_time_minutes = read_time(self.read_time)?;
        if self.explicit_slug().is_some() || post.slug.is_empty() {
            post.slug = self.resolved_slug(&title);
        }
        post.title = title;
        post.category = self.category.clone();
        post.excerpt = self.excerpt.trim().to_string();
        post.content = self.content.trim().to_string();
        post.read_time_minutes = read_time_minutes;
        tracing::debug!(id = %post.id, slug = %post.slug, "applied draft to blog post");
        Ok(())
    }

    fn explicit_slug(&self) -> Option<Slug> {
        self.slug
            .as_deref()
            .map(Slug::from_title)
            .filter(|s| !s.is_empty())
    }

    fn resolved_slug(&self, title: &str) -> Slug {
        self.explicit_slug()
            .unwrap_or_else(|| Slug::from_title(title))
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

fn salary(field: &'static str, value: Option<f64>) -> Result<Option<f64>, ValidationError> {
    match value {
        None => Ok(None),
        Some(v) if !v.is_finite() || v < 0.0 => Err(ValidationError::InvalidSalary { field, value: v }),
        Some(v) if v == 0.0 => Ok(None),
        Some(v) => Ok(Some(v)),
    }
}

fn read_time(minutes: i64) -> Result<u32, ValidationError> {
    u32::try_from(minutes)
        .ok()
        .filter(|m| *m >= 1)
        .ok_or(ValidationError::InvalidReadTime(minutes))
}
