//! # Records
//!
//! In-memory copies of the rows the Gateway returns for the `jobs` and
//! `blog_posts` tables. Field names on the wire are the Gateway's
//! snake_case column names.
//!
//! Text fields default to the empty string when a row omits them. A
//! malformed row therefore still loads; it just never matches a text search.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, ExperienceLevel, JobType, Location};
use crate::identity::{JobId, PostId};
use crate::salary::{disclosed, disclosed_bound, format_salary};
use crate::slug::Slug;
use crate::temporal::Timestamp;

/// Days a job posting stays listed after it is posted.
pub const LISTING_TTL_DAYS: i64 = 30;

/// A job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Gateway-assigned identifier.
    pub id: JobId,
    /// Role title.
    #[serde(default)]
    pub title: String,
    /// Hiring company.
    #[serde(default)]
    pub company: String,
    /// Remote, on-site or hybrid.
    pub location: Location,
    /// Employment arrangement.
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Expected seniority.
    pub experience_level: ExperienceLevel,
    /// Lower salary bound, if disclosed. `0` on the wire loads as `None`.
    #[serde(default, deserialize_with = "disclosed_bound")]
    pub salary_min: Option<f64>,
    /// Upper salary bound, if disclosed. `0` on the wire loads as `None`.
    #[serde(default, deserialize_with = "disclosed_bound")]
    pub salary_max: Option<f64>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Where candidates apply.
    #[serde(default)]
    pub apply_url: String,
    /// Administrator who created the posting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<String>,
    /// Set once at creation.
    pub posted_at: Timestamp,
    /// `posted_at` plus the listing lifetime, set once at creation.
    pub expires_at: Timestamp,
}

impl JobPosting {
    /// Whether neither salary bound is present.
    pub fn salary_undisclosed(&self) -> bool {
        disclosed(self.salary_min).is_none() && disclosed(self.salary_max).is_none()
    }

    /// `salary_min <= salary_max` whenever both are present.
    ///
    /// Records from the Gateway are not guaranteed to satisfy this; drafts
    /// refuse to produce records that violate it.
    pub fn salary_is_consistent(&self) -> bool {
        match (disclosed(self.salary_min), disclosed(self.salary_max)) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Salary band as shown on a job card, e.g. `10 - 20 LPA`.
    pub fn salary_label(&self, unit: &str) -> String {
        format_salary(self.salary_min, self.salary_max, unit)
    }

    /// Whether the listing has lapsed at `at`.
    pub fn is_expired(&self, at: Timestamp) -> bool {
        at >= self.expires_at
    }

    /// Routable path of the detail page.
    pub fn path(&self) -> String {
        format!("/job/{}", self.id)
    }
}

/// A career-advice article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Gateway-assigned identifier.
    pub id: PostId,
    /// Headline; the slug is derived from it at creation.
    #[serde(default)]
    pub title: String,
    /// Slug stored at creation. Empty for rows exported without one.
    #[serde(default)]
    pub slug: Slug,
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
    #[serde(rename = "read_time")]
    pub read_time_minutes: u32,
    /// Creation time.
    pub created_at: Timestamp,
}

impl BlogPost {
    /// The slug used for routing: the stored one, or the title-derived one
    /// when the row predates stored slugs.
    pub fn routable_slug(&self) -> Slug {
        if self.slug.is_empty() {
            Slug::from_title(&self.title)
        } else {
            self.slug.clone()
        }
    }

    /// Routable path of the article page.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.routable_slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_json() -> serde_json::Value {
        serde_json::json!({
            "id": 7,
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "On-site",
            "type": "Full-time",
            "experience_level": "Mid-Level",
            "salary_min": 10,
            "salary_max": 20,
            "description": "Rust services",
            "apply_url": "https://acme.example/jobs/7",
            "posted_at": "2026-01-01T00:00:00+00:00",
            "expires_at": "2026-01-31T00:00:00+00:00"
        })
    }

    #[test]
    fn job_deserializes_from_gateway_row() {
        let job: JobPosting = serde_json::from_value(job_json()).unwrap();
        assert_eq!(job.id.as_str(), "7");
        assert_eq!(job.location, Location::OnSite);
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.experience_level, ExperienceLevel::MidLevel);
        assert_eq!(job.salary_min, Some(10.0));
        assert!(job.posted_by.is_none());
    }

    #[test]
    fn job_serializes_type_field() {
        let job: JobPosting = serde_json::from_value(job_json()).unwrap();
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["type"], "Full-time");
        assert!(value.get("job_type").is_none());
        assert!(value.get("posted_by").is_none());
    }

    #[test]
    fn missing_text_fields_default_to_empty() {
        let mut raw = job_json();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("description");
        obj.remove("company");
        obj.remove("salary_min");
        obj.insert("salary_max".into(), serde_json::Value::Null);
        let job: JobPosting = serde_json::from_value(raw).unwrap();
        assert_eq!(job.description, "");
        assert_eq!(job.company, "");
        assert!(job.salary_undisclosed());
        assert_eq!(job.salary_label("LPA"), "Not Disclosed");
    }

    #[test]
    fn zero_salary_row_is_not_disclosed() {
        let mut raw = job_json();
        raw["salary_min"] = serde_json::json!(0);
        raw["salary_max"] = serde_json::json!(0.0);
        let job: JobPosting = serde_json::from_value(raw).unwrap();
        assert_eq!(job.salary_min, None);
        assert_eq!(job.salary_max, None);
        assert_eq!(job.salary_label("LPA"), "Not Disclosed");
    }

    #[test]
    fn salary_consistency() {
        let mut job: JobPosting = serde_json::from_value(job_json()).unwrap();
        assert!(job.salary_is_consistent());
        job.salary_min = Some(30.0);
        assert!(!job.salary_is_consistent());
        job.salary_max = None;
        assert!(job.salary_is_consistent());
    }

    #[test]
    fn expiry_is_inclusive() {
        let job: JobPosting = serde_json::from_value(job_json()).unwrap();
        assert!(!job.is_expired(Timestamp::parse("2026-01-30T23:59:59Z").unwrap()));
        assert!(job.is_expired(Timestamp::parse("2026-01-31T00:00:00Z").unwrap()));
    }

    #[test]
    fn job_path_uses_id() {
        let job: JobPosting = serde_json::from_value(job_json()).unwrap();
        assert_eq!(job.path(), "/job/7");
    }

    #[test]
    fn post_without_stored_slug_derives_from_title() {
        let post: BlogPost = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "title": "10 Resume Mistakes!",
            "category": "Career Tips",
            "excerpt": "Avoid these",
            "content": "...",
            "read_time": 5,
            "created_at": "2026-02-01T09:00:00Z"
        }))
        .unwrap();
        assert!(post.slug.is_empty());
        assert_eq!(post.routable_slug().as_str(), "10-resume-mistakes");
        assert_eq!(post.path(), "/blog/10-resume-mistakes");
        assert_eq!(post.category, Category::CareerTips);
    }

    #[test]
    fn post_stored_slug_wins() {
        let post: BlogPost = serde_json::from_value(serde_json::json!({
            "id": "p2",
            "title": "Renamed Headline",
            "slug": "original-headline",
            "read_time": 3,
            "created_at": "2026-02-01T09:00:00Z"
        }))
        .unwrap();
        assert_eq!(post.routable_slug().as_str(), "original-headline");
        assert_eq!(post.excerpt, "");
        assert_eq!(post.category, Category::Other(String::new()));
    }
}
