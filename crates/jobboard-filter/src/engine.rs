//! # Filter Engine
//!
//! Stable filtering: the output is the subsequence of the input whose
//! elements satisfy the criteria, in input order. Upstream ordering (newest
//! first, as the Gateway query returns it) is preserved untouched.

use crate::criteria::Criteria;

/// Return clones of the records matching `criteria`, in input order.
///
/// Inactive criteria return the whole input without testing each record.
pub fn filter<T, C>(records: &[T], criteria: &C) -> Vec<T>
where
    T: Clone,
    C: Criteria<T> + ?Sized,
{
    if !criteria.is_active() {
        tracing::trace!(input = records.len(), "no active criteria; returning input");
        return records.to_vec();
    }
    let out: Vec<T> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();
    tracing::debug!(input = records.len(), output = out.len(), "filtered records");
    out
}

/// Like [`filter`], but borrows the matching records.
pub fn filter_refs<'a, T, C>(records: &'a [T], criteria: &C) -> Vec<&'a T>
where
    C: Criteria<T> + ?Sized,
{
    let out: Vec<&T> = records.iter().filter(|r| criteria.matches(r)).collect();
    tracing::debug!(input = records.len(), output = out.len(), "filtered records");
    out
}

/// Like [`filter`], for a collection that may not have loaded yet.
/// A missing collection yields an empty result.
pub fn filter_opt<T, C>(records: Option<&[T]>, criteria: &C) -> Vec<T>
where
    T: Clone,
    C: Criteria<T> + ?Sized,
{
    match records {
        Some(records) => filter(records, criteria),
        None => Vec::new(),
    }
}

/// Drop the records that do not match, in place.
pub fn retain<T, C>(records: &mut Vec<T>, criteria: &C)
where
    C: Criteria<T> + ?Sized,
{
    if criteria.is_active() {
        records.retain(|r| criteria.matches(r));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Where;
    use crate::jobs::JobCriteria;
    use jobboard_core::{
        ExperienceLevel, JobId, JobPosting, JobType, Location, Timestamp,
    };

    fn job(id: &str, title: &str, company: &str, job_type: JobType) -> JobPosting {
        JobPosting {
            id: JobId::from_raw(id),
            title: title.to_string(),
            company: company.to_string(),
            location: Location::Remote,
            job_type,
            experience_level: ExperienceLevel::Junior,
            salary_min: None,
            salary_max: None,
            description: String::new(),
            apply_url: "https://example.com".to_string(),
            posted_by: None,
            posted_at: Timestamp::now(),
            expires_at: Timestamp::now().plus_days(30),
        }
    }

    fn ids(jobs: &[JobPosting]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn multi_select_type() {
        let jobs = vec![
            job("1", "a", "x", JobType::FullTime),
            job("2", "b", "x", JobType::Contract),
        ];
        let c = JobCriteria::new().with_types([JobType::FullTime]);
        assert_eq!(ids(&filter(&jobs, &c)), vec!["1"]);
    }

    #[test]
    fn search_title() {
        let jobs = vec![
            job("1", "Backend Engineer", "Acme", JobType::FullTime),
            job("2", "Designer", "Acme", JobType::FullTime),
        ];
        let c = JobCriteria::new().with_search("backend");
        assert_eq!(ids(&filter(&jobs, &c)), vec!["1"]);
    }

    #[test]
    fn search_whitespace_is_matched_literally() {
        let jobs = vec![
            job("1", "Senior Engineer", "Acme", JobType::FullTime),
            job("2", "Designer", "Acme", JobType::FullTime),
        ];
        let c = JobCriteria::new().with_search(" ");
        assert_eq!(ids(&filter(&jobs, &c)), vec!["1"]);
        let c = JobCriteria::new().with_search("designer ");
        assert!(filter(&jobs, &c).is_empty());
    }

    #[test]
    fn salary_not_disclosed_passes() {
        let mut disclosed = job("1", "a", "x", JobType::FullTime);
        disclosed.salary_min = Some(16.0);
        disclosed.salary_max = Some(20.0);
        let undisclosed = job("2", "b", "x", JobType::FullTime);
        let jobs = vec![disclosed, undisclosed];
        let c = JobCriteria::new().with_salary_range(15.0, 25.0);
        assert_eq!(ids(&filter(&jobs, &c)), vec!["1", "2"]);
    }

    #[test]
    fn salary_below_window_is_excluded() {
        let mut low = job("1", "a", "x", JobType::FullTime);
        low.salary_min = Some(10.0);
        low.salary_max = Some(20.0);
        let undisclosed = job("2", "b", "x", JobType::FullTime);
        let jobs = vec![low, undisclosed];
        let c = JobCriteria::new().with_salary_range(15.0, 25.0);
        assert_eq!(ids(&filter(&jobs, &c)), vec!["2"]);
    }

    #[test]
    fn empty_input() {
        let jobs: Vec<JobPosting> = Vec::new();
        let c = JobCriteria::new().with_search("anything");
        assert!(filter(&jobs, &c).is_empty());
        assert!(filter_opt::<JobPosting, _>(None, &c).is_empty());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let jobs = vec![job("1", "Backend", "Acme", JobType::FullTime)];
        let c = JobCriteria::new().with_search("zzz");
        assert!(filter(&jobs, &c).is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let jobs = vec![
            job("3", "Rust dev", "x", JobType::FullTime),
            job("1", "Go dev", "x", JobType::FullTime),
            job("2", "Rust lead", "x", JobType::FullTime),
        ];
        let c = JobCriteria::new().with_search("rust");
        assert_eq!(ids(&filter(&jobs, &c)), vec!["3", "2"]);
    }

    #[test]
    fn refs_and_retain_agree_with_filter() {
        let jobs = vec![
            job("1", "a", "x", JobType::FullTime),
            job("2", "b", "x", JobType::Contract),
            job("3", "c", "x", JobType::FullTime),
        ];
        let c = JobCriteria::new().with_types([JobType::FullTime]);
        let by_ref: Vec<&str> = filter_refs(&jobs, &c).iter().map(|j| j.id.as_str()).collect();
        let mut owned = jobs.clone();
        retain(&mut owned, &c);
        assert_eq!(by_ref, ids(&filter(&jobs, &c)));
        assert_eq!(ids(&owned), by_ref);
    }

    #[test]
    fn combinator_with_ad_hoc_criterion() {
        let jobs = vec![
            job("1", "a", "Acme", JobType::FullTime),
            job("2", "b", "Globex", JobType::FullTime),
        ];
        let c = JobCriteria::new()
            .with_types([JobType::FullTime])
            .and(Where(|j: &JobPosting| j.company == "Globex"));
        assert_eq!(ids(&filter(&jobs, &c)), vec!["2"]);
    }
}
