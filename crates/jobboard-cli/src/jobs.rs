//! # Jobs Subcommand
//!
//! Filters an exported job collection, shows a single job, and builds new
//! postings from admin drafts.
//!
//! ```bash
//! jobboard jobs filter jobs.json --search rust --type Full-time --type Contract
//! jobboard jobs filter jobs.json --criteria panel.json --format text
//! jobboard jobs show jobs.json 42
//! jobboard jobs new draft.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use jobboard_core::{ExperienceLevel, JobDraft, JobPosting, JobType, Location, Timestamp};
use jobboard_filter::{filter, find_job_by_id, Criteria, JobCriteria, SalaryRange, Where};

use crate::config::CliConfig;
use crate::input::{load_records, read_json, to_json, OutputFormat};

/// Arguments for the `jobboard jobs` subcommand.
#[derive(Args, Debug)]
pub struct JobsArgs {
    #[command(subcommand)]
    pub command: JobsCommand,
}

/// Job operations.
#[derive(Subcommand, Debug)]
pub enum JobsCommand {
    /// Print the jobs matching the given criteria, in file order.
    Filter(JobFilterArgs),
    /// Print the job with the given id.
    Show {
        /// JSON array of job postings.
        file: PathBuf,
        /// Job id.
        id: String,
    },
    /// Build a job posting from an admin draft and print it.
    New {
        /// JSON job draft.
        draft: PathBuf,
    },
}

/// Arguments for `jobboard jobs filter`.
#[derive(Args, Debug, Default)]
pub struct JobFilterArgs {
    /// JSON array of job postings.
    pub file: PathBuf,

    /// JSON filter panel state. Flags below override its fields.
    #[arg(long, value_name = "FILE")]
    pub criteria: Option<PathBuf>,

    /// Case-insensitive text matched against title, company and description.
    #[arg(long, short)]
    pub search: Option<String>,

    /// Exact location: Remote, On-site or Hybrid.
    #[arg(long)]
    pub location: Option<Location>,

    /// Accepted job type. Repeat to accept several.
    #[arg(long = "type", value_name = "TYPE")]
    pub job_types: Vec<JobType>,

    /// Exact experience level.
    #[arg(long)]
    pub experience: Option<ExperienceLevel>,

    /// Salary window; jobs without salary data always pass.
    #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"])]
    pub salary: Option<Vec<f64>>,

    /// Drop postings whose listing has lapsed.
    #[arg(long)]
    pub hide_expired: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Execute the jobs subcommand.
///
/// Returns exit code: 0 on success, 1 if `show` finds no job.
pub fn run_jobs(args: &JobsArgs, config: &CliConfig) -> Result<u8> {
    match &args.command {
        JobsCommand::Filter(filter_args) => {
            println!("{}", filter_jobs(filter_args, config)?);
            Ok(0)
        }
        JobsCommand::Show { file, id } => {
            let jobs: Vec<JobPosting> = load_records(file)?;
            match find_job_by_id(&jobs, id) {
                Some(job) => {
                    println!("{}", to_json(job, config.pretty)?);
                    Ok(0)
                }
                None => {
                    tracing::warn!(id = %id, "job not found");
                    Ok(1)
                }
            }
        }
        JobsCommand::New { draft } => {
            println!("{}", new_job(draft, config)?);
            Ok(0)
        }
    }
}

/// Build the criteria from the panel file and flags.
pub fn build_criteria(args: &JobFilterArgs) -> Result<JobCriteria> {
    let mut criteria: JobCriteria = match &args.criteria {
        Some(path) => read_json(path).context("invalid job criteria")?,
        None => JobCriteria::default(),
    };
    if let Some(search) = &args.search {
        criteria = criteria.with_search(search.as_str());
    }
    if let Some(location) = args.location {
        criteria.location = Some(location);
    }
    if !args.job_types.is_empty() {
        criteria = criteria.with_types(args.job_types.iter().copied());
    }
    if let Some(level) = args.experience {
        criteria.experience_level = Some(level);
    }
    if let Some([low, high]) = args.salary.as_deref() {
        criteria.salary_range = Some(SalaryRange::new(*low, *high));
    }
    Ok(criteria)
}

/// Load, filter and render jobs.
pub fn filter_jobs(args: &JobFilterArgs, config: &CliConfig) -> Result<String> {
    let jobs: Vec<JobPosting> = load_records(&args.file)?;
    let criteria = build_criteria(args)?;
    tracing::info!(active = criteria.active_count(), "applying job criteria");

    let matched = if args.hide_expired {
        let now = Timestamp::now();
        filter(&jobs, &(&criteria).and(Where(move |job: &JobPosting| !job.is_expired(now))))
    } else {
        filter(&jobs, &criteria)
    };
    render(&matched, args.format, config)
}

fn render(jobs: &[JobPosting], format: OutputFormat, config: &CliConfig) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(jobs, config.pretty),
        OutputFormat::Text => Ok(jobs
            .iter()
            .map(|job| text_line(job, &config.salary_unit))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn text_line(job: &JobPosting, unit: &str) -> String {
    format!(
        "{}\t{} at {} | {} | {} | {} ({}) | {}",
        job.path(),
        job.title,
        job.company,
        job.location,
        job.job_type,
        job.experience_level,
        job.experience_level.years_hint(),
        job.salary_label(unit),
    )
}

/// Build a posting from a draft file, listed for the configured lifetime.
pub fn new_job(draft: &Path, config: &CliConfig) -> Result<String> {
    let draft: JobDraft = read_json(draft)?;
    let posting = draft
        .into_posting(Timestamp::now(), config.listing_ttl_days)
        .context("invalid job draft")?;
    tracing::info!(id = %posting.id, "job posting created");
    to_json(&posting, config.pretty)
}
