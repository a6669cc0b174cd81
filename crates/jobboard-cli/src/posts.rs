//! # Posts Subcommand
//!
//! Filters an exported blog collection, resolves `/blog/:slug` segments, and
//! builds new posts from admin drafts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use jobboard_core::{BlogPost, Category, PostDraft};
use jobboard_filter::{filter, find_post_by_slug, PostCriteria};

use crate::config::CliConfig;
use crate::input::{load_records, read_json, to_json, OutputFormat};

/// Arguments for the `jobboard posts` subcommand.
#[derive(Args, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub command: PostsCommand,
}

/// Blog post operations.
#[derive(Subcommand, Debug)]
pub enum PostsCommand {
    /// Print the posts matching the given criteria, in file order.
    Filter(PostFilterArgs),
    /// Print the post routed at `/blog/<SLUG>`.
    Find {
        /// JSON array of blog posts.
        file: PathBuf,
        /// Slug path segment.
        slug: String,
    },
    /// Build a blog post from an admin draft and print it.
    New {
        /// JSON post draft.
        draft: PathBuf,
    },
}

/// Arguments for `jobboard posts filter`.
#[derive(Args, Debug, Default)]
pub struct PostFilterArgs {
    /// JSON array of blog posts.
    pub file: PathBuf,

    /// Case-insensitive text matched against title, excerpt and category.
    #[arg(long, short)]
    pub search: Option<String>,

    /// Exact category label.
    #[arg(long)]
    pub category: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Execute the posts subcommand.
///
/// Returns exit code: 0 on success, 1 if `find` resolves no post.
pub fn run_posts(args: &PostsArgs, config: &CliConfig) -> Result<u8> {
    match &args.command {
        PostsCommand::Filter(filter_args) => {
            println!("{}", filter_posts(filter_args, config)?);
            Ok(0)
        }
        PostsCommand::Find { file, slug } => match find_post(file, slug, config)? {
            Some(rendered) => {
                println!("{rendered}");
                Ok(0)
            }
            None => {
                tracing::warn!(slug = %slug, "post not found");
                Ok(1)
            }
        },
        PostsCommand::New { draft } => {
            println!("{}", new_post(draft, config)?);
            Ok(0)
        }
    }
}

/// Load, filter and render posts.
pub fn filter_posts(args: &PostFilterArgs, config: &CliConfig) -> Result<String> {
    let posts: Vec<BlogPost> = load_records(&args.file)?;
    let mut criteria = PostCriteria::new();
    if let Some(search) = &args.search {
        criteria = criteria.with_search(search.as_str());
    }
    if let Some(category) = args.category.as_deref().filter(|c| !c.trim().is_empty()) {
        criteria = criteria.with_category(Category::from(category));
    }
    tracing::info!(active = criteria.active_count(), "applying post criteria");

    let matched = filter(&posts, &criteria);
    match args.format {
        OutputFormat::Json => to_json(&matched, config.pretty),
        OutputFormat::Text => Ok(matched
            .iter()
            .map(text_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn text_line(post: &BlogPost) -> String {
    format!(
        "{}\t{} [{}] {} min read, {}",
        post.path(),
        post.title,
        post.category,
        post.read_time_minutes,
        post.created_at.to_display_date(),
    )
}

/// Resolve a slug segment against the posts in `file`.
pub fn find_post(file: &Path, slug: &str, config: &CliConfig) -> Result<Option<String>> {
    let posts: Vec<BlogPost> = load_records(file)?;
    find_post_by_slug(&posts, slug)
        .map(|post| to_json(post, config.pretty))
        .transpose()
}

/// Build a post from a draft file.
pub fn new_post(draft: &Path, config: &CliConfig) -> Result<String> {
    let draft: PostDraft = read_json(draft)?;
    let post = draft.create().context("invalid post draft")?;
    tracing::info!(id = %post.id, slug = %post.slug, "blog post created");
    to_json(&post, config.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS: &str = r#"[
        {"id": "a", "title": "Ace Your Interview", "slug": "ace-your-interview",
         "category": "Interview Guide", "excerpt": "Prepare well", "content": "",
         "read_time": 6, "created_at": "2024-05-02T09:00:00+00:00"},
        {"id": "b", "title": "Remote Etiquette", "slug": "",
         "category": "Remote Life", "excerpt": "Cameras on?", "content": "",
         "read_time": 3, "created_at": "2024-04-01T09:00:00Z"}
    ]"#;

    fn fixture() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, POSTS).unwrap();
        (dir, path)
    }

    #[test]
    fn filter_by_search_and_category() {
        let (_dir, file) = fixture();
        let args = PostFilterArgs {
            file: file.clone(),
            search: Some("INTERVIEW".into()),
            ..Default::default()
        };
        let out: Vec<BlogPost> =
            serde_json::from_str(&filter_posts(&args, &CliConfig::default()).unwrap()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id.as_str(), "a");

        let args = PostFilterArgs {
            file,
            category: Some("Remote Life".into()),
            format: OutputFormat::Text,
            ..Default::default()
        };
        let out = filter_posts(&args, &CliConfig::default()).unwrap();
        assert_eq!(
            out,
            "/blog/remote-etiquette\tRemote Etiquette [Remote Life] 3 min read, Apr 1, 2024"
        );
    }

    #[test]
    fn find_by_stored_and_derived_slug() {
        let (_dir, file) = fixture();
        let config = CliConfig::default();
        assert!(find_post(&file, "ace-your-interview", &config).unwrap().is_some());
        assert!(find_post(&file, "remote-etiquette", &config).unwrap().is_some());
        assert!(find_post(&file, "missing-post", &config).unwrap().is_none());
    }

    #[test]
    fn find_exit_code() {
        let (_dir, file) = fixture();
        let args = PostsArgs {
            command: PostsCommand::Find { file, slug: "nope".into() },
        };
        assert_eq!(run_posts(&args, &CliConfig::default()).unwrap(), 1);
    }

    #[test]
    fn new_post_encodes_slug() {
        let dir = tempfile::tempdir().unwrap();
        let draft = dir.path().join("draft.json");
        std::fs::write(
            &draft,
            r#"{"title": "Negotiating Your Salary!", "category": "Career Tips", "read_time": 5}"#,
        )
        .unwrap();
        let config = CliConfig { pretty: false, ..Default::default() };
        let post: BlogPost = serde_json::from_str(&new_post(&draft, &config).unwrap()).unwrap();
        assert_eq!(post.slug.as_str(), "negotiating-your-salary");
        assert_eq!(post.category, Category::CareerTips);
    }

    #[test]
    fn new_post_rejects_zero_read_time() {
        let dir = tempfile::tempdir().unwrap();
        let draft = dir.path().join("draft.json");
        std::fs::write(&draft, r#"{"title": "T", "read_time": 0}"#).unwrap();
        assert!(new_post(&draft, &CliConfig::default()).is_err());
    }
}
