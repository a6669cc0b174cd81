//! # jobboard-cli — Job Board Command-Line Interface
//!
//! Provides the `jobboard` command-line interface over exported Gateway
//! records. Everything runs in memory against JSON files; nothing talks to
//! the Gateway.
//!
//! ## Subcommands
//!
//! - `jobboard slug`: Encode titles to slugs and decode them back.
//! - `jobboard jobs`: Filter, show and create job postings.
//! - `jobboard posts`: Filter, resolve and create blog posts.
//!
//! ```bash
//! jobboard slug encode "Senior Software Engineer!"
//! jobboard jobs filter jobs.json --type Full-time --salary 10 40
//! jobboard posts find posts.json resume-tips
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to `jobboard-core` and `jobboard-filter`.
//! - Results go to stdout; logs go to stderr.

pub mod config;
pub mod input;
pub mod jobs;
pub mod posts;
pub mod slug;
