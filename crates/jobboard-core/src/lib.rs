#![deny(missing_docs)]

//! # jobboard-core — Foundational Types for the Job Board
//!
//! This crate defines the record types and pure transformations that the rest
//! of the workspace builds on. It has no internal crate dependencies.
//!
//! Persistence, authentication and querying belong to the hosted backend
//! (the Gateway). This crate only models the records the Gateway hands back
//! and the deterministic logic applied to them in memory.
//!
//! ## Design Principles
//!
//! 1. **Explicit record structs.** [`JobPosting`] and [`BlogPost`] are typed
//!    structs, not dynamically accessed maps. A missing field is a compile
//!    error, not a runtime surprise.
//!
//! 2. **Exact enumerations.** [`Location`], [`JobType`] and [`ExperienceLevel`]
//!    carry the exact labels the Gateway stores. [`Category`] tolerates free
//!    text through [`Category::Other`].
//!
//! 3. **[`Slug`] is the sole routable token.** A `Slug` can only be built
//!    through [`slug::encode`], so every value satisfies the character-set
//!    invariant by construction.
//!
//! 4. **Structured errors.** [`ValidationError`] is built with `thiserror`.
//!    The slug codec never fails; drafts, label parsing and timestamp
//!    parsing fail with a variant naming the offending field.

pub mod domain;
pub mod draft;
pub mod error;
pub mod identity;
pub mod record;
pub mod salary;
pub mod slug;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use domain::{Category, ExperienceLevel, JobType, Location};
pub use draft::{JobDraft, PostDraft};
pub use error::ValidationError;
pub use identity::{JobId, PostId};
pub use record::{BlogPost, JobPosting, LISTING_TTL_DAYS};
pub use salary::{format_salary, DEFAULT_SALARY_UNIT};
pub use slug::Slug;
pub use temporal::Timestamp;
