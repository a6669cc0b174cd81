//! # jobboard-filter — Filter Predicate Engine
//!
//! Given a collection already fetched from the Gateway and a criteria object
//! built from UI form state, returns the matching subsequence in its
//! original order. Nothing here sorts, fetches or caches.
//!
//! ## Semantics
//!
//! - Every criterion is optional. An absent, empty or default criterion
//!   imposes no constraint.
//! - Active criteria combine with AND.
//! - Free-text search is a case-insensitive substring test, OR across the
//!   configured text fields of the record.
//! - Categorical criteria use exact equality; job type is a multi-select
//!   where an empty selection means "any".
//! - The salary range never excludes a record that has no salary data.
//!
//! All operations are pure and synchronous. They can be called on every
//! keystroke, from any number of threads, without coordination.
//!
//! ## Modules
//!
//! - [`criteria`]: the [`Criteria`] trait, combinators, building blocks.
//! - [`search`]: [`Searchable`] records and case-insensitive [`TextSearch`].
//! - [`jobs`]: [`JobCriteria`] for job postings.
//! - [`posts`]: [`PostCriteria`] and slug lookup for blog posts.
//! - [`engine`]: the stable [`filter`] operation and its variants.

pub mod criteria;
pub mod engine;
pub mod jobs;
pub mod posts;
pub mod search;

pub use criteria::{And, Criteria, OneOf, SalaryRange, Where};
pub use engine::{filter, filter_opt, filter_refs, retain};
pub use jobs::{find_job_by_id, JobCriteria};
pub use posts::{find_post_by_slug, PostCriteria};
pub use search::{JobField, PostField, SearchField, Searchable, TextSearch};
