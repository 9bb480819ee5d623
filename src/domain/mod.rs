//! Domain layer - Posting model and query logic

pub mod posting;
pub mod query;

pub use posting::{seed_postings, JobPosting, PostingDraft};
pub use query::{query, SortKey, ALL_LOCATIONS};
