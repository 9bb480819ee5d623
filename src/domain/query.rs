//! Posting query engine: keyword search, location filter, sorting
//!
//! Queries are pure: they take a snapshot of the collection and produce a
//! new filtered and ordered sequence without mutating the input.
//!
//! # Examples
//!
//! ```
//! use jobdesk::domain::posting::seed_postings;
//! use jobdesk::domain::query::{query, SortKey, ALL_LOCATIONS};
//!
//! let postings = seed_postings();
//! let results = query(&postings, "python", ALL_LOCATIONS, SortKey::NewestFirst);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].title, "Python Developer");
//! ```

use crate::domain::posting::JobPosting;
use std::fmt;
use std::str::FromStr;

/// Location filter sentinel meaning "no filtering"
pub const ALL_LOCATIONS: &str = "All Locations";

/// Ordering applied to query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending by date_posted
    #[default]
    NewestFirst,
    /// Ascending by date_posted
    OldestFirst,
    /// Ascending by company name (case-sensitive)
    CompanyAz,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" | "newest first" => Ok(SortKey::NewestFirst),
            "oldest" | "oldest first" => Ok(SortKey::OldestFirst),
            "company" | "company a-z" => Ok(SortKey::CompanyAz),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::NewestFirst => write!(f, "Newest First"),
            SortKey::OldestFirst => write!(f, "Oldest First"),
            SortKey::CompanyAz => write!(f, "Company A-Z"),
        }
    }
}

/// Filter and order a snapshot of the collection
///
/// An empty search term matches everything; otherwise a posting matches if
/// the term appears case-insensitively in its title, description, or
/// company. The location filter is exact equality unless it is the
/// [`ALL_LOCATIONS`] sentinel. Sorts are stable, so postings that compare
/// equal keep their insertion order.
pub fn query(
    postings: &[JobPosting],
    search_term: &str,
    location_filter: &str,
    sort_key: SortKey,
) -> Vec<JobPosting> {
    let term = search_term.to_lowercase();

    let mut results: Vec<JobPosting> = postings
        .iter()
        .filter(|posting| term.is_empty() || matches_term(posting, &term))
        .filter(|posting| location_filter == ALL_LOCATIONS || posting.location == location_filter)
        .cloned()
        .collect();

    match sort_key {
        SortKey::NewestFirst => results.sort_by(|a, b| b.date_posted.cmp(&a.date_posted)),
        SortKey::OldestFirst => results.sort_by(|a, b| a.date_posted.cmp(&b.date_posted)),
        SortKey::CompanyAz => results.sort_by(|a, b| a.company.cmp(&b.company)),
    }

    results
}

/// Case-insensitive substring match over title, description, and company
///
/// `term` must already be lowercased.
fn matches_term(posting: &JobPosting, term: &str) -> bool {
    posting.title.to_lowercase().contains(term)
        || posting.description.to_lowercase().contains(term)
        || posting.company.to_lowercase().contains(term)
}
