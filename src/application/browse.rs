//! Browse postings use case

use crate::domain::posting::JobPosting;
use crate::domain::query::{query, SortKey};
use crate::infrastructure::{JobStore, JsonFileStore};

/// Service for browsing the posting collection
pub struct BrowseService {
    store: JsonFileStore,
}

impl BrowseService {
    /// Create a new browse service
    pub fn new(store: JsonFileStore) -> Self {
        BrowseService { store }
    }

    /// Run a query over the current collection snapshot
    pub fn execute(
        &self,
        search_term: &str,
        location_filter: &str,
        sort_key: SortKey,
    ) -> Vec<JobPosting> {
        query(self.store.postings(), search_term, location_filter, sort_key)
    }
}
