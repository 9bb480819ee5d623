//! Submit posting use case

use crate::domain::posting::{JobPosting, PostingDraft};
use crate::error::{JobdeskError, Result};
use crate::infrastructure::{JobStore, JsonFileStore};
use chrono::Local;

/// Service for submitting new postings
pub struct SubmitService {
    store: JsonFileStore,
}

impl SubmitService {
    /// Create a new submit service
    pub fn new(store: JsonFileStore) -> Self {
        SubmitService { store }
    }

    /// Validate a draft, stamp it, and append + persist it
    ///
    /// On validation failure nothing is appended and nothing is written to
    /// disk. Ids are assigned as collection length + 1; postings are never
    /// deleted, so this stays unique.
    pub fn execute(&mut self, draft: PostingDraft) -> Result<JobPosting> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(JobdeskError::Validation(missing));
        }

        let id = self.store.postings().len() as u32 + 1;
        let date_posted = Local::now().format("%Y-%m-%d").to_string();
        let posting = draft.into_posting(id, date_posted);

        self.store.append(posting.clone());
        self.store.persist()?;

        Ok(posting)
    }
}
