//! Flat-file job store

use crate::domain::posting::{seed_postings, JobPosting};
use crate::error::{JobdeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract store for the posting collection
pub trait JobStore {
    /// Snapshot of the collection in insertion order
    fn postings(&self) -> &[JobPosting];

    /// Add one posting to the end of the collection
    fn append(&mut self, posting: JobPosting);

    /// Write the entire collection back to durable storage
    fn persist(&self) -> Result<()>;
}

/// JSON file implementation of JobStore
///
/// The whole collection lives in memory; `persist` rewrites the full file
/// on every call. Single-writer assumption, no locking.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    postings: Vec<JobPosting>,
}

impl JsonFileStore {
    /// Load the collection from the given file
    ///
    /// A missing file is not an error: the store starts from the fixed
    /// sample postings and only touches disk on the next `persist`. A file
    /// that exists but cannot be parsed as a posting array is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(JsonFileStore {
                path: path.to_path_buf(),
                postings: seed_postings(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let postings: Vec<JobPosting> = serde_json::from_str(&contents)
            .map_err(|e| JobdeskError::MalformedStore(path.to_path_buf(), e.to_string()))?;

        Ok(JsonFileStore {
            path: path.to_path_buf(),
            postings,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the collection as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.postings)?)
    }
}

impl JobStore for JsonFileStore {
    fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    fn append(&mut self, posting: JobPosting) {
        self.postings.push(posting);
    }

    fn persist(&self) -> Result<()> {
        let contents = self.to_json()?;
        fs::write(&self.path, contents).map_err(JobdeskError::Io)
    }
}
