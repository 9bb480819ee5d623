//! Error types for jobdesk

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the jobdesk application
#[derive(Debug, Error)]
pub enum JobdeskError {
    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Malformed job store file: {0}")]
    MalformedStore(PathBuf, String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl JobdeskError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JobdeskError::Validation(_) => 2,
            JobdeskError::MalformedStore(_, _) => 3,
            JobdeskError::InvalidSortKey(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JobdeskError::Validation(fields) => {
                format!(
                    "Missing required fields: {}\n\n\
                    Suggestions:\n\
                    • Every field except --salary is required and must be non-empty\n\
                    • Required flags: --title, --company, --location, --description, --requirements, --email\n\
                    • Example: jobdesk post --title 'Rust Developer' --company 'Acme' \
                    --location 'Remote' --description '...' --requirements '...' --email 'jobs@acme.com'",
                    fields.join(", ")
                )
            }
            JobdeskError::MalformedStore(path, reason) => {
                format!(
                    "Malformed job store file: {}\n{}\n\n\
                    Suggestions:\n\
                    • The file exists but is not a valid array of job postings\n\
                    • Move or rename the file to start over with the sample postings\n\
                    • Point at a different file with --file <PATH>",
                    path.display(),
                    reason
                )
            }
            JobdeskError::InvalidSortKey(key) => {
                format!(
                    "Invalid sort key: '{}'\n\n\
                    Valid sort keys:\n\
                    • newest  - Newest First (most recent date_posted first)\n\
                    • oldest  - Oldest First\n\
                    • company - Company A-Z",
                    key
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JobdeskError
pub type Result<T> = std::result::Result<T, JobdeskError>;
