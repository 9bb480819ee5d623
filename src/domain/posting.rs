//! Job posting model and submission drafts

use serde::{Deserialize, Serialize};

/// Salary text used when a submission leaves the field empty
pub const DEFAULT_SALARY: &str = "Not specified";

/// One job listing record
///
/// Field names double as the keys in the JSON store file, so renaming a
/// field here changes the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub requirements: String,
    /// ISO 8601 calendar date (YYYY-MM-DD); kept as a string so that
    /// lexicographic comparison stays equivalent to chronological order
    pub date_posted: String,
    pub contact_email: String,
}

/// A proposed posting as collected from the user, before validation
///
/// Carries the six required text fields plus the optional salary; id and
/// date_posted are assigned at submission time.
#[derive(Debug, Clone, Default)]
pub struct PostingDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub requirements: String,
    pub contact_email: String,
}

impl PostingDraft {
    /// Names of required fields that are missing or blank
    pub fn missing_fields(&self) -> Vec<String> {
        let required = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("description", &self.description),
            ("requirements", &self.requirements),
            ("contact_email", &self.contact_email),
        ];

        required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Build the final posting from this draft with an assigned id and date
    ///
    /// An empty salary falls back to [`DEFAULT_SALARY`].
    pub fn into_posting(self, id: u32, date_posted: String) -> JobPosting {
        let salary = if self.salary.trim().is_empty() {
            DEFAULT_SALARY.to_string()
        } else {
            self.salary
        };

        JobPosting {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            salary,
            description: self.description,
            requirements: self.requirements,
            date_posted,
            contact_email: self.contact_email,
        }
    }
}

/// The fixed sample postings used when no store file exists yet
pub fn seed_postings() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: 1,
            title: "Python Developer".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            salary: "$120,000 - $150,000".to_string(),
            description: "Looking for an experienced Python developer with knowledge of web frameworks.".to_string(),
            requirements: "5+ years of Python experience, Django/Flask, SQL".to_string(),
            date_posted: "2025-03-01".to_string(),
            contact_email: "jobs@techsolutions.com".to_string(),
        },
        JobPosting {
            id: 2,
            title: "Data Scientist".to_string(),
            company: "Data Insights Co.".to_string(),
            location: "Remote".to_string(),
            salary: "$130,000 - $160,000".to_string(),
            description: "Join our team to build machine learning models and analyze large datasets.".to_string(),
            requirements: "ML experience, Python, SQL, Statistics background".to_string(),
            date_posted: "2025-03-05".to_string(),
            contact_email: "careers@datainsights.com".to_string(),
        },
        JobPosting {
            id: 3,
            title: "Frontend Developer".to_string(),
            company: "WebUI Experts".to_string(),
            location: "New York, NY".to_string(),
            salary: "$110,000 - $140,000".to_string(),
            description: "Create responsive and interactive user interfaces for our clients.".to_string(),
            requirements: "React, JavaScript, HTML/CSS, 3+ years experience".to_string(),
            date_posted: "2025-03-08".to_string(),
            contact_email: "hr@webuiexperts.com".to_string(),
        },
    ]
}
