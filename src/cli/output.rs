//! Output formatting utilities

use crate::domain::posting::JobPosting;

/// Format query results for display
pub fn format_posting_list(postings: &[JobPosting]) -> String {
    let mut output = format!("Found {} jobs\n", postings.len());

    for posting in postings {
        output.push('\n');
        output.push_str(&format_posting(posting));
    }

    output
}

/// Format one posting as a block of labeled lines
pub fn format_posting(posting: &JobPosting) -> String {
    let mut output = format!(
        "{} at {} - {}\n",
        posting.title, posting.company, posting.location
    );
    output.push_str(&format!("  Salary:       {}\n", posting.salary));
    output.push_str(&format!("  Description:  {}\n", posting.description));
    output.push_str(&format!("  Requirements: {}\n", posting.requirements));
    output.push_str(&format!("  Posted:       {}\n", posting.date_posted));
    output.push_str(&format!("  Contact:      {}\n", posting.contact_email));
    output
}

/// Format the location list for display
pub fn format_location_list(locations: &[String]) -> String {
    let mut output = String::new();
    for location in locations {
        output.push_str(location);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::posting::seed_postings;

    #[test]
    fn test_format_empty_list() {
        let output = format_posting_list(&[]);
        assert_eq!(output, "Found 0 jobs\n");
    }

    #[test]
    fn test_format_posting_list_header() {
        let output = format_posting_list(&seed_postings());
        assert!(output.starts_with("Found 3 jobs\n"));
    }

    #[test]
    fn test_format_posting_fields() {
        let postings = seed_postings();
        let output = format_posting(&postings[0]);

        assert!(output.contains("Python Developer at Tech Solutions Inc. - San Francisco, CA"));
        assert!(output.contains("Salary:       $120,000 - $150,000"));
        assert!(output.contains("Posted:       2025-03-01"));
        assert!(output.contains("Contact:      jobs@techsolutions.com"));
    }

    #[test]
    fn test_format_location_list() {
        let locations = vec!["All Locations".to_string(), "Remote".to_string()];
        let output = format_location_list(&locations);
        assert_eq!(output, "All Locations\nRemote\n");
    }
}
