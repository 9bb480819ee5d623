//! Location listing use case

use crate::domain::posting::JobPosting;
use crate::domain::query::ALL_LOCATIONS;
use std::collections::BTreeSet;

/// Distinct posting locations for the filter control
///
/// The "All Locations" sentinel comes first, followed by the distinct
/// locations in ascending order.
pub fn list_locations(postings: &[JobPosting]) -> Vec<String> {
    let distinct: BTreeSet<&str> = postings.iter().map(|p| p.location.as_str()).collect();

    let mut locations = vec![ALL_LOCATIONS.to_string()];
    locations.extend(distinct.into_iter().map(String::from));
    locations
}
