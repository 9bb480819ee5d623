//! jobdesk - Flat-file job listing board
//!
//! A command-line job board that keeps its postings in a single JSON file,
//! with keyword search, location filtering, and date/company sorting.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JobdeskError;
