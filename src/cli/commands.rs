//! CLI command definitions

use crate::domain::query::ALL_LOCATIONS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jobdesk")]
#[command(about = "Flat-file job listing board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Job store file (created on first submission)
    #[arg(short, long, global = true, default_value = "jobs.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse postings with optional search, location filter, and sort
    Browse {
        /// Keyword to search for in title, description, or company
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact location to filter by
        #[arg(short, long, default_value = ALL_LOCATIONS)]
        location: String,

        /// Sort key (newest, oldest, company)
        #[arg(long, default_value = "newest")]
        sort: String,
    },

    /// Submit a new posting
    Post {
        /// Job title
        #[arg(long)]
        title: String,

        /// Company name
        #[arg(long)]
        company: String,

        /// Location
        #[arg(long)]
        location: String,

        /// Salary range (optional)
        #[arg(long, default_value = "")]
        salary: String,

        /// Job description
        #[arg(long)]
        description: String,

        /// Requirements
        #[arg(long)]
        requirements: String,

        /// Contact email
        #[arg(long)]
        email: String,
    },

    /// List the distinct locations in the collection
    Locations,

    /// Print the raw collection as JSON
    Dump,
}
