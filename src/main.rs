use clap::Parser;
use jobdesk::application::{list_locations, BrowseService, SubmitService};
use jobdesk::cli::{format_location_list, format_posting_list, Cli, Commands};
use jobdesk::domain::posting::PostingDraft;
use jobdesk::domain::query::SortKey;
use jobdesk::error::JobdeskError;
use jobdesk::infrastructure::{JobStore, JsonFileStore};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JobdeskError> {
    let store = JsonFileStore::load(&cli.file)?;

    match cli.command {
        Commands::Browse {
            search,
            location,
            sort,
        } => {
            let sort_key = SortKey::from_str(&sort).map_err(JobdeskError::InvalidSortKey)?;
            let service = BrowseService::new(store);
            let results = service.execute(&search, &location, sort_key);
            print!("{}", format_posting_list(&results));
            Ok(())
        }
        Commands::Post {
            title,
            company,
            location,
            salary,
            description,
            requirements,
            email,
        } => {
            let draft = PostingDraft {
                title,
                company,
                location,
                salary,
                description,
                requirements,
                contact_email: email,
            };

            let mut service = SubmitService::new(store);
            let posting = service.execute(draft)?;
            println!("Job posted successfully! (id: {})", posting.id);
            Ok(())
        }
        Commands::Locations => {
            let locations = list_locations(store.postings());
            print!("{}", format_location_list(&locations));
            Ok(())
        }
        Commands::Dump => {
            println!("{}", store.to_json()?);
            Ok(())
        }
    }
}
