//! Application layer - Use cases and orchestration

pub mod browse;
pub mod locations;
pub mod submit;

pub use browse::BrowseService;
pub use locations::list_locations;
pub use submit::SubmitService;
