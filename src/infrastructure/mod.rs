//! Infrastructure layer - Durable storage

pub mod store;

pub use store::{JobStore, JsonFileStore};
