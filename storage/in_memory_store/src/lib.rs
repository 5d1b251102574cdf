mod repository;
pub mod seed;
pub mod store;

pub use seed::{SeedData, SeedError};
pub use store::InMemoryStore;
