//! Resolves player lookups against a remote sports-data service.
//!
//! Identical lookups that overlap in time share one outbound fetch, and every
//! validated result is kept in a [`cache::ResultCache`].

pub mod api_client;
pub mod cache;
pub mod client;
pub mod coordinator;
pub mod error;
pub mod query_key;
pub mod resolver;
pub mod settings;
pub mod types;
pub mod validator;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
pub use resolver::PlayerResolver;
pub use types::{PlayerQuery, PlayerRecord};
