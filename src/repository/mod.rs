use crate::domain::client::Client;
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;

pub use client::DieselRepository;

/// Read access to the `clients` relation. The listing is the only operation
/// this service performs against the store.
#[cfg_attr(test, mockall::automock)]
pub trait ClientReader {
    /// Returns every client, ordered by `total_spent` descending with `id`
    /// ascending as the tie-break.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}
