//! The client listing operation behind `GET /clients`.

use crate::dto::client::ClientResponse;
use crate::repository::ClientReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns the full client list shaped for the wire, sorted by total spend.
///
/// `repo` is `None` when no database URL was configured at startup; that case
/// reports [`ServiceError::NotConfigured`] without touching any pool.
pub fn list_clients<R>(repo: Option<&R>) -> ServiceResult<Vec<ClientResponse>>
where
    R: ClientReader + ?Sized,
{
    let repo = repo.ok_or(ServiceError::NotConfigured)?;

    let clients = repo.list_clients()?;

    Ok(clients.into_iter().map(Into::into).collect())
}
