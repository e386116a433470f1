use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Double;

use crate::db::DbPool;
use crate::domain::client::Client;
use crate::repository::{ClientReader, errors::RepositoryResult};

/// Diesel implementation of [`ClientReader`].
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ClientReader for DieselRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;

        // total_spent is stored as decimal text to keep its exact rendering;
        // the cast makes the ordering numeric instead of lexicographic.
        let items = clients::table
            .order((
                sql::<Double>("CAST(total_spent AS REAL)").desc(),
                clients::id.asc(),
            ))
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Client>>();

        Ok(items)
    }
}
