use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use clientbase::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database in a temp directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("non-utf8 temp path"))
            .expect("failed to build pool");
        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[derive(Insertable)]
#[diesel(table_name = clientbase::schema::clients)]
pub struct SeedClient<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub company: Option<&'a str>,
    pub status: &'a str,
    pub total_orders: i32,
    pub total_spent: &'a str,
    pub registration_date: Option<NaiveDateTime>,
    pub last_order_date: Option<NaiveDateTime>,
}

impl<'a> SeedClient<'a> {
    pub fn new(full_name: &'a str, total_spent: &'a str) -> Self {
        Self {
            full_name,
            email: "client@example.com",
            phone: "+1-555-0100",
            company: None,
            status: "active",
            total_orders: 0,
            total_spent,
            registration_date: None,
            last_order_date: None,
        }
    }
}

pub fn seed_clients(pool: &DbPool, rows: Vec<SeedClient>) {
    use clientbase::schema::clients;

    let mut conn = pool.get().expect("failed to get connection");
    diesel::insert_into(clients::table)
        .values(&rows)
        .execute(&mut conn)
        .expect("failed to seed clients");
}
