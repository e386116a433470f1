use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::Client as DomainClient;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub status: String,
    pub total_orders: i32,
    pub total_spent: String,
    pub registration_date: Option<NaiveDateTime>,
    pub last_order_date: Option<NaiveDateTime>,
}

impl From<Client> for DomainClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            full_name: client.full_name,
            email: client.email,
            phone: client.phone,
            company: client.company,
            status: client.status,
            total_orders: client.total_orders,
            total_spent: client.total_spent,
            registration_date: client.registration_date,
            last_order_date: client.last_order_date,
        }
    }
}
