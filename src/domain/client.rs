use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A client record as stored in the `clients` relation.
///
/// `total_spent` is kept as the stored decimal text rather than a float so the
/// monetary value survives serialization without precision loss.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
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
