//! Wire shape of the client listing.

use serde::Serialize;

use crate::domain::client::Client;

/// One element of the `GET /clients` response array.
///
/// Projects eight of the ten stored columns; `registration_date` and
/// `last_order_date` are fetched but not exposed. Field order here is the
/// serialization order on the wire.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClientResponse {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub status: String,
    pub total_orders: i32,
    pub total_spent: String,
}

impl From<Client> for ClientResponse {
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_client() -> Client {
        Client {
            id: 1,
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1-555-0100".to_string(),
            company: Some("Acme".to_string()),
            status: "active".to_string(),
            total_orders: 12,
            total_spent: "4530.00".to_string(),
            registration_date: Some(Utc::now().naive_utc()),
            last_order_date: Some(Utc::now().naive_utc()),
        }
    }

    #[test]
    fn serializes_in_wire_order_with_string_total_spent() {
        let response: ClientResponse = sample_client().into();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"full_name":"Jane Doe","email":"jane@example.com","phone":"+1-555-0100","company":"Acme","status":"active","total_orders":12,"total_spent":"4530.00"}"#
        );
    }

    #[test]
    fn drops_date_columns() {
        let response: ClientResponse = sample_client().into();
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 8);
        assert!(!object.contains_key("registration_date"));
        assert!(!object.contains_key("last_order_date"));
    }

    #[test]
    fn null_company_stays_null() {
        let mut client = sample_client();
        client.company = None;
        let response: ClientResponse = client.into();
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["company"].is_null());
    }
}
