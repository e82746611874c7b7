//! The three stored entities.
//!
//! Fields are optional and unvalidated in the payloads. The store requires an
//! order's name, description and address; every other column is nullable.
//! Reference columns hold plain
//! identifiers that are never dereferenced, so a dangling reference is a
//! valid value.

use serde::{Deserialize, Serialize};

use super::record::{Confirmations, Entity, RecordId};

/// A person who places or executes orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
    /// Contact e-mail address.
    pub email: Option<String>,
    /// Free-text role.
    pub role: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
}

impl Entity for User {
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "user";
    const CONFIRMATIONS: Confirmations = Confirmations {
        added: "User has been added",
        updated: "Users info has been updated",
        deleted: "User has been deleted",
    };
}

/// A piece of work placed by a customer.
///
/// `name`, `description` and `address` must be present for a write to be
/// stored. Their declared lengths of 15, 30 and 100 characters are not
/// enforced; longer values are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Short title.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Start date, stored as supplied.
    pub start_date: Option<i64>,
    /// End date, stored as supplied.
    pub end_date: Option<i64>,
    /// Work address.
    pub address: Option<String>,
    /// Agreed price.
    pub price: Option<i64>,
    /// User who placed the order.
    pub customer_id: Option<RecordId>,
    /// User executing the order.
    pub executor_id: Option<RecordId>,
}

impl Entity for Order {
    const COLLECTION: &'static str = "orders";
    const LABEL: &'static str = "order";
    const CONFIRMATIONS: Confirmations = Confirmations {
        added: "Order has been added",
        updated: "Order has been updated",
        deleted: "Order has been deleted",
    };
}

/// An executor's proposal to take on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offer {
    /// Order the offer is made for.
    pub order_id: Option<RecordId>,
    /// User proposing to execute the order.
    pub executor_id: Option<RecordId>,
}

impl Entity for Offer {
    const COLLECTION: &'static str = "offers";
    const LABEL: &'static str = "offer";
    const CONFIRMATIONS: Confirmations = Confirmations {
        added: "Offer has been added",
        updated: "Offer has been updated",
        deleted: "Offer has been deleted",
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Record, RecordPayload};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn user_record_serialises_in_column_order() {
        let record = Record::new(
            RecordId::new(1),
            User {
                first_name: Some("Zoë".to_owned()),
                age: Some(29),
                ..User::default()
            },
        );
        let text = serde_json::to_string(&record).expect("serialise");
        assert_eq!(
            text,
            r#"{"id":1,"first_name":"Zoë","last_name":null,"age":29,"email":null,"role":null,"phone":null}"#
        );
    }

    #[rstest]
    fn order_record_serialises_in_column_order() {
        let record = Record::new(
            RecordId::new(2),
            Order {
                name: Some("Paint".to_owned()),
                price: Some(5_000_000_000),
                customer_id: Some(RecordId::new(99)),
                ..Order::default()
            },
        );
        let value = serde_json::to_string(&record).expect("serialise");
        assert_eq!(
            value,
            concat!(
                r#"{"id":2,"name":"Paint","description":null,"start_date":null,"#,
                r#""end_date":null,"address":null,"price":5000000000,"#,
                r#""customer_id":99,"executor_id":null}"#
            )
        );
    }

    #[rstest]
    fn payload_splits_id_from_columns() {
        let payload: RecordPayload<Offer> =
            serde_json::from_value(json!({ "id": 7, "order_id": 1, "executor_id": 2 }))
                .expect("decode");
        assert_eq!(payload.id, Some(RecordId::new(7)));
        assert_eq!(
            payload.fields,
            Offer {
                order_id: Some(RecordId::new(1)),
                executor_id: Some(RecordId::new(2)),
            }
        );
    }

    #[rstest]
    fn payload_ignores_unknown_keys_and_nulls_missing_columns() {
        let payload = RecordPayload::<User>::from_json_slice(br#"{"first_name":"Ada","nick":"a"}"#)
            .expect("decode");
        assert_eq!(payload.id, None);
        assert_eq!(payload.fields.first_name.as_deref(), Some("Ada"));
        assert_eq!(payload.fields.last_name, None);
    }

    #[rstest]
    #[case::not_json(&b"first_name=Ada"[..])]
    #[case::array(&b"[1, 2]"[..])]
    #[case::wrong_type(&br#"{"age": "old"}"#[..])]
    #[case::empty(&b""[..])]
    fn payload_rejects_undecodable_bodies(#[case] body: &[u8]) {
        assert!(RecordPayload::<User>::from_json_slice(body).is_err());
    }

    #[rstest]
    fn collections_and_confirmations_are_fixed() {
        assert_eq!(User::COLLECTION, "users");
        assert_eq!(Order::COLLECTION, "orders");
        assert_eq!(Offer::COLLECTION, "offers");
        assert_eq!(User::CONFIRMATIONS.updated, "Users info has been updated");
        assert_eq!(Offer::CONFIRMATIONS.updated, "Offer has been updated");
    }
}
