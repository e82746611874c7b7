//! Seed record types, one per collection.
//!
//! Every field is optional because the stored columns are nullable. Unknown
//! keys are rejected so a typo in a seed file fails startup instead of
//! silently dropping data.

use serde::{Deserialize, Serialize};

/// A record type that can appear in a seed file.
pub trait SeedRecord {
    /// Collection name used in error messages (`users`, `orders`, `offers`).
    const KIND: &'static str;

    /// Identifier supplied by the seed file, if any.
    fn id(&self) -> Option<i64>;
}

/// A user row as written in `users.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSeed {
    /// Identifier to keep; assigned by the store when absent.
    #[serde(default)]
    pub id: Option<i64>,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Age in years.
    #[serde(default)]
    pub age: Option<i32>,
    /// Contact e-mail address.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-text role, such as `customer` or `executor`.
    #[serde(default)]
    pub role: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl SeedRecord for UserSeed {
    const KIND: &'static str = "users";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// An order row as written in `orders.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderSeed {
    /// Identifier to keep; assigned by the store when absent.
    #[serde(default)]
    pub id: Option<i64>,
    /// Short order title.
    #[serde(default)]
    pub name: Option<String>,
    /// Order description.
    #[serde(default)]
    pub description: Option<String>,
    /// Start date in whatever integer encoding the producer chose.
    #[serde(default)]
    pub start_date: Option<i64>,
    /// End date in whatever integer encoding the producer chose.
    #[serde(default)]
    pub end_date: Option<i64>,
    /// Delivery or work address.
    #[serde(default)]
    pub address: Option<String>,
    /// Agreed price.
    #[serde(default)]
    pub price: Option<i64>,
    /// User placing the order.
    #[serde(default)]
    pub customer_id: Option<i64>,
    /// User executing the order.
    #[serde(default)]
    pub executor_id: Option<i64>,
}

impl SeedRecord for OrderSeed {
    const KIND: &'static str = "orders";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// An offer row as written in `offers.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfferSeed {
    /// Identifier to keep; assigned by the store when absent.
    #[serde(default)]
    pub id: Option<i64>,
    /// Order the offer is made for.
    #[serde(default)]
    pub order_id: Option<i64>,
    /// User proposing to execute the order.
    #[serde(default)]
    pub executor_id: Option<i64>,
}

impl SeedRecord for OfferSeed {
    const KIND: &'static str = "offers";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn user_seed_accepts_missing_and_null_fields() {
        let seed: UserSeed =
            serde_json::from_str(r#"{"first_name": "Ada", "age": null}"#).expect("valid user");
        assert_eq!(seed.id(), None);
        assert_eq!(seed.first_name.as_deref(), Some("Ada"));
        assert_eq!(seed.age, None);
        assert_eq!(seed.phone, None);
    }

    #[rstest]
    fn order_seed_keeps_large_dates() {
        let seed: OrderSeed = serde_json::from_str(
            r#"{"id": 3, "start_date": 1700000000000, "end_date": 1700086400000}"#,
        )
        .expect("valid order");
        assert_eq!(seed.id(), Some(3));
        assert_eq!(seed.start_date, Some(1_700_000_000_000));
    }

    #[rstest]
    #[case(r#"{"id": 1, "order": 2}"#)]
    #[case(r#"{"id": 1, "executor": 2}"#)]
    fn offer_seed_rejects_unknown_fields(#[case] json: &str) {
        assert!(serde_json::from_str::<OfferSeed>(json).is_err());
    }

    #[rstest]
    fn kinds_name_their_collections() {
        assert_eq!(UserSeed::KIND, "users");
        assert_eq!(OrderSeed::KIND, "orders");
        assert_eq!(OfferSeed::KIND, "offers");
    }
}
