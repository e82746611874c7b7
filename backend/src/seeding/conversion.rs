//! Conversions from seed-file records into domain payloads.
//!
//! Seed records keep their file id, so every conversion carries `id` over.

use seed_data::{OfferSeed, OrderSeed, UserSeed};

use crate::domain::{Offer, Order, RecordId, RecordPayload, User};

impl From<UserSeed> for RecordPayload<User> {
    fn from(seed: UserSeed) -> Self {
        Self {
            id: seed.id.map(RecordId::new),
            fields: User {
                first_name: seed.first_name,
                last_name: seed.last_name,
                age: seed.age,
                email: seed.email,
                role: seed.role,
                phone: seed.phone,
            },
        }
    }
}

impl From<OrderSeed> for RecordPayload<Order> {
    fn from(seed: OrderSeed) -> Self {
        Self {
            id: seed.id.map(RecordId::new),
            fields: Order {
                name: seed.name,
                description: seed.description,
                start_date: seed.start_date,
                end_date: seed.end_date,
                address: seed.address,
                price: seed.price,
                customer_id: seed.customer_id.map(RecordId::new),
                executor_id: seed.executor_id.map(RecordId::new),
            },
        }
    }
}

impl From<OfferSeed> for RecordPayload<Offer> {
    fn from(seed: OfferSeed) -> Self {
        Self {
            id: seed.id.map(RecordId::new),
            fields: Offer {
                order_id: seed.order_id.map(RecordId::new),
                executor_id: seed.executor_id.map(RecordId::new),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn order_seed_keeps_id_and_references() {
        let payload = RecordPayload::<Order>::from(OrderSeed {
            id: Some(4),
            name: Some("Fence".to_owned()),
            customer_id: Some(1),
            executor_id: Some(2),
            ..OrderSeed::default()
        });

        assert_eq!(payload.id, Some(RecordId::new(4)));
        assert_eq!(payload.fields.name.as_deref(), Some("Fence"));
        assert_eq!(payload.fields.customer_id, Some(RecordId::new(1)));
        assert_eq!(payload.fields.executor_id, Some(RecordId::new(2)));
        assert_eq!(payload.fields.price, None);
    }

    #[rstest]
    fn seed_without_id_leaves_assignment_to_the_store() {
        let payload = RecordPayload::<Offer>::from(OfferSeed {
            id: None,
            order_id: Some(3),
            executor_id: None,
        });
        assert_eq!(payload.id, None);
        assert_eq!(payload.fields.order_id, Some(RecordId::new(3)));
    }

    #[rstest]
    fn user_seed_maps_every_column() {
        let payload = RecordPayload::<User>::from(UserSeed {
            id: Some(1),
            first_name: Some("Ada".to_owned()),
            last_name: Some("Lovelace".to_owned()),
            age: Some(36),
            email: Some("ada@example.com".to_owned()),
            role: Some("customer".to_owned()),
            phone: Some("+44".to_owned()),
        });
        assert_eq!(
            payload.fields,
            User {
                first_name: Some("Ada".to_owned()),
                last_name: Some("Lovelace".to_owned()),
                age: Some(36),
                email: Some("ada@example.com".to_owned()),
                role: Some("customer".to_owned()),
                phone: Some("+44".to_owned()),
            }
        );
    }
}
