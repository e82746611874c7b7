//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Each entity has a read row, an insert row
//! whose `id` is optional, and a changeset covering every column but `id`.
//!
//! Order text columns are `NOT NULL`. An insert leaves a missing value out
//! and SQLite rejects the row; an order changeset cannot be built without
//! them.

use diesel::prelude::*;
use thiserror::Error;

use crate::domain::{Offer, Order, Record, RecordId, RecordPayload, User};

use super::schema::{offers, orders, users};

fn to_raw(id: Option<RecordId>) -> Option<i64> {
    id.map(RecordId::get)
}

/// A `NOT NULL` column had no value in a full-overwrite update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("NOT NULL constraint failed: {table}.{column}")]
pub(crate) struct MissingColumn {
    table: &'static str,
    column: &'static str,
}

fn required<'a>(value: Option<&'a str>, column: &'static str) -> Result<&'a str, MissingColumn> {
    value.ok_or(MissingColumn {
        table: "orders",
        column,
    })
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// Insertable struct for creating user records.
///
/// A `None` id is omitted from the statement so SQLite assigns one.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Option<i64>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub age: Option<i32>,
    pub email: Option<&'a str>,
    pub role: Option<&'a str>,
    pub phone: Option<&'a str>,
}

/// Full-overwrite changeset for user records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserChangeset<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub age: Option<i32>,
    pub email: Option<&'a str>,
    pub role: Option<&'a str>,
    pub phone: Option<&'a str>,
}

impl From<UserRow> for Record<User> {
    fn from(row: UserRow) -> Self {
        Self::new(
            RecordId::new(row.id),
            User {
                first_name: row.first_name,
                last_name: row.last_name,
                age: row.age,
                email: row.email,
                role: row.role,
                phone: row.phone,
            },
        )
    }
}

impl<'a> From<&'a RecordPayload<User>> for NewUserRow<'a> {
    fn from(payload: &'a RecordPayload<User>) -> Self {
        let user = &payload.fields;
        Self {
            id: to_raw(payload.id),
            first_name: user.first_name.as_deref(),
            last_name: user.last_name.as_deref(),
            age: user.age,
            email: user.email.as_deref(),
            role: user.role.as_deref(),
            phone: user.phone.as_deref(),
        }
    }
}

impl<'a> From<&'a User> for UserChangeset<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            first_name: user.first_name.as_deref(),
            last_name: user.last_name.as_deref(),
            age: user.age,
            email: user.email.as_deref(),
            role: user.role.as_deref(),
            phone: user.phone.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// Row struct for reading from the orders table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct OrderRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub address: String,
    pub price: Option<i64>,
    pub customer_id: Option<i64>,
    pub executor_id: Option<i64>,
}

/// Insertable struct for creating order records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub(crate) struct NewOrderRow<'a> {
    pub id: Option<i64>,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub address: Option<&'a str>,
    pub price: Option<i64>,
    pub customer_id: Option<i64>,
    pub executor_id: Option<i64>,
}

/// Full-overwrite changeset for order records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = orders)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct OrderChangeset<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub address: &'a str,
    pub price: Option<i64>,
    pub customer_id: Option<i64>,
    pub executor_id: Option<i64>,
}

impl From<OrderRow> for Record<Order> {
    fn from(row: OrderRow) -> Self {
        Self::new(
            RecordId::new(row.id),
            Order {
                name: Some(row.name),
                description: Some(row.description),
                start_date: row.start_date,
                end_date: row.end_date,
                address: Some(row.address),
                price: row.price,
                customer_id: row.customer_id.map(RecordId::new),
                executor_id: row.executor_id.map(RecordId::new),
            },
        )
    }
}

impl<'a> From<&'a RecordPayload<Order>> for NewOrderRow<'a> {
    fn from(payload: &'a RecordPayload<Order>) -> Self {
        let order = &payload.fields;
        Self {
            id: to_raw(payload.id),
            name: order.name.as_deref(),
            description: order.description.as_deref(),
            start_date: order.start_date,
            end_date: order.end_date,
            address: order.address.as_deref(),
            price: order.price,
            customer_id: to_raw(order.customer_id),
            executor_id: to_raw(order.executor_id),
        }
    }
}

impl<'a> TryFrom<&'a Order> for OrderChangeset<'a> {
    type Error = MissingColumn;

    fn try_from(order: &'a Order) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(order.name.as_deref(), "name")?,
            description: required(order.description.as_deref(), "description")?,
            start_date: order.start_date,
            end_date: order.end_date,
            address: required(order.address.as_deref(), "address")?,
            price: order.price,
            customer_id: to_raw(order.customer_id),
            executor_id: to_raw(order.executor_id),
        })
    }
}

// ---------------------------------------------------------------------------
// Offers
// ---------------------------------------------------------------------------

/// Row struct for reading from the offers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = offers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct OfferRow {
    pub id: i64,
    pub order_id: Option<i64>,
    pub executor_id: Option<i64>,
}

/// Insertable struct for creating offer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = offers)]
pub(crate) struct NewOfferRow {
    pub id: Option<i64>,
    pub order_id: Option<i64>,
    pub executor_id: Option<i64>,
}

/// Full-overwrite changeset for offer records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = offers)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct OfferChangeset {
    pub order_id: Option<i64>,
    pub executor_id: Option<i64>,
}

impl From<OfferRow> for Record<Offer> {
    fn from(row: OfferRow) -> Self {
        Self::new(
            RecordId::new(row.id),
            Offer {
                order_id: row.order_id.map(RecordId::new),
                executor_id: row.executor_id.map(RecordId::new),
            },
        )
    }
}

impl From<&RecordPayload<Offer>> for NewOfferRow {
    fn from(payload: &RecordPayload<Offer>) -> Self {
        Self {
            id: to_raw(payload.id),
            order_id: to_raw(payload.fields.order_id),
            executor_id: to_raw(payload.fields.executor_id),
        }
    }
}

impl From<&Offer> for OfferChangeset {
    fn from(offer: &Offer) -> Self {
        Self {
            order_id: to_raw(offer.order_id),
            executor_id: to_raw(offer.executor_id),
        }
    }
}
