//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match `migrations/` exactly. Reference columns
//! carry no foreign-key clause. Only the order text columns are `NOT NULL`.

diesel::table! {
    /// People who place or execute orders.
    users (id) {
        id -> BigInt,
        first_name -> Nullable<Text>,
        last_name -> Nullable<Text>,
        age -> Nullable<Integer>,
        email -> Nullable<Text>,
        role -> Nullable<Text>,
        phone -> Nullable<Text>,
    }
}

diesel::table! {
    /// Work placed by a customer.
    orders (id) {
        id -> BigInt,
        /// Declared as `VARCHAR(15)`; SQLite does not enforce the bound.
        name -> Text,
        /// Declared as `VARCHAR(30)`.
        description -> Text,
        start_date -> Nullable<BigInt>,
        end_date -> Nullable<BigInt>,
        /// Declared as `VARCHAR(100)`.
        address -> Text,
        price -> Nullable<BigInt>,
        /// References `users.id`, unenforced.
        customer_id -> Nullable<BigInt>,
        /// References `users.id`, unenforced.
        executor_id -> Nullable<BigInt>,
    }
}

diesel::table! {
    /// Executors' proposals for orders.
    offers (id) {
        id -> BigInt,
        /// References `orders.id`, unenforced.
        order_id -> Nullable<BigInt>,
        /// References `users.id`, unenforced.
        executor_id -> Nullable<BigInt>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(offers, orders, users);
