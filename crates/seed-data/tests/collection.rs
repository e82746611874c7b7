//! Integration tests for seed collection parsing.
#![expect(clippy::expect_used, reason = "tests use expect for clearer failures")]

use rstest::rstest;
use seed_data::{OfferSeed, OrderSeed, SeedCollection, SeedError, UserSeed};

const USERS_JSON: &str = r#"[
    {"id": 1, "first_name": "Ada", "last_name": "Lovelace", "age": 36,
     "email": "ada@example.com", "role": "customer", "phone": "+44 20 0000"},
    {"id": 2, "first_name": "Grace", "last_name": "Hopper", "age": 85,
     "email": "grace@example.com", "role": "executor", "phone": "+1 202 0000"}
]"#;

#[rstest]
fn parses_users_in_file_order() {
    let users = SeedCollection::<UserSeed>::from_json(USERS_JSON).expect("valid users");

    let names: Vec<_> = users
        .records()
        .iter()
        .map(|u| u.first_name.clone().unwrap_or_default())
        .collect();
    assert_eq!(names, ["Ada", "Grace"]);
}

#[rstest]
fn empty_array_yields_empty_collection() {
    let orders = SeedCollection::<OrderSeed>::from_json("[]").expect("empty array");
    assert!(orders.is_empty());
    assert_eq!(orders.len(), 0);
}

#[rstest]
fn records_without_ids_are_accepted() {
    let offers = SeedCollection::<OfferSeed>::from_json(
        r#"[{"order_id": 1, "executor_id": 2}, {"order_id": 1, "executor_id": 3}]"#,
    )
    .expect("ids are optional");

    let records = offers.into_records();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|o| o.id.is_none()));
}

#[rstest]
#[case::not_json("not json")]
#[case::object_instead_of_array(r#"{"id": 1}"#)]
#[case::unknown_field(r#"[{"id": 1, "nickname": "ada"}]"#)]
#[case::wrong_type(r#"[{"id": "one"}]"#)]
fn malformed_documents_are_rejected(#[case] json: &str) {
    let err = SeedCollection::<UserSeed>::from_json(json).expect_err("should fail");
    assert!(
        matches!(err, SeedError::ParseError { kind: "users", .. }),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn duplicate_ids_are_rejected() {
    let err = SeedCollection::<OrderSeed>::from_json(
        r#"[{"id": 4, "name": "a"}, {"id": 5}, {"id": 4, "name": "b"}]"#,
    )
    .expect_err("duplicate id");
    assert_eq!(err, SeedError::DuplicateId { kind: "orders", id: 4 });
}
