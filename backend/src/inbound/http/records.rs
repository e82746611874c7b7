//! Record API handlers, generic over the entity.
//!
//! ```text
//! GET    /{collection}        -> [record, ...]
//! POST   /{collection}        -> "<Label> has been added"
//! GET    /{collection}/{id}   -> [record] or []
//! PUT    /{collection}/{id}   -> "<update confirmation>"
//! DELETE /{collection}/{id}   -> "<Label> has been deleted"
//! ```
//!
//! Mutating endpoints always answer 200 with the entity's confirmation
//! string. Bodies are taken as raw bytes so an undecodable body is logged
//! and confirmed like any other absorbed failure instead of being rejected
//! by an extractor.

use actix_web::{HttpResponse, web};
use tracing::warn;

use crate::domain::{Entity, RecordId, RecordPayload, RecordService};
use crate::inbound::http::ApiResult;

fn confirmation(message: &'static str) -> HttpResponse {
    HttpResponse::Ok().json(message)
}

fn decode_body<E: Entity>(body: &[u8], id: Option<RecordId>) -> Option<RecordPayload<E>> {
    match RecordPayload::<E>::from_json_slice(body) {
        Ok(payload) => Some(payload),
        Err(error) => {
            warn!(
                collection = E::COLLECTION,
                id = ?id.map(RecordId::get),
                %error,
                "undecodable {} body ignored",
                E::LABEL
            );
            None
        }
    }
}

/// List every record of `E`, ordered by identifier.
pub async fn list_records<E: Entity>(
    service: web::Data<RecordService<E>>,
) -> ApiResult<HttpResponse> {
    let records = service.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Return the record with the path id as a one-element array, or `[]`.
pub async fn get_record<E: Entity>(
    service: web::Data<RecordService<E>>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = RecordId::new(path.into_inner());
    let records = service.find(id).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Insert a record built from the body. An `id` in the body is kept.
pub async fn create_record<E: Entity>(
    service: web::Data<RecordService<E>>,
    body: web::Bytes,
) -> HttpResponse {
    if let Some(payload) = decode_body::<E>(&body, None) {
        service.create(payload).await;
    }
    confirmation(E::CONFIRMATIONS.added)
}

/// Overwrite every column of the record with the path id.
///
/// An `id` in the body is ignored: the record keeps its path id. A missing
/// record is not created.
pub async fn update_record<E: Entity>(
    service: web::Data<RecordService<E>>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> HttpResponse {
    let id = RecordId::new(path.into_inner());
    if let Some(payload) = decode_body::<E>(&body, Some(id)) {
        service.replace(id, payload.fields).await;
    }
    confirmation(E::CONFIRMATIONS.updated)
}

/// Delete the record with the path id if it exists.
pub async fn delete_record<E: Entity>(
    service: web::Data<RecordService<E>>,
    path: web::Path<i64>,
) -> HttpResponse {
    service.remove(RecordId::new(path.into_inner())).await;
    confirmation(E::CONFIRMATIONS.deleted)
}

/// Register the five record routes for `E` under `/{E::COLLECTION}`.
///
/// The matching `web::Data<RecordService<E>>` must be registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exchange_backend::domain::User;
/// use exchange_backend::inbound::http::records::configure_records;
///
/// let app = App::new().configure(configure_records::<User>);
/// ```
pub fn configure_records<E: Entity>(cfg: &mut web::ServiceConfig) {
    let collection = format!("/{}", E::COLLECTION);
    let member = format!("/{}/{{id}}", E::COLLECTION);
    cfg.service(
        web::resource(collection)
            .route(web::get().to(list_records::<E>))
            .route(web::post().to(create_record::<E>)),
    )
    .service(
        web::resource(member)
            .route(web::get().to(get_record::<E>))
            .route(web::put().to(update_record::<E>))
            .route(web::delete().to(delete_record::<E>)),
    );
}

#[cfg(test)]
mod tests {
    //! Handler behaviour over the real in-memory store.
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::User;
    use crate::outbound::persistence::{Database, DbConfig, DieselRecordRepository};
    use std::sync::Arc;

    async fn user_service() -> web::Data<RecordService<User>> {
        let database = Database::open(DbConfig::in_memory())
            .await
            .expect("in-memory database opens");
        web::Data::new(RecordService::new(Arc::new(
            DieselRecordRepository::<User>::new(database),
        )))
    }

    #[rstest]
    #[actix_web::test]
    async fn create_then_get_round_trips_through_handlers() {
        let app = test::init_service(
            App::new()
                .app_data(user_service().await)
                .configure(configure_records::<User>),
        )
        .await;

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/users")
                .set_payload(r#"{"first_name":"Ada","age":36}"#)
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::OK);
        let message: Value = test::read_body_json(created).await;
        assert_eq!(message, json!("User has been added"));

        let fetched: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/users/1").to_request(),
        )
        .await;
        assert_eq!(fetched[0]["first_name"], json!("Ada"));
        assert_eq!(fetched[0]["age"], json!(36));
    }

    #[rstest]
    #[actix_web::test]
    async fn non_integer_id_is_a_routing_miss() {
        let app = test::init_service(
            App::new()
                .app_data(user_service().await)
                .configure(configure_records::<User>),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/users/abc").to_request())
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case::post(test::TestRequest::post().uri("/users"), "User has been added")]
    #[case::put(test::TestRequest::put().uri("/users/1"), "Users info has been updated")]
    #[actix_web::test]
    async fn undecodable_bodies_are_confirmed(
        #[case] request: test::TestRequest,
        #[case] expected: &str,
    ) {
        let app = test::init_service(
            App::new()
                .app_data(user_service().await)
                .configure(configure_records::<User>),
        )
        .await;

        let res = test::call_service(&app, request.set_payload("{not json").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let message: Value = test::read_body_json(res).await;
        assert_eq!(message, json!(expected));
    }
}
