//! Application assembly.
//!
//! Builds the Actix `App` from explicitly constructed dependencies. The
//! server binary calls [`build_app`] once per worker; tests call it directly
//! with `actix_web::test::init_service`.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, web};

use crate::domain::ports::RecordStores;
use crate::domain::{Offer, Order, RecordService, User};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::records::configure_records;
use crate::middleware::Trace;

/// Shared state handed to every worker's `App`.
///
/// All fields are `web::Data`, so cloning shares the same services.
#[derive(Clone)]
pub struct AppDependencies {
    /// Probe state flipped by the server once startup completes.
    pub health_state: web::Data<HealthState>,
    /// User record operations.
    pub users: web::Data<RecordService<User>>,
    /// Order record operations.
    pub orders: web::Data<RecordService<Order>>,
    /// Offer record operations.
    pub offers: web::Data<RecordService<Offer>>,
}

impl AppDependencies {
    /// Wrap each repository in `stores` in its record service.
    pub fn new(health_state: web::Data<HealthState>, stores: &RecordStores) -> Self {
        Self {
            health_state,
            users: web::Data::new(RecordService::new(stores.users.clone())),
            orders: web::Data::new(RecordService::new(stores.orders.clone())),
            offers: web::Data::new(RecordService::new(stores.offers.clone())),
        }
    }
}

/// Build the application: record routes for all three entities, health
/// probes, trace identifiers and trailing-slash normalisation.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        users,
        orders,
        offers,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(users)
        .app_data(orders)
        .app_data(offers)
        .wrap(Trace)
        .wrap(NormalizePath::trim())
        .configure(configure_records::<User>)
        .configure(configure_records::<Order>)
        .configure(configure_records::<Offer>)
        .service(ready)
        .service(live)
}
