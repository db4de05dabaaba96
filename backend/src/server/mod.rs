//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use color_eyre::eyre::{Result, WrapErr};

use todo_backend::Trace;
#[cfg(debug_assertions)]
use todo_backend::doc::ApiDoc;
use todo_backend::domain::ports::PassThroughPreparer;
use todo_backend::domain::{CredentialPreparer, ResourceService, TaskResource, UserResource};
use todo_backend::inbound::http::health::{HealthState, live, ready};
use todo_backend::inbound::http::{ApiRoutes, default_service};
use todo_backend::outbound::crypto::Argon2CredentialHasher;
use todo_backend::outbound::persistence::{DieselTaskRepository, DieselUserRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire both resource services over the configured pool.
fn build_routes(config: &ServerConfig) -> Result<ApiRoutes> {
    let hasher = Argon2CredentialHasher::new().wrap_err("invalid credential hashing parameters")?;
    let users = ResourceService::<UserResource>::new(
        Arc::new(DieselUserRepository::new(config.db_pool.clone())),
        Arc::new(CredentialPreparer::new(Arc::new(hasher))),
    )
    .with_store_timeout(config.store_timeout);
    let tasks = ResourceService::<TaskResource>::new(
        Arc::new(DieselTaskRepository::new(config.db_pool.clone())),
        Arc::new(PassThroughPreparer),
    )
    .with_store_timeout(config.store_timeout);
    Ok(ApiRoutes::new(users, tasks))
}

fn build_app(
    health_state: web::Data<HealthState>,
    routes: ApiRoutes,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .wrap(Trace)
        .configure(move |cfg| routes.configure(cfg))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app.default_service(default_service())
}

/// Bind the listener and return the running server.
///
/// Readiness is signalled once the socket is bound.
///
/// # Errors
///
/// Fails when the hashing parameters are rejected or the socket cannot be bound.
pub fn create_server(health_state: web::Data<HealthState>, config: ServerConfig) -> Result<Server> {
    let routes = build_routes(&config)?;
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), routes.clone()))
        .bind(config.bind_addr)
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr))?
        .run();

    health_state.mark_ready();
    Ok(server)
}
