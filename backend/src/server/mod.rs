//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::warn;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use ege_tracker::ApiDoc;
use ege_tracker::domain::ScoreTrackerService;
use ege_tracker::inbound::http::health::{HealthState, live, ready};
use ege_tracker::inbound::http::json_error_handler;
use ege_tracker::inbound::http::scores::{add_score, list_scores};
use ege_tracker::inbound::http::state::HttpState;
use ege_tracker::inbound::http::users::register_user;
use ege_tracker::outbound::memory::InMemoryStore;
use ege_tracker::outbound::persistence::{DieselScoreRepository, DieselStudentRepository};

/// Build the handler state from the configured storage backend.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::new(Arc::new(ScoreTrackerService::new(
            Arc::new(DieselStudentRepository::new(pool.clone())),
            Arc::new(DieselScoreRepository::new(pool.clone())),
        ))),
        None => {
            warn!("no database pool configured; scores will not survive a restart");
            let store = InMemoryStore::new();
            HttpState::new(Arc::new(ScoreTrackerService::new(
                Arc::new(store.clone()),
                Arc::new(store),
            )))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
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
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(register_user)
        .service(add_score)
        .service(list_scores)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an actix HTTP server from the given configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let bind_addr = config.bind_addr();
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
