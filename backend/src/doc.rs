//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API. The generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::scores::{ScoreBody, SubmitScoreBody};
use crate::inbound::http::users::{RegisterUserBody, UserBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "EGE Tracker API",
        description = "Registration and per-subject exam score tracking for chat-bot front-ends."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::scores::add_score,
        crate::inbound::http::scores::list_scores,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterUserBody,
        UserBody,
        SubmitScoreBody,
        ScoreBody,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "users", description = "Student registration"),
        (name = "scores", description = "Score submission and listing"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
