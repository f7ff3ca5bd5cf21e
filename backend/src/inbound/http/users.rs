//! Student registration handler.
//!
//! ```text
//! POST /users/ {"telegram_id":12345,"first_name":"Test","last_name":"User"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewStudent, Student, TelegramId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_name};

/// Request body for `POST /users/`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterUserBody {
    /// Chat-platform user identifier; the natural key for a student.
    #[schema(example = 12345)]
    pub telegram_id: i64,
    #[schema(example = "Test")]
    pub first_name: String,
    #[schema(example = "User")]
    pub last_name: String,
}

/// Student representation returned by `POST /users/`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserBody {
    pub id: i32,
    pub telegram_id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<Student> for UserBody {
    fn from(student: Student) -> Self {
        Self {
            id: student.id().value(),
            telegram_id: student.telegram_id().value(),
            first_name: student.first_name().as_ref().to_owned(),
            last_name: student.last_name().as_ref().to_owned(),
        }
    }
}

/// Register a student, idempotently.
///
/// Re-registering an already known `telegram_id` returns the stored record
/// unchanged.
#[utoipa::path(
    post,
    path = "/users/",
    request_body = RegisterUserBody,
    responses(
        (status = 200, description = "Registered (or already registered) student", body = UserBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users/")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserBody>,
) -> ApiResult<web::Json<UserBody>> {
    let body = payload.into_inner();
    let request = NewStudent {
        telegram_id: TelegramId::new(body.telegram_id),
        first_name: parse_name(body.first_name, FieldName::new("first_name"))?,
        last_name: parse_name(body.last_name, FieldName::new("last_name"))?,
    };
    let student = state.tracker.register(request).await?;
    Ok(web::Json(student.into()))
}
