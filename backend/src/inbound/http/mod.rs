//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod scores;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::{HttpRequest, ResponseError, error::JsonPayloadError};

use crate::domain::Error;

/// Map JSON payload extraction failures onto the domain error envelope so
/// malformed bodies receive the same response shape as other validation
/// failures.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = Error::invalid_request(err.to_string()).error_response();
    actix_web::error::InternalError::from_response(err, response).into()
}
