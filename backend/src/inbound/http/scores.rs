//! Score submission and listing handlers.
//!
//! ```text
//! POST /scores/ {"telegram_id":12345,"subject":"Math","score":90}
//! GET /scores/12345
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{RecordScore, RecordScoreOutcome};
use crate::domain::{Error, ScoreEntry, TelegramId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_subject};

/// Fixed message returned when a score arrives for an unknown student.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found. Please register first.";

/// Request body for `POST /scores/`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SubmitScoreBody {
    #[schema(example = 12345)]
    pub telegram_id: i64,
    #[schema(example = "Math")]
    pub subject: String,
    #[schema(example = 90)]
    pub score: i32,
}

/// Score representation returned by both score endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreBody {
    pub subject: String,
    pub score: i32,
}

impl From<ScoreEntry> for ScoreBody {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            subject: entry.subject().as_ref().to_owned(),
            score: entry.score(),
        }
    }
}

/// Submit a score for a registered student.
///
/// Resubmitting a subject overwrites the stored value in place; no history
/// is kept.
#[utoipa::path(
    post,
    path = "/scores/",
    request_body = SubmitScoreBody,
    responses(
        (status = 200, description = "Recorded score", body = ScoreBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Student is not registered", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["scores"],
    operation_id = "submitScore"
)]
#[post("/scores/")]
pub async fn add_score(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitScoreBody>,
) -> ApiResult<web::Json<ScoreBody>> {
    let body = payload.into_inner();
    let request = RecordScore {
        telegram_id: TelegramId::new(body.telegram_id),
        subject: parse_subject(body.subject, FieldName::new("subject"))?,
        score: body.score,
    };
    match state.tracker.record_score(request).await? {
        RecordScoreOutcome::Recorded(entry) => Ok(web::Json(entry.into())),
        RecordScoreOutcome::NotRegistered => Err(Error::not_found(USER_NOT_FOUND_MESSAGE)),
    }
}

/// List all scores recorded for a chat identity.
///
/// Always responds 200 with a (possibly empty) array; an unknown identity
/// is indistinguishable from a student with no scores on this path.
#[utoipa::path(
    get,
    path = "/scores/{telegram_id}",
    params(
        ("telegram_id" = i64, Path, description = "Chat-platform user identifier")
    ),
    responses(
        (status = 200, description = "Recorded scores in insertion order", body = [ScoreBody]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["scores"],
    operation_id = "listScores"
)]
#[get("/scores/{telegram_id}")]
pub async fn list_scores(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<ScoreBody>>> {
    let telegram_id = TelegramId::new(path.into_inner());
    let entries = state.tracker.get_scores(telegram_id).await?;
    Ok(web::Json(entries.into_iter().map(Into::into).collect()))
}
