//! PostgreSQL-backed `ScoreRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ScoreRepository, StoreError};
use crate::domain::{ScoreEntry, ScoreEntryId, StudentId, Subject, TelegramId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewScoreRow, ScoreRow};
use super::pool::DbPool;
use super::schema::{scores, users};

/// Diesel-backed implementation of the [`ScoreRepository`] port.
#[derive(Clone)]
pub struct DieselScoreRepository {
    pool: DbPool,
}

impl DieselScoreRepository {
    /// Create a new repository over the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_entry(row: ScoreRow) -> Result<ScoreEntry, StoreError> {
    let subject = Subject::new(row.subject)
        .map_err(|_| StoreError::query("scores row holds an empty subject"))?;
    Ok(ScoreEntry::new(
        ScoreEntryId::new(row.id),
        StudentId::new(row.user_id),
        subject,
        row.score,
    ))
}

#[async_trait]
impl ScoreRepository for DieselScoreRepository {
    async fn find_by_student_and_subject(
        &self,
        student_id: StudentId,
        subject: &Subject,
    ) -> Result<Option<ScoreEntry>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ScoreRow> = scores::table
            .filter(scores::user_id.eq(student_id.value()))
            .filter(scores::subject.eq(subject.as_ref()))
            .select(ScoreRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_entry).transpose()
    }

    async fn insert(
        &self,
        student_id: StudentId,
        subject: &Subject,
        score: i32,
    ) -> Result<ScoreEntry, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewScoreRow {
            user_id: student_id.value(),
            subject: subject.as_ref(),
            score,
        };

        let row: ScoreRow = diesel::insert_into(scores::table)
            .values(&new_row)
            .returning(ScoreRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_entry(row)
    }

    async fn update_score(
        &self,
        entry_id: ScoreEntryId,
        score: i32,
    ) -> Result<ScoreEntry, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ScoreRow = diesel::update(scores::table.find(entry_id.value()))
            .set(scores::score.eq(score))
            .returning(ScoreRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_entry(row)
    }

    async fn list_for_telegram_id(
        &self,
        telegram_id: TelegramId,
    ) -> Result<Vec<ScoreEntry>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ScoreRow> = scores::table
            .inner_join(users::table)
            .filter(users::telegram_id.eq(telegram_id.value()))
            .select(ScoreRow::as_select())
            .order(scores::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_entry).collect()
    }
}
