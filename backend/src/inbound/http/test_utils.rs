//! Handler test support: an in-process stub of the driving port.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{RecordScore, RecordScoreOutcome, ScoreTracker};
use crate::domain::{
    Error, NewStudent, ScoreEntry, ScoreEntryId, Student, StudentId, TelegramId,
};

#[derive(Default)]
struct StubState {
    students: Vec<Student>,
    entries: Vec<ScoreEntry>,
    failure: Option<Error>,
}

/// Deterministic [`ScoreTracker`] used by handler unit tests.
#[derive(Default)]
pub struct StubTracker {
    state: Mutex<StubState>,
}

impl StubTracker {
    fn lock(&self) -> std::sync::MutexGuard<'_, StubState> {
        self.state.lock().expect("stub tracker lock")
    }

    /// Make every subsequent operation fail with the given error.
    pub fn set_failure(&self, error: Error) {
        self.lock().failure = Some(error);
    }

    /// Students registered through the stub, in call order.
    pub fn registrations(&self) -> Vec<Student> {
        self.lock().students.clone()
    }
}

#[async_trait]
impl ScoreTracker for StubTracker {
    async fn register(&self, request: NewStudent) -> Result<Student, Error> {
        let mut state = self.lock();
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }
        if let Some(existing) = state
            .students
            .iter()
            .find(|s| s.telegram_id() == request.telegram_id)
        {
            return Ok(existing.clone());
        }
        let id = i32::try_from(state.students.len()).unwrap_or(i32::MAX) + 1;
        let student = Student::new(
            StudentId::new(id),
            request.telegram_id,
            request.first_name,
            request.last_name,
        );
        state.students.push(student.clone());
        Ok(student)
    }

    async fn record_score(&self, request: RecordScore) -> Result<RecordScoreOutcome, Error> {
        let mut state = self.lock();
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }
        let Some(student) = state
            .students
            .iter()
            .find(|s| s.telegram_id() == request.telegram_id)
            .cloned()
        else {
            return Ok(RecordScoreOutcome::NotRegistered);
        };
        if let Some(position) = state
            .entries
            .iter()
            .position(|e| e.student_id() == student.id() && e.subject() == &request.subject)
        {
            let old = state.entries[position].clone();
            let updated = ScoreEntry::new(
                old.id(),
                old.student_id(),
                old.subject().clone(),
                request.score,
            );
            state.entries[position] = updated.clone();
            return Ok(RecordScoreOutcome::Recorded(updated));
        }
        let id = i32::try_from(state.entries.len()).unwrap_or(i32::MAX) + 1;
        let entry = ScoreEntry::new(
            ScoreEntryId::new(id),
            student.id(),
            request.subject,
            request.score,
        );
        state.entries.push(entry.clone());
        Ok(RecordScoreOutcome::Recorded(entry))
    }

    async fn get_scores(&self, telegram_id: TelegramId) -> Result<Vec<ScoreEntry>, Error> {
        let state = self.lock();
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }
        let Some(student) = state
            .students
            .iter()
            .find(|s| s.telegram_id() == telegram_id)
        else {
            return Ok(Vec::new());
        };
        Ok(state
            .entries
            .iter()
            .filter(|e| e.student_id() == student.id())
            .cloned()
            .collect())
    }
}
