//! In-memory store implementing both persistence ports.
//!
//! Used when the server starts without a configured database (local
//! development) and by the end-to-end tests. Enforces the same uniqueness
//! invariants as the PostgreSQL schema so service behaviour matches.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ScoreRepository, StoreError, StudentRepository};
use crate::domain::{
    NewStudent, ScoreEntry, ScoreEntryId, Student, StudentId, Subject, TelegramId,
};

#[derive(Default)]
struct MemoryState {
    students: Vec<Student>,
    entries: Vec<ScoreEntry>,
    next_student_id: i32,
    next_entry_id: i32,
}

/// Mutex-guarded in-memory implementation of the persistence ports.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::unavailable("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl StudentRepository for InMemoryStore {
    async fn find_by_telegram_id(
        &self,
        telegram_id: TelegramId,
    ) -> Result<Option<Student>, StoreError> {
        let state = self.lock()?;
        Ok(state
            .students
            .iter()
            .find(|s| s.telegram_id() == telegram_id)
            .cloned())
    }

    async fn insert(&self, new_student: &NewStudent) -> Result<Student, StoreError> {
        let mut state = self.lock()?;
        if state
            .students
            .iter()
            .any(|s| s.telegram_id() == new_student.telegram_id)
        {
            return Err(StoreError::constraint_violation("users_telegram_id_key"));
        }
        state.next_student_id += 1;
        let student = Student::new(
            StudentId::new(state.next_student_id),
            new_student.telegram_id,
            new_student.first_name.clone(),
            new_student.last_name.clone(),
        );
        state.students.push(student.clone());
        Ok(student)
    }
}

#[async_trait]
impl ScoreRepository for InMemoryStore {
    async fn find_by_student_and_subject(
        &self,
        student_id: StudentId,
        subject: &Subject,
    ) -> Result<Option<ScoreEntry>, StoreError> {
        let state = self.lock()?;
        Ok(state
            .entries
            .iter()
            .find(|e| e.student_id() == student_id && e.subject() == subject)
            .cloned())
    }

    async fn insert(
        &self,
        student_id: StudentId,
        subject: &Subject,
        score: i32,
    ) -> Result<ScoreEntry, StoreError> {
        let mut state = self.lock()?;
        if state
            .entries
            .iter()
            .any(|e| e.student_id() == student_id && e.subject() == subject)
        {
            return Err(StoreError::constraint_violation("user_subject_uc"));
        }
        state.next_entry_id += 1;
        let entry = ScoreEntry::new(
            ScoreEntryId::new(state.next_entry_id),
            student_id,
            subject.clone(),
            score,
        );
        state.entries.push(entry.clone());
        Ok(entry)
    }

    async fn update_score(
        &self,
        entry_id: ScoreEntryId,
        score: i32,
    ) -> Result<ScoreEntry, StoreError> {
        let mut state = self.lock()?;
        let Some(position) = state.entries.iter().position(|e| e.id() == entry_id) else {
            return Err(StoreError::query("record not found"));
        };
        let old = state.entries[position].clone();
        let updated = ScoreEntry::new(old.id(), old.student_id(), old.subject().clone(), score);
        state.entries[position] = updated.clone();
        Ok(updated)
    }

    async fn list_for_telegram_id(
        &self,
        telegram_id: TelegramId,
    ) -> Result<Vec<ScoreEntry>, StoreError> {
        let state = self.lock()?;
        let Some(student) = state
            .students
            .iter()
            .find(|s| s.telegram_id() == telegram_id)
        else {
            return Ok(Vec::new());
        };
        // Entries are pushed in insertion order, matching the ordering
        // contract of the SQL adapter.
        Ok(state
            .entries
            .iter()
            .filter(|e| e.student_id() == student.id())
            .cloned()
            .collect())
    }
}
