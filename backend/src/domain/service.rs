//! Score tracking domain service.
//!
//! Implements the [`ScoreTracker`] driving port atop the persistence ports:
//! idempotent registration and a per-subject upsert for score submission.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::Error;
use crate::domain::ports::{
    RecordScore, RecordScoreOutcome, ScoreRepository, ScoreTracker, StoreError, StudentRepository,
};
use crate::domain::score::ScoreEntry;
use crate::domain::student::{NewStudent, Student, TelegramId};

fn map_store_error(error: StoreError) -> Error {
    match error {
        StoreError::ConstraintViolation { constraint } => {
            Error::conflict(format!("storage constraint violated: {constraint}"))
        }
        StoreError::Unavailable { message } => {
            Error::service_unavailable(format!("score store unavailable: {message}"))
        }
        StoreError::Query { message } => Error::internal(format!("score store error: {message}")),
    }
}

/// Service implementing the [`ScoreTracker`] port.
///
/// Holds no state of its own beyond the repository handles; all durable
/// state lives behind the persistence ports.
#[derive(Clone)]
pub struct ScoreTrackerService<S, R> {
    students: Arc<S>,
    scores: Arc<R>,
}

impl<S, R> ScoreTrackerService<S, R> {
    /// Create a new service over the given repositories.
    pub const fn new(students: Arc<S>, scores: Arc<R>) -> Self {
        Self { students, scores }
    }
}

#[async_trait]
impl<S, R> ScoreTracker for ScoreTrackerService<S, R>
where
    S: StudentRepository,
    R: ScoreRepository,
{
    async fn register(&self, request: NewStudent) -> Result<Student, Error> {
        let telegram_id = request.telegram_id;
        info!(%telegram_id, "registration requested");

        if let Some(existing) = self
            .students
            .find_by_telegram_id(telegram_id)
            .await
            .map_err(map_store_error)?
        {
            info!(%telegram_id, "student already registered");
            return Ok(existing);
        }

        match self.students.insert(&request).await {
            Ok(student) => {
                info!(%telegram_id, id = %student.id(), "student registered");
                Ok(student)
            }
            Err(StoreError::ConstraintViolation { .. }) => {
                // A concurrent registration won the insert; the stored row
                // is authoritative.
                self.students
                    .find_by_telegram_id(telegram_id)
                    .await
                    .map_err(map_store_error)?
                    .ok_or_else(|| {
                        Error::conflict("registration raced with a concurrent delete")
                    })
            }
            Err(other) => Err(map_store_error(other)),
        }
    }

    async fn record_score(&self, request: RecordScore) -> Result<RecordScoreOutcome, Error> {
        let RecordScore {
            telegram_id,
            subject,
            score,
        } = request;
        info!(%telegram_id, subject = subject.as_ref(), score, "score submission");

        let Some(student) = self
            .students
            .find_by_telegram_id(telegram_id)
            .await
            .map_err(map_store_error)?
        else {
            warn!(%telegram_id, "score submitted for an unregistered student");
            return Ok(RecordScoreOutcome::NotRegistered);
        };

        let existing = self
            .scores
            .find_by_student_and_subject(student.id(), &subject)
            .await
            .map_err(map_store_error)?;

        if let Some(entry) = existing {
            let updated = self
                .scores
                .update_score(entry.id(), score)
                .await
                .map_err(map_store_error)?;
            return Ok(RecordScoreOutcome::Recorded(updated));
        }

        match self.scores.insert(student.id(), &subject, score).await {
            Ok(entry) => Ok(RecordScoreOutcome::Recorded(entry)),
            Err(StoreError::ConstraintViolation { .. }) => {
                // Lost the first-submission race for this subject: the entry
                // now exists, so retry once as an in-place update.
                let entry = self
                    .scores
                    .find_by_student_and_subject(student.id(), &subject)
                    .await
                    .map_err(map_store_error)?
                    .ok_or_else(|| {
                        Error::conflict("score submission raced with a concurrent write")
                    })?;
                let updated = self
                    .scores
                    .update_score(entry.id(), score)
                    .await
                    .map_err(map_store_error)?;
                Ok(RecordScoreOutcome::Recorded(updated))
            }
            Err(other) => Err(map_store_error(other)),
        }
    }

    async fn get_scores(&self, telegram_id: TelegramId) -> Result<Vec<ScoreEntry>, Error> {
        let entries = self
            .scores
            .list_for_telegram_id(telegram_id)
            .await
            .map_err(map_store_error)?;
        info!(%telegram_id, count = entries.len(), "scores listed");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    //! Service behaviour against in-process stub repositories.
    use std::sync::Mutex;

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::score::{ScoreEntryId, Subject};
    use crate::domain::student::{Name, StudentId};

    #[derive(Default)]
    struct StubState {
        students: Vec<Student>,
        entries: Vec<ScoreEntry>,
        next_student_id: i32,
        next_entry_id: i32,
        fail_student_find: Option<StoreError>,
        // Lookups that report "absent" even when the row exists, to
        // simulate losing a check-then-act race.
        hidden_student_finds: usize,
        hidden_entry_finds: usize,
    }

    #[derive(Default)]
    struct StubStore {
        state: Mutex<StubState>,
    }

    impl StubStore {
        fn lock(&self) -> std::sync::MutexGuard<'_, StubState> {
            self.state.lock().expect("stub state lock")
        }

        fn set_student_find_failure(&self, error: StoreError) {
            self.lock().fail_student_find = Some(error);
        }

        fn hide_next_student_find(&self) {
            self.lock().hidden_student_finds += 1;
        }

        fn hide_next_entry_find(&self) {
            self.lock().hidden_entry_finds += 1;
        }

        fn entry_count(&self) -> usize {
            self.lock().entries.len()
        }
    }

    #[async_trait]
    impl StudentRepository for StubStore {
        async fn find_by_telegram_id(
            &self,
            telegram_id: TelegramId,
        ) -> Result<Option<Student>, StoreError> {
            let mut state = self.lock();
            if let Some(error) = &state.fail_student_find {
                return Err(error.clone());
            }
            if state.hidden_student_finds > 0 {
                state.hidden_student_finds -= 1;
                return Ok(None);
            }
            Ok(state
                .students
                .iter()
                .find(|s| s.telegram_id() == telegram_id)
                .cloned())
        }

        async fn insert(&self, new_student: &NewStudent) -> Result<Student, StoreError> {
            let mut state = self.lock();
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
    impl ScoreRepository for StubStore {
        async fn find_by_student_and_subject(
            &self,
            student_id: StudentId,
            subject: &Subject,
        ) -> Result<Option<ScoreEntry>, StoreError> {
            let mut state = self.lock();
            if state.hidden_entry_finds > 0 {
                state.hidden_entry_finds -= 1;
                return Ok(None);
            }
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
            let mut state = self.lock();
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
            let mut state = self.lock();
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
            let state = self.lock();
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

    fn service(store: Arc<StubStore>) -> ScoreTrackerService<StubStore, StubStore> {
        ScoreTrackerService::new(store.clone(), store)
    }

    fn new_student(telegram_id: i64, first: &str, last: &str) -> NewStudent {
        NewStudent {
            telegram_id: TelegramId::new(telegram_id),
            first_name: Name::new(first).expect("valid name"),
            last_name: Name::new(last).expect("valid name"),
        }
    }

    fn submission(telegram_id: i64, subject: &str, score: i32) -> RecordScore {
        RecordScore {
            telegram_id: TelegramId::new(telegram_id),
            subject: Subject::new(subject).expect("valid subject"),
            score,
        }
    }

    fn recorded(outcome: RecordScoreOutcome) -> ScoreEntry {
        match outcome {
            RecordScoreOutcome::Recorded(entry) => entry,
            RecordScoreOutcome::NotRegistered => panic!("expected a recorded entry"),
        }
    }

    #[tokio::test]
    async fn register_is_idempotent_even_when_names_differ() {
        let store = Arc::new(StubStore::default());
        let tracker = service(store);

        let first = tracker
            .register(new_student(12345, "Test", "User"))
            .await
            .expect("first registration succeeds");
        let second = tracker
            .register(new_student(12345, "Other", "Name"))
            .await
            .expect("re-registration succeeds");

        assert_eq!(first.id(), second.id());
        assert_eq!(second.first_name().as_ref(), "Test");
        assert_eq!(second.last_name().as_ref(), "User");
    }

    #[tokio::test]
    async fn register_recovers_a_raced_insert_by_returning_the_winner() {
        let store = Arc::new(StubStore::default());
        let tracker = service(store.clone());

        // The winning registration lands between our lookup and our
        // insert: hide the lookup so the service attempts the insert and
        // trips the telegram_id uniqueness constraint.
        tracker
            .register(new_student(777, "First", "Writer"))
            .await
            .expect("seed registration succeeds");
        store.hide_next_student_find();

        let student = tracker
            .register(new_student(777, "Second", "Writer"))
            .await
            .expect("raced registration resolves to the stored row");
        assert_eq!(student.first_name().as_ref(), "First");
    }

    #[tokio::test]
    async fn record_score_inserts_then_overwrites_in_place() {
        let store = Arc::new(StubStore::default());
        let tracker = service(store.clone());
        tracker
            .register(new_student(12345, "Test", "User"))
            .await
            .expect("registration succeeds");

        let first = recorded(
            tracker
                .record_score(submission(12345, "Math", 90))
                .await
                .expect("first submission succeeds"),
        );
        let second = recorded(
            tracker
                .record_score(submission(12345, "Math", 95))
                .await
                .expect("resubmission succeeds"),
        );

        assert_eq!(first.id(), second.id());
        assert_eq!(second.score(), 95);
        assert_eq!(store.entry_count(), 1);
    }

    #[tokio::test]
    async fn scores_for_distinct_subjects_are_independent() {
        let store = Arc::new(StubStore::default());
        let tracker = service(store);
        tracker
            .register(new_student(12345, "Test", "User"))
            .await
            .expect("registration succeeds");

        recorded(
            tracker
                .record_score(submission(12345, "Math", 90))
                .await
                .expect("math submission succeeds"),
        );
        recorded(
            tracker
                .record_score(submission(12345, "Physics", 80))
                .await
                .expect("physics submission succeeds"),
        );

        let entries = tracker
            .get_scores(TelegramId::new(12345))
            .await
            .expect("listing succeeds");
        let subjects: Vec<&str> = entries.iter().map(|e| e.subject().as_ref()).collect();
        assert_eq!(subjects, vec!["Math", "Physics"]);
    }

    #[tokio::test]
    async fn record_score_for_unknown_student_yields_not_registered() {
        let store = Arc::new(StubStore::default());
        let tracker = service(store.clone());

        let outcome = tracker
            .record_score(submission(99999, "Math", 50))
            .await
            .expect("submission resolves");

        assert_eq!(outcome, RecordScoreOutcome::NotRegistered);
        assert_eq!(store.entry_count(), 0);
    }

    #[tokio::test]
    async fn get_scores_for_unknown_student_is_empty_not_an_error() {
        let store = Arc::new(StubStore::default());
        let tracker = service(store);

        let entries = tracker
            .get_scores(TelegramId::new(99999))
            .await
            .expect("listing succeeds");
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn raced_first_submission_is_retried_as_an_update() {
        let store = Arc::new(StubStore::default());
        let tracker = service(store.clone());
        tracker
            .register(new_student(12345, "Test", "User"))
            .await
            .expect("registration succeeds");

        // The concurrent writer's row lands before our insert attempt, but
        // after our pre-insert lookup: hide that lookup so the service sees
        // "absent", attempts the insert, and trips the uniqueness
        // constraint.
        let student_id = StudentId::new(1);
        let subject = Subject::new("Math").expect("valid subject");
        ScoreRepository::insert(store.as_ref(), student_id, &subject, 70)
            .await
            .expect("concurrent insert succeeds");
        store.hide_next_entry_find();

        let entry = recorded(
            tracker
                .record_score(submission(12345, "Math", 95))
                .await
                .expect("raced submission recovers"),
        );
        assert_eq!(entry.score(), 95);
        assert_eq!(store.entry_count(), 1);
    }

    #[rstest]
    #[case(StoreError::unavailable("pool exhausted"), ErrorCode::ServiceUnavailable)]
    #[case(StoreError::query("broken"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn store_faults_map_to_domain_error_codes(
        #[case] fault: StoreError,
        #[case] expected: ErrorCode,
    ) {
        let store = Arc::new(StubStore::default());
        store.set_student_find_failure(fault);
        let tracker = service(store);

        let err = tracker
            .register(new_student(1, "A", "B"))
            .await
            .expect_err("store fault surfaces");
        assert_eq!(err.code(), expected);
    }
}
