//! Job Record Store — the in-memory, most-recent-first board of applications.
//!
//! Modeled as an explicit owned structure with plain mutating operations so the
//! lifecycle is testable without any HTTP or rendering layer. The HTTP surface
//! wraps a `JobBoard` in `Arc<RwLock<_>>`, making each operation atomic with
//! respect to the request that triggered it. State is volatile by design: there
//! is no persistence and a restart empties the board.

pub mod handlers;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobApplication, JobStatus};

#[derive(Debug, Default)]
pub struct JobBoard {
    jobs: Vec<JobApplication>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A board pre-seeded with a few manual records so a fresh process has
    /// content to show.
    pub fn demo() -> Self {
        let mut google = JobApplication::manual("Google", "Senior React Engineer");
        google.status = JobStatus::Screening;

        let mut netflix = JobApplication::manual("Netflix", "Frontend Developer");
        netflix.date_applied = Utc::now() - Duration::days(2);

        let mut spotify = JobApplication::manual("Spotify", "Web Engineer II");
        spotify.status = JobStatus::Interview;
        spotify.date_applied = Utc::now() - Duration::days(5);

        let mut board = Self::new();
        for job in [spotify, netflix, google] {
            // Seed records are fully formed, so insertion cannot fail.
            let _ = board.add(job);
        }
        board
    }

    /// Inserts a fully-formed record at the front (most-recent-first display
    /// convention). Rejects records that would break the store invariant:
    /// company and title must be non-empty.
    pub fn add(&mut self, job: JobApplication) -> Result<(), AppError> {
        validate(&job)?;
        self.jobs.insert(0, job);
        Ok(())
    }

    /// Inserts a whole batch at the front in the given order, atomically from
    /// the caller's perspective: either every record is valid and all are
    /// inserted, or none are. Returns the number inserted.
    pub fn insert_batch(&mut self, batch: Vec<JobApplication>) -> Result<usize, AppError> {
        for job in &batch {
            validate(job)?;
        }
        let created = batch.len();
        self.jobs.splice(0..0, batch);
        Ok(created)
    }

    /// Sets the status of the record matching `id`. Any enumerated status is
    /// accepted — ordered-transition rules are a concern of the callers that
    /// use `JobStatus::next`/`previous`, not of the store. Returns whether the
    /// id was found; an unknown id is a no-op.
    pub fn update_status(&mut self, id: Uuid, status: JobStatus) -> bool {
        match self.jobs.iter_mut().find(|job| job.id == id) {
            Some(job) => {
                job.status = status;
                true
            }
            None => false,
        }
    }

    /// Removes the record matching `id`; no-op if absent.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.id != id);
        self.jobs.len() != before
    }

    pub fn get(&self, id: Uuid) -> Option<&JobApplication> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// The current ordered collection. Callers clone what they need; the store
    /// itself is only ever mutated through the operations above.
    pub fn jobs(&self) -> &[JobApplication] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

fn validate(job: &JobApplication) -> Result<(), AppError> {
    if job.company.trim().is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }
    if job.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    Ok(())
}
