use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinError;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::catalog::PostingCatalog;
use super::domain::{EmployerIdentity, WizardStage};
use super::draft::DraftUpdate;
use super::review::DraftReview;
use super::submission::{
    JobCreationClient, PaymentGateway, SubmissionAttempt, SubmissionError, SubmissionPipeline,
    SubmissionReceipt,
};
use super::validation::ValidationError;
use super::wizard::{JobPostingWizard, QuestionCommand, WizardSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw).map(Self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub wizard: WizardSnapshot,
}

#[derive(Debug, thiserror::Error)]
pub enum PostingServiceError {
    #[error("posting session {0} was not found")]
    UnknownSession(SessionId),
    #[error("a submission is in flight; the draft cannot change until it completes")]
    SubmissionInFlight,
    #[error("submission pipeline stopped before completing: {0}")]
    PipelineAborted(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Idle sessions older than this are evicted when new sessions open.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct SessionEntry {
    wizard: JobPostingWizard,
    touched_at: DateTime<Utc>,
}

impl SessionEntry {
    fn new(wizard: JobPostingWizard) -> Self {
        Self {
            wizard,
            touched_at: Utc::now(),
        }
    }

    fn touch(&mut self) {
        self.touched_at = Utc::now();
    }
}

type SessionMap = Arc<Mutex<HashMap<SessionId, SessionEntry>>>;

/// Multi-session façade over [`JobPostingWizard`] used by the HTTP layer.
pub struct JobPostingService<P, J> {
    catalog: Arc<PostingCatalog>,
    pipeline: Arc<SubmissionPipeline<P, J>>,
    currency: String,
    session_ttl: Duration,
    sessions: SessionMap,
}

impl<P, J> JobPostingService<P, J>
where
    P: PaymentGateway + 'static,
    J: JobCreationClient + 'static,
{
    pub fn new(
        catalog: Arc<PostingCatalog>,
        pipeline: Arc<SubmissionPipeline<P, J>>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            pipeline,
            currency: currency.into(),
            session_ttl: DEFAULT_SESSION_TTL,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn catalog(&self) -> &Arc<PostingCatalog> {
        &self.catalog
    }

    pub fn session_count(&self) -> usize {
        self.lock().len()
    }

    pub fn open(&self) -> SessionView {
        self.evict_idle(Utc::now());

        let session_id = SessionId::new();
        let wizard = JobPostingWizard::new(Arc::clone(&self.catalog));
        let view = SessionView {
            session_id,
            wizard: wizard.snapshot(),
        };
        debug!(%session_id, draft_id = %wizard.draft_id(), "posting session opened");
        self.lock().insert(session_id, SessionEntry::new(wizard));
        view
    }

    /// Drop sessions untouched for longer than the TTL as of `now`.
    /// Sessions with a submission in flight are kept.
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let Ok(ttl) = chrono::Duration::from_std(self.session_ttl) else {
            return 0;
        };
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| {
            entry.wizard.is_submitting() || now - entry.touched_at <= ttl
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, remaining = sessions.len(), "idle posting sessions evicted");
        }
        evicted
    }

    pub fn get(&self, session_id: SessionId) -> Result<SessionView, PostingServiceError> {
        self.read(session_id, |wizard| Ok(wizard.snapshot()))
            .map(|wizard| SessionView { session_id, wizard })
    }

    pub fn close(&self, session_id: SessionId) -> Result<(), PostingServiceError> {
        let mut sessions = self.lock();
        let submitting = sessions
            .get(&session_id)
            .map(|entry| entry.wizard.is_submitting());
        match submitting {
            None => Err(PostingServiceError::UnknownSession(session_id)),
            Some(true) => Err(PostingServiceError::SubmissionInFlight),
            Some(false) => {
                sessions.remove(&session_id);
                debug!(%session_id, "posting session closed");
                Ok(())
            }
        }
    }

    pub fn update(
        &self,
        session_id: SessionId,
        update: DraftUpdate,
    ) -> Result<SessionView, PostingServiceError> {
        self.mutate(session_id, |wizard| Ok(wizard.update(update)?))
    }

    pub fn go_to(
        &self,
        session_id: SessionId,
        stage: WizardStage,
    ) -> Result<SessionView, PostingServiceError> {
        self.mutate(session_id, |wizard| wizard.go_to(stage).map(|_| ()).map_err(Into::into))
    }

    pub fn question(
        &self,
        session_id: SessionId,
        command: QuestionCommand,
    ) -> Result<SessionView, PostingServiceError> {
        self.mutate(session_id, |wizard| {
            Ok(wizard.apply_question_command(command)?)
        })
    }

    pub fn clear(&self, session_id: SessionId) -> Result<SessionView, PostingServiceError> {
        self.mutate(session_id, |wizard| {
            wizard.clear_draft();
            Ok(())
        })
    }

    pub fn review(&self, session_id: SessionId) -> Result<DraftReview, PostingServiceError> {
        self.read(session_id, |wizard| Ok(wizard.review()))
    }

    /// Run payment and job creation for a session without holding the session lock.
    ///
    /// The outcome is written back by the spawned task, so a caller that stops
    /// waiting never leaves the session marked as submitting. A published job
    /// closes its session.
    pub async fn submit(
        &self,
        session_id: SessionId,
        employer: Option<EmployerIdentity>,
    ) -> Result<SubmissionReceipt, PostingServiceError> {
        let pending = {
            let mut sessions = self.lock();
            let entry = sessions
                .get_mut(&session_id)
                .ok_or(PostingServiceError::UnknownSession(session_id))?;
            entry.touch();
            entry.wizard.begin_submission(employer.as_ref(), &self.currency)?
        };

        let pipeline = Arc::clone(&self.pipeline);
        let sessions = Arc::clone(&self.sessions);
        let task = tokio::spawn(async move {
            let joined = tokio::spawn(async move { pipeline.run(pending).await }).await;
            complete_submission(&sessions, session_id, joined)
        });

        match task.await {
            Ok(result) => result,
            Err(join_error) => Err(PostingServiceError::PipelineAborted(join_error.to_string())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, SessionEntry>> {
        lock_sessions(&self.sessions)
    }

    fn read<T>(
        &self,
        session_id: SessionId,
        f: impl FnOnce(&JobPostingWizard) -> Result<T, PostingServiceError>,
    ) -> Result<T, PostingServiceError> {
        let mut sessions = self.lock();
        let entry = sessions
            .get_mut(&session_id)
            .ok_or(PostingServiceError::UnknownSession(session_id))?;
        entry.touch();
        f(&entry.wizard)
    }

    fn mutate(
        &self,
        session_id: SessionId,
        f: impl FnOnce(&mut JobPostingWizard) -> Result<(), PostingServiceError>,
    ) -> Result<SessionView, PostingServiceError> {
        let mut sessions = self.lock();
        let entry = sessions
            .get_mut(&session_id)
            .ok_or(PostingServiceError::UnknownSession(session_id))?;
        if entry.wizard.is_submitting() {
            return Err(PostingServiceError::SubmissionInFlight);
        }
        entry.touch();
        f(&mut entry.wizard)?;
        Ok(SessionView {
            session_id,
            wizard: entry.wizard.snapshot(),
        })
    }
}

fn lock_sessions(
    sessions: &Mutex<HashMap<SessionId, SessionEntry>>,
) -> MutexGuard<'_, HashMap<SessionId, SessionEntry>> {
    sessions.lock().unwrap_or_else(PoisonError::into_inner)
}

fn complete_submission(
    sessions: &Mutex<HashMap<SessionId, SessionEntry>>,
    session_id: SessionId,
    joined: Result<SubmissionAttempt, JoinError>,
) -> Result<SubmissionReceipt, PostingServiceError> {
    let mut sessions = lock_sessions(sessions);
    let Some(entry) = sessions.get_mut(&session_id) else {
        error!(%session_id, "posting session vanished while a submission was in flight");
        return Err(PostingServiceError::UnknownSession(session_id));
    };
    entry.touch();

    match joined {
        Ok(attempt) => {
            let result = entry.wizard.finish_submission(attempt);
            if result.is_ok() {
                sessions.remove(&session_id);
                debug!(%session_id, "posting session closed after publication");
            }
            Ok(result?)
        }
        Err(join_error) => {
            error!(
                %session_id,
                draft_id = %entry.wizard.draft_id(),
                error = %join_error,
                "submission pipeline task failed"
            );
            entry.wizard.abandon_submission();
            Err(PostingServiceError::PipelineAborted(join_error.to_string()))
        }
    }
}
