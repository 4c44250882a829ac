use crate::core::{CoreError, SessionState};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Errors that can occur with session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// In-memory session store
///
/// Sessions live in a bounded moka cache and expire after sitting idle.
/// Each entry carries its own async mutex, so updates to one session are
/// serialized while different sessions proceed in parallel.
pub struct SessionStore {
    sessions: moka::future::Cache<Uuid, Arc<Mutex<SessionState>>>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, idle_timeout_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(Duration::from_secs(idle_timeout_secs))
            .build();

        Self { sessions }
    }

    /// Start a fresh session and return its id
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .insert(id, Arc::new(Mutex::new(SessionState::new())))
            .await;
        tracing::debug!("Session created: {}", id);
        id
    }

    /// Snapshot of a session's current state
    pub async fn get(&self, id: Uuid) -> Result<SessionState, SessionError> {
        let entry = self.entry(id).await?;
        let state = entry.lock().await;
        Ok(state.clone())
    }

    /// Apply an operation to a session
    ///
    /// The operation runs against a copy; the copy replaces the stored state
    /// only when the operation succeeds.
    pub async fn update<T, F>(&self, id: Uuid, op: F) -> Result<T, SessionError>
    where
        F: FnOnce(&mut SessionState) -> Result<T, CoreError>,
    {
        let entry = self.entry(id).await?;
        let mut state = entry.lock().await;

        let mut draft = state.clone();
        let output = op(&mut draft)?;
        *state = draft;

        Ok(output)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.remove(&id).await.is_some()
    }

    /// Approximate number of live sessions
    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn entry(&self, id: Uuid) -> Result<Arc<Mutex<SessionState>>, SessionError> {
        self.sessions
            .get(&id)
            .await
            .ok_or(SessionError::SessionNotFound(id))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(10_000, 3600)
    }
}
