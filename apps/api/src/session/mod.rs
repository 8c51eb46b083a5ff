//! Sessions: the explicit per-user context object.
//!
//! A session owns one profile, an optional API key and the latest result of
//! each task. Everything lives in memory and disappears when the session is
//! ended, left idle past the configured timeout, or the process exits.

pub mod handlers;

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::ApiKey;
use crate::profile::store::ProfileStore;
use crate::tasks::extract::AnalysisResult;
use crate::tasks::TaskKind;

#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub profile: ProfileStore,
    /// Unix millis of the last read or write through `SessionStore`.
    last_active_ms: AtomicI64,
    credential: Option<ApiKey>,
    results: BTreeMap<TaskKind, AnalysisResult>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            profile: ProfileStore::new(),
            last_active_ms: AtomicI64::new(now.timestamp_millis()),
            credential: None,
            results: BTreeMap::new(),
        }
    }

    pub fn set_credential(&mut self, key: Option<ApiKey>) {
        self.credential = key;
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// The session's own key wins over the process-wide default.
    pub fn resolve_credential(&self, default: Option<&ApiKey>) -> Option<ApiKey> {
        self.credential.clone().or_else(|| default.cloned())
    }

    /// Stores `result` under its task key, replacing any earlier result of the same task.
    pub fn record_result(&mut self, kind: TaskKind, result: AnalysisResult) {
        self.results.insert(kind, result);
    }

    pub fn results(&self) -> &BTreeMap<TaskKind, AnalysisResult> {
        &self.results
    }

    fn touch(&self) {
        self.last_active_ms
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }

    fn idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_active_ms.load(Ordering::Relaxed) < cutoff.timestamp_millis()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory session registry shared by all handlers.
///
/// Callers get scoped access through `read`/`write`; the lock is never held
/// across an `.await` on the remote model.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let session = Session::new();
        let id = session.id;
        self.sessions.write().await.insert(id, session);
        info!("Session {id} started");
        id
    }

    /// Drops the session and everything in it. Returns `false` if it did not exist.
    pub async fn end(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Session {id} ended");
        }
        removed
    }

    pub async fn read<R>(&self, id: Uuid, f: impl FnOnce(&Session) -> R) -> Result<R, AppError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
        session.touch();
        Ok(f(session))
    }

    pub async fn write<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        session.touch();
        Ok(f(session))
    }

    /// Drops every session untouched for longer than `max_idle`. Returns how many went.
    pub async fn prune_idle(&self, max_idle: Duration) -> usize {
        self.prune_inactive_since(Utc::now() - max_idle).await
    }

    async fn prune_inactive_since(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.idle_since(cutoff));
        let pruned = before - sessions.len();
        if pruned > 0 {
            info!("Pruned {pruned} idle session(s)");
        }
        pruned
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_credential_beats_default() {
        let default = ApiKey::new("default-key");
        let mut session = Session::new();
        assert_eq!(
            session.resolve_credential(default.as_ref()),
            default.clone()
        );

        session.set_credential(ApiKey::new("session-key"));
        assert_eq!(
            session.resolve_credential(default.as_ref()).unwrap().expose(),
            "session-key"
        );
    }

    #[test]
    fn test_no_credential_anywhere_resolves_to_none() {
        let session = Session::new();
        assert!(!session.has_credential());
        assert!(session.resolve_credential(None).is_none());
    }

    #[tokio::test]
    async fn test_results_are_keyed_per_task() {
        let store = SessionStore::new();
        let id = store.create().await;

        let gaps = store.clone();
        let tips = store.clone();
        let (a, b) = tokio::join!(
            gaps.write(id, |s| s.record_result(
                TaskKind::GapAnalysis,
                AnalysisResult::Fallback {
                    label: "gap_analysis".to_string(),
                    raw_text: "gaps".to_string(),
                }
            )),
            tips.write(id, |s| s.record_result(
                TaskKind::Tips,
                AnalysisResult::Fallback {
                    label: "tips".to_string(),
                    raw_text: "tips".to_string(),
                }
            )),
        );
        a.unwrap();
        b.unwrap();

        let kinds: Vec<TaskKind> = store
            .read(id, |s| s.results().keys().copied().collect())
            .await
            .unwrap();
        assert_eq!(kinds, vec![TaskKind::GapAnalysis, TaskKind::Tips]);
    }

    #[tokio::test]
    async fn test_ended_session_is_gone() {
        let store = SessionStore::new();
        let id = store.create().await;
        store
            .write(id, |s| s.profile.add_skill("python", 7).map(|_| ()))
            .await
            .unwrap()
            .unwrap();

        assert!(store.end(id).await);
        assert!(!store.end(id).await);
        assert!(matches!(
            store.read(id, |s| s.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_prune_drops_only_sessions_idle_before_cutoff() {
        let store = SessionStore::new();
        let id = store.create().await;

        assert_eq!(store.prune_idle(Duration::hours(1)).await, 0);
        assert!(store.read(id, |_| ()).await.is_ok());

        let cutoff = Utc::now() + Duration::seconds(1);
        assert_eq!(store.prune_inactive_since(cutoff).await, 1);
        assert!(matches!(
            store.read(id, |_| ()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_access_keeps_session_alive() {
        let store = SessionStore::new();
        let id = store.create().await;
        let cutoff = Utc::now() + Duration::milliseconds(5);

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        store.read(id, |_| ()).await.unwrap();

        assert_eq!(store.prune_inactive_since(cutoff).await, 0);
    }
}
