//! Process-wide session registry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use tracing::{debug, info, instrument};

use super::session::{Session, SessionId};
use crate::core::{ArcadeConfig, GameRng};

/// Keyed sessions, each behind its own mutex.
///
/// The outer lock only guards the map and is held just long enough to look
/// up or insert a slot. Work on a session happens under that session's lock,
/// so different sessions never wait on each other while actions on one
/// session run strictly one at a time.
#[derive(Debug)]
pub struct SessionStore {
    config: ArcadeConfig,
    root_rng: Mutex<GameRng>,
    sessions: Mutex<FxHashMap<SessionId, Arc<Mutex<Session>>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionStore {
    /// An empty store. Seeded configs make every session reproducible.
    #[must_use]
    pub fn new(config: ArcadeConfig) -> Self {
        let root_rng = GameRng::from_seed_or_entropy(config.seed);
        info!(seed = root_rng.seed(), "Session store created");
        Self {
            config,
            root_rng: Mutex::new(root_rng),
            sessions: Mutex::new(FxHashMap::default()),
        }
    }

    /// Configuration handed to every new session.
    #[must_use]
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    /// The session for `id`, created on first use.
    #[instrument(skip(self), fields(session_id = %id))]
    pub fn session(&self, id: &SessionId) -> Arc<Mutex<Session>> {
        let mut sessions = lock(&self.sessions);
        if let Some(existing) = sessions.get(id) {
            return Arc::clone(existing);
        }

        let rng = lock(&self.root_rng).fork();
        debug!(rng_seed = rng.seed(), "Creating session");
        let session = Arc::new(Mutex::new(Session::new(id.clone(), self.config.clone(), rng)));
        sessions.insert(id.clone(), Arc::clone(&session));
        session
    }

    /// Run `f` with exclusive access to the session for `id`.
    pub fn with_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> R {
        let session = self.session(id);
        let mut guard = lock(&session);
        f(&mut guard)
    }

    /// True once `id` has been used.
    #[must_use]
    pub fn contains(&self, id: &SessionId) -> bool {
        lock(&self.sessions).contains_key(id)
    }

    /// Drop a session and every engine in it.
    pub fn remove(&self, id: &SessionId) -> bool {
        let removed = lock(&self.sessions).remove(id).is_some();
        if removed {
            info!(session_id = %id, "Session removed");
        }
        removed
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    /// True with no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.sessions).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;

    fn store() -> SessionStore {
        SessionStore::new(ArcadeConfig::default().with_seed(7))
    }

    #[test]
    fn test_sessions_are_created_lazily() {
        let store = store();
        let alice = SessionId::from("alice");
        assert!(store.is_empty());
        assert!(!store.contains(&alice));

        store.with_session(&alice, |s| assert!(!s.is_started(Route::Bagels)));
        assert!(store.contains(&alice));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_id_same_session() {
        let store = store();
        let id = SessionId::from("bob");
        let first = store.with_session(&id, |s| s.bagels().0.secret().to_string());
        let again = store.with_session(&id, |s| s.bagels().0.secret().to_string());
        assert_eq!(first, again);
        assert!(Arc::ptr_eq(&store.session(&id), &store.session(&id)));
    }

    #[test]
    fn test_seeded_stores_agree() {
        let a = store();
        let b = store();
        let id = SessionId::from("carol");
        let secret_a = a.with_session(&id, |s| s.hangman().0.secret().to_string());
        let secret_b = b.with_session(&id, |s| s.hangman().0.secret().to_string());
        assert_eq!(secret_a, secret_b);
    }

    #[test]
    fn test_remove() {
        let store = store();
        let id = SessionId::from("dave");
        store.with_session(&id, |s| {
            s.hacking();
        });
        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.is_empty());
    }
}
