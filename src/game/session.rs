//! Session-id → game mapping behind a single lock.
//!
//! Every operation takes the same mutex, so two requests for one session can
//! neither create two games nor interleave a read-modify-write. Use
//! [`SessionStore::update`] to run a whole round inside one critical section.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::state::GameState;

/// In-memory games keyed by opaque session id. Entries live for the process
/// lifetime unless removed.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, GameState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, GameState>> {
        // A panic inside a critical section leaves at worst one half-applied
        // guess behind; keep serving.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return a copy of the session's game, creating it with `factory` if
    /// the session has none. The factory runs at most once per session.
    pub fn get_or_create<F>(&self, session_id: &str, factory: F) -> GameState
    where
        F: FnOnce() -> GameState,
    {
        self.lock()
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!(session_id, "game created");
                factory()
            })
            .clone()
    }

    /// Store `state` for the session, replacing any existing game.
    pub fn put(&self, session_id: &str, state: GameState) {
        self.lock().insert(session_id.to_string(), state);
    }

    pub fn get(&self, session_id: &str) -> Option<GameState> {
        self.lock().get(session_id).cloned()
    }

    /// Resolve or create the session's game and apply `f` to it in place,
    /// all under one lock acquisition. A failing factory stores nothing.
    pub fn update<T, E, C, F>(&self, session_id: &str, factory: C, f: F) -> Result<T, E>
    where
        C: FnOnce() -> Result<GameState, E>,
        F: FnOnce(&mut GameState) -> Result<T, E>,
    {
        let mut sessions = self.lock();
        let state = match sessions.entry(session_id.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let state = factory()?;
                debug!(session_id, "game created");
                entry.insert(state)
            }
        };
        f(state)
    }

    /// Drop the session's game; the next round starts a new one.
    pub fn remove(&self, session_id: &str) -> Option<GameState> {
        self.lock().remove(session_id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{GuessOutcome, MAX_ATTEMPTS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn game(word: &str) -> GameState {
        GameState::create(word, 0, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn get_or_create_creates_once() {
        let store = SessionStore::new();
        let calls = AtomicUsize::new(0);
        let make = || {
            calls.fetch_add(1, Ordering::SeqCst);
            game("CAT")
        };

        let first = store.get_or_create("s1", make);
        let second = store.get_or_create("s1", || game("DOG"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.secret_word(), "CAT");
        assert_eq!(second.secret_word(), "CAT");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn put_overwrites() {
        let store = SessionStore::new();
        let mut g = store.get_or_create("s1", || game("CAT"));
        g.apply_guess("a");
        store.put("s1", g);
        assert_eq!(store.get("s1").unwrap().masked_word(), "_A_");

        store.put("s1", game("DOG"));
        assert_eq!(store.get("s1").unwrap().secret_word(), "DOG");
    }

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new();
        store.get_or_create("alice", || game("CAT"));
        store.get_or_create("bob", || game("CAT"));

        store
            .update::<_, (), _, _>("alice", || Ok(game("X")), |g| {
                g.apply_guess("z");
                Ok(())
            })
            .unwrap();

        assert_eq!(store.get("alice").unwrap().attempts_remaining(), MAX_ATTEMPTS - 1);
        assert_eq!(store.get("bob").unwrap().attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_mutates_in_place() {
        let store = SessionStore::new();
        let outcome = store
            .update::<_, (), _, _>("s", || Ok(game("CAT")), |g| Ok(g.apply_guess("c")))
            .unwrap();
        assert_eq!(outcome, GuessOutcome::Correct);
        assert_eq!(store.get("s").unwrap().masked_word(), "C__");
    }

    #[test]
    fn failing_factory_stores_nothing() {
        let store = SessionStore::new();
        let result: Result<(), &str> = store.update("s", || Err("no words"), |_| Ok(()));
        assert_eq!(result, Err("no words"));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_discards_game() {
        let store = SessionStore::new();
        store.get_or_create("s", || game("CAT"));
        assert!(store.remove("s").is_some());
        assert!(store.get("s").is_none());
        assert!(store.remove("s").is_none());
    }

    #[test]
    fn concurrent_first_access_creates_one_game() {
        let store = SessionStore::new();
        let calls = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    store.get_or_create("shared", || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        game("CAT")
                    });
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let store = SessionStore::new();
        let word = "ABCDEFGHIJKLMNOP";
        store.get_or_create("shared", || game(word));

        std::thread::scope(|scope| {
            for letter in word.chars() {
                let store = &store;
                scope.spawn(move || {
                    store
                        .update::<_, (), _, _>("shared", || Ok(game("X")), |g| {
                            g.apply_guess(&letter.to_string());
                            Ok(())
                        })
                        .unwrap();
                });
            }
        });

        let g = store.get("shared").unwrap();
        assert_eq!(g.masked_word(), word);
        assert!(g.is_won());
    }
}
