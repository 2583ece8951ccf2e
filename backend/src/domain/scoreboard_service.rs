//! Scoreboard service: one shared badminton game, saved after every change.
//!
//! The game is loaded once when the service starts. Each successful point or
//! undo overwrites the saved snapshot as a whole; reset deletes it. A failed
//! save is logged and the in-memory game carries on.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info, warn};

use crate::domain::models::match_state::{MatchState, Team};
use crate::storage::snapshot;
use crate::storage::KeyValueStore;

/// Storage key of the saved game
pub const SCORE_STORAGE_KEY: &str = "badmintonScore";

#[derive(Clone)]
pub struct ScoreboardService {
    state: Arc<Mutex<MatchState>>,
    store: Arc<dyn KeyValueStore>,
}

impl ScoreboardService {
    /// Start from the saved game, or a fresh one when none can be read
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let state = match store.get(SCORE_STORAGE_KEY) {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(state) => {
                    info!(
                        "Restored saved game at {}-{} ({} points)",
                        state.score_a(),
                        state.score_b(),
                        state.history().len()
                    );
                    state
                }
                Err(e) => {
                    warn!("Error loading saved score, starting a new game: {}", e);
                    MatchState::new()
                }
            },
            Ok(None) => MatchState::new(),
            Err(e) => {
                error!("Failed to read saved score: {}", e);
                MatchState::new()
            }
        };

        Self {
            state: Arc::new(Mutex::new(state)),
            store,
        }
    }

    pub fn current(&self) -> MatchState {
        self.lock().clone()
    }

    pub fn award_point(&self, team: Team) -> MatchState {
        let mut state = self.lock();
        if state.award_point(team) {
            info!("Point to team {}: {}-{}", team, state.score_a(), state.score_b());
            if let Some(winner) = state.winner() {
                info!("Game over, team {} wins", winner);
            }
            self.persist(&state);
        }
        state.clone()
    }

    pub fn undo(&self) -> MatchState {
        let mut state = self.lock();
        if state.undo() {
            info!("Undo: back to {}-{}", state.score_a(), state.score_b());
            self.persist(&state);
        }
        state.clone()
    }

    pub fn reset(&self) -> MatchState {
        let mut state = self.lock();
        state.reset();
        if let Err(e) = self.store.remove(SCORE_STORAGE_KEY) {
            error!("Failed to delete saved score: {}", e);
        }
        info!("Scoreboard reset");
        state.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MatchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Blocking store I/O on the calling thread with the lock held, so saves
    // land in the same order as the changes they record.
    fn persist(&self, state: &MatchState) {
        let result = snapshot::encode(state)
            .map_err(anyhow::Error::from)
            .and_then(|raw| self.store.set(SCORE_STORAGE_KEY, &raw));
        if let Err(e) = result {
            error!("Failed to save score: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    fn saved(store: &InMemoryStore) -> Option<MatchState> {
        store
            .get(SCORE_STORAGE_KEY)
            .unwrap()
            .map(|raw| snapshot::decode(&raw).unwrap())
    }

    #[test]
    fn test_every_point_is_written_through() {
        let store = Arc::new(InMemoryStore::new());
        let service = ScoreboardService::load(store.clone());

        let state = service.award_point(Team::A);
        assert_eq!(saved(&store), Some(state));

        let state = service.award_point(Team::B);
        assert_eq!(saved(&store), Some(state.clone()));
        assert_eq!((state.score_a(), state.score_b()), (1, 1));
    }

    #[test]
    fn test_reload_restores_game() {
        let store = Arc::new(InMemoryStore::new());
        let service = ScoreboardService::load(store.clone());
        for _ in 0..21 {
            service.award_point(Team::B);
        }

        let reloaded = ScoreboardService::load(store);
        let state = reloaded.current();
        assert_eq!(state.winner(), Some(Team::B));
        assert_eq!(state.history().len(), 21);
    }

    #[test]
    fn test_undo_persists_and_reopens_game() {
        let store = Arc::new(InMemoryStore::new());
        let service = ScoreboardService::load(store.clone());
        for _ in 0..21 {
            service.award_point(Team::A);
        }

        let state = service.undo();
        assert!(!state.is_over());
        assert_eq!(state.score_a(), 20);
        assert_eq!(saved(&store), Some(state));
    }

    #[test]
    fn test_reset_deletes_snapshot() {
        let store = Arc::new(InMemoryStore::new());
        let service = ScoreboardService::load(store.clone());
        service.award_point(Team::A);

        let state = service.reset();
        assert_eq!(state, MatchState::new());
        assert_eq!(store.get(SCORE_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_noop_operations_do_not_write() {
        let store = Arc::new(InMemoryStore::new());
        let service = ScoreboardService::load(store.clone());

        service.undo();
        assert_eq!(store.get(SCORE_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_snapshot_starts_fresh() {
        let store = Arc::new(InMemoryStore::new());
        store.set(SCORE_STORAGE_KEY, "{broken").unwrap();

        let service = ScoreboardService::load(store);
        assert_eq!(service.current(), MatchState::new());
    }

    #[test]
    fn test_inconsistent_snapshot_starts_fresh() {
        let store = Arc::new(InMemoryStore::new());
        store
            .set(
                SCORE_STORAGE_KEY,
                r#"{"version":1,"state":{"score_a":4294967295,"score_b":0,"is_over":false,"winner":null,"history":[]}}"#,
            )
            .unwrap();

        let service = ScoreboardService::load(store);
        assert_eq!(service.current(), MatchState::new());
        assert_eq!(service.award_point(Team::A).score_a(), 1);
    }

    #[test]
    fn test_legacy_snapshot_is_loaded() {
        let store = Arc::new(InMemoryStore::new());
        store
            .set(
                SCORE_STORAGE_KEY,
                r#"{"scoreA":1,"scoreB":0,"gameOver":false,"winner":null,"history":[{"scoreA":1,"scoreB":0,"team":"A"}]}"#,
            )
            .unwrap();

        let service = ScoreboardService::load(store);
        let state = service.undo();
        assert_eq!(state, MatchState::new());
    }
}
