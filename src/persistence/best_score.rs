//! Persisted best score
//!
//! Stored as plain integer text under [`BEST_SCORE_KEY`]. Read once at
//! startup, written only when a round beats it.

use super::KeyValueStore;
use crate::consts::BEST_SCORE_KEY;

/// Best score with its backing store
#[derive(Debug)]
pub struct BestScore<S: KeyValueStore> {
    store: S,
    value: u64,
}

impl<S: KeyValueStore> BestScore<S> {
    /// Read the stored best; absent or unparsable data counts as 0
    pub fn load(store: S) -> Self {
        let value = match store.get(BEST_SCORE_KEY) {
            Ok(Some(raw)) => parse_best(&raw),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("Could not read best score: {e}");
                0
            }
        };
        log::info!("Best score: {value}");
        Self { store, value }
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a finished round. Returns true when it set a new best.
    ///
    /// The in-memory value is raised even if the write fails.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        if let Err(e) = self.store.set(BEST_SCORE_KEY, &score.to_string()) {
            log::warn!("Could not save best score: {e}");
        }
        true
    }
}

fn parse_best(raw: &str) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(v) => v,
        Err(_) => {
            log::warn!("Ignoring unparsable best score {raw:?}");
            0
        }
    }
}
