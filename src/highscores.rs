//! Best score persistence
//!
//! A single integer under `bestScore`, read once at startup and written
//! whenever a run beats it.

use crate::consts::BEST_SCORE_KEY;
use crate::platform::PersistentStore;

/// Loads and saves the best score
pub struct BestScore;

impl BestScore {
    /// Stored best score; missing, garbled or negative values read as 0
    pub fn load(store: &impl PersistentStore) -> u32 {
        let raw = store.get_int(BEST_SCORE_KEY, 0);
        let best = u32::try_from(raw).unwrap_or(0);
        log::info!("Loaded best score: {}", best);
        best
    }

    pub fn save(store: &mut impl PersistentStore, best: u32) {
        store.set_int(BEST_SCORE_KEY, i64::from(best));
        log::info!("Best score saved ({})", best);
    }
}
