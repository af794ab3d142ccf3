use serde::{Deserialize, Serialize};

use crate::session::QuizResults;

/// localStorage key the browser build persists under.
pub const STATS_KEY: &str = "quizStats";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    StorageUnavailable,
    Corrupt(String),
    Io(String),
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::StorageUnavailable => write!(f, "browser storage unavailable"),
            StatsError::Corrupt(msg) => write!(f, "stats storage corrupt: {msg}"),
            StatsError::Io(msg) => write!(f, "stats storage error: {msg}"),
        }
    }
}

impl std::error::Error for StatsError {}

/// Lifetime quiz statistics carried across runs.
///
/// `streak` counts consecutive perfect runs and resets on the first
/// missed question.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizStats {
    pub streak: u32,
    pub best_score: u32,
    pub total_quizzes: u32,
}

impl QuizStats {
    pub fn record(&mut self, results: &QuizResults) {
        self.total_quizzes += 1;
        self.best_score = self.best_score.max(results.score);
        if results.correct == results.total {
            self.streak += 1;
        } else {
            self.streak = 0;
        }
    }
}

pub trait StatsStore {
    fn load(&self) -> Result<QuizStats, StatsError>;
    fn save(&mut self, stats: &QuizStats) -> Result<(), StatsError>;
}

/// Folds a finished run into whatever the store already holds and
/// writes the result back. A missing or blank record starts from zero.
pub fn record_run(
    store: &mut dyn StatsStore,
    results: &QuizResults,
) -> Result<QuizStats, StatsError> {
    let mut stats = store.load()?;
    stats.record(results);
    store.save(&stats)?;
    Ok(stats)
}

#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    raw: Option<String>,
}

impl MemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a raw payload, as if it had been persisted earlier.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

impl StatsStore for MemoryStatsStore {
    fn load(&self) -> Result<QuizStats, StatsError> {
        let Some(raw) = &self.raw else {
            return Ok(QuizStats::default());
        };
        if raw.trim().is_empty() {
            return Ok(QuizStats::default());
        }
        serde_json::from_str(raw).map_err(|e| StatsError::Corrupt(e.to_string()))
    }

    fn save(&mut self, stats: &QuizStats) -> Result<(), StatsError> {
        let raw = serde_json::to_string(stats).map_err(|e| StatsError::Io(e.to_string()))?;
        self.raw = Some(raw);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_storage {
    use super::{QuizStats, STATS_KEY, StatsError, StatsStore};

    #[derive(Debug)]
    pub struct LocalStorageStatsStore;

    impl LocalStorageStatsStore {
        pub fn new() -> Result<Self, StatsError> {
            // Probe storage up front so the caller can fall back early.
            window_local_storage()?;
            Ok(Self)
        }
    }

    impl StatsStore for LocalStorageStatsStore {
        fn load(&self) -> Result<QuizStats, StatsError> {
            let storage = window_local_storage()?;
            let raw = storage
                .get_item(STATS_KEY)
                .map_err(|e| StatsError::Io(format!("get_item(stats) failed: {:?}", e)))?;

            let Some(raw) = raw else {
                return Ok(QuizStats::default());
            };
            if raw.trim().is_empty() {
                return Ok(QuizStats::default());
            }
            serde_json::from_str(&raw).map_err(|e| StatsError::Corrupt(e.to_string()))
        }

        fn save(&mut self, stats: &QuizStats) -> Result<(), StatsError> {
            let storage = window_local_storage()?;
            let raw = serde_json::to_string(stats).map_err(|e| StatsError::Io(e.to_string()))?;
            storage
                .set_item(STATS_KEY, &raw)
                .map_err(|e| StatsError::Io(format!("set_item(stats) failed: {:?}", e)))?;
            Ok(())
        }
    }

    fn window_local_storage() -> Result<web_sys::Storage, StatsError> {
        let win = web_sys::window().ok_or(StatsError::StorageUnavailable)?;
        win.local_storage()
            .map_err(|e| StatsError::Io(format!("localStorage error: {:?}", e)))?
            .ok_or(StatsError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_storage::LocalStorageStatsStore;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct LocalStorageStatsStore;

#[cfg(not(target_arch = "wasm32"))]
impl LocalStorageStatsStore {
    pub fn new() -> Result<Self, StatsError> {
        Err(StatsError::StorageUnavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StatsStore for LocalStorageStatsStore {
    fn load(&self) -> Result<QuizStats, StatsError> {
        Err(StatsError::StorageUnavailable)
    }

    fn save(&mut self, _stats: &QuizStats) -> Result<(), StatsError> {
        Err(StatsError::StorageUnavailable)
    }
}
