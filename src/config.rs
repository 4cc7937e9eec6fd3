use std::env;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{TimeZone, Utc};

// Collection parameters, fixed for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub daily_limit: u32,
    pub requests_per_min: u32,
    // Matches that started before this epoch second are discarded.
    pub patch_start: i64,
    // avg_rank_tier below this is rejected; absent tier counts as 0.
    pub min_rank_tier: u32,
    pub empty_batch_cooldown: Duration,
    pub minute_cooldown: Duration,
    pub file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_limit: 2000,
            requests_per_min: 60,
            // Patch 7.39d went live 2025-08-05; older matches are irrelevant.
            patch_start: Utc
                .with_ymd_and_hms(2025, 8, 5, 0, 0, 0)
                .single()
                .map(|t| t.timestamp())
                .unwrap_or(1_754_352_000),
            min_rank_tier: 60,
            empty_batch_cooldown: Duration::from_secs(60),
            minute_cooldown: Duration::from_secs(30),
            file_path: default_store_path(),
        }
    }
}

// The store lives next to the binary, so a scheduled run keeps appending to
// the same file no matter which directory it was launched from.
fn default_store_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("main.csv")))
        .unwrap_or_else(|| PathBuf::from("main.csv"))
}

impl Config {
    // `FILE_PATH` in the environment (or a `.env` file) relocates the store.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::default();
        if let Ok(path) = env::var("FILE_PATH") {
            config.file_path = PathBuf::from(path);
        }
        config
    }
}
