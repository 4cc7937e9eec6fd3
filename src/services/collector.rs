use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::models::types::{MatchRow, PublicMatch};
use crate::services::api::MatchSource;
use crate::utils::storage::MatchStorage;

// Counts completed requests, sleeps after every `per_minute` of them.
#[derive(Debug)]
pub struct Pacer {
    per_minute: u32,
    cooldown: Duration,
    sent: u32,
    cooldowns_taken: u32,
}

impl Pacer {
    pub fn new(per_minute: u32, cooldown: Duration) -> Self {
        Self {
            per_minute,
            cooldown,
            sent: 0,
            cooldowns_taken: 0,
        }
    }

    pub fn request_done(&mut self) {
        self.sent += 1;
        if self.per_minute > 0 && self.sent % self.per_minute == 0 {
            println!(
                "Pause de {} secondes (limite de requêtes par minute)...",
                self.cooldown.as_secs()
            );
            self.cooldowns_taken += 1;
            thread::sleep(self.cooldown);
        }
    }

    pub fn cooldowns_taken(&self) -> u32 {
        self.cooldowns_taken
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub collected: u64,
    pub skipped: u64,
    pub requests: u32,
    pub empty_batches: u32,
}

enum Verdict {
    // Passed every filter; carries the verified start_time.
    Accept(i64),
    TooOld,
    Duplicate,
    LowTier,
}

fn evaluate(m: &PublicMatch, config: &Config, known: &HashSet<u64>) -> Verdict {
    let Some(start_time) = m.start_time.filter(|&t| t >= config.patch_start) else {
        return Verdict::TooOld;
    };
    if known.contains(&m.match_id) {
        return Verdict::Duplicate;
    }
    if m.rank_tier() < config.min_rank_tier {
        return Verdict::LowTier;
    }
    Verdict::Accept(start_time)
}

// Exactly `daily_limit` fetches, paginating downwards from the newest
// matches. An empty batch (exhausted feed or failed request, the source does
// not tell them apart) pauses and retries the same cursor. Only a storage
// failure aborts the run.
pub fn run<S: MatchSource>(
    config: &Config,
    source: &S,
    storage: &mut MatchStorage,
    known: &mut HashSet<u64>,
) -> Result<RunReport, String> {
    let mut report = RunReport::default();
    let mut pacer = Pacer::new(config.requests_per_min, config.minute_cooldown);
    let mut last_match_id: Option<u64> = None;

    for request in 0..config.daily_limit {
        let batch = source.fetch_batch(last_match_id);
        report.requests += 1;

        if batch.is_empty() {
            report.empty_batches += 1;
            println!(
                "Aucune donnée, attente de {} secondes...",
                config.empty_batch_cooldown.as_secs()
            );
            thread::sleep(config.empty_batch_cooldown);
        } else {
            for m in &batch {
                match evaluate(m, config, known) {
                    Verdict::Accept(start_time) => {
                        storage.append(&MatchRow::from_match(m, start_time))?;
                        known.insert(m.match_id);
                        report.collected += 1;
                    }
                    Verdict::Duplicate => report.skipped += 1,
                    Verdict::TooOld | Verdict::LowTier => {}
                }
            }

            // The feed is descending, so the oldest id in the batch is the
            // cursor for the next page.
            last_match_id = batch.iter().map(|m| m.match_id).min();

            println!(
                "Collecté {} nouveaux, ignoré {}, requêtes: {}/{}",
                report.collected,
                report.skipped,
                request + 1,
                config.daily_limit
            );
        }

        pacer.request_done();
    }

    Ok(report)
}
