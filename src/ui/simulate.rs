use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::{Metric, MetricValue};

/// Cosmetic jitter over the headline metrics
///
/// Runs on a fixed interval for the lifetime of a `watch` session and has no
/// coupling to the progress engine. Percent metrics drift by -1/0/+1 clamped
/// to [0, 100]; counts drift by a uniform delta in [-500, 500) clamped at 0.
pub struct Jitter {
    rng: StdRng,
}

/// Default tick interval, in seconds
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

impl Jitter {
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Seeded constructor for deterministic runs
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Apply one jitter step to every metric in place
    pub fn step(&mut self, metrics: &mut [Metric]) {
        for metric in metrics.iter_mut() {
            match &mut metric.value {
                MetricValue::Percent(pct) => {
                    let delta: i16 = self.rng.random_range(-1..=1);
                    let next = (*pct as i16 + delta).clamp(0, 100);
                    *pct = next as u8;
                }
                MetricValue::Count(count) => {
                    let delta: i64 = self.rng.random_range(-500..500);
                    *count = (*count + delta).max(0);
                }
            }
            debug!("jitter: {} -> {:?}", metric.label, metric.value);
        }
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self::new()
    }
}
