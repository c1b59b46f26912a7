use crate::trend::gain;
use fz_types::Record;
use std::time::Duration;

/// End-of-run comparison between the baseline and the latest record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub elapsed: Duration,
    pub execs: u64,
    pub corpus_gain: u64,
    pub crashers_gain: u64,
    pub cover_gain: u64,
}

impl Summary {
    pub fn between(baseline: &Record, latest: &Record, elapsed: Duration) -> Self {
        Self {
            elapsed,
            execs: latest.execs,
            corpus_gain: gain(latest.corpus, baseline.corpus),
            crashers_gain: gain(latest.crashers, baseline.crashers),
            cover_gain: gain(latest.cover, baseline.cover),
        }
    }
}
