use fz_engine::{Summary, TrendSet};
use fz_types::Record;
use std::time::{Duration, Instant};

/// Everything the live status line needs for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveUpdate {
    pub record: Record,
    pub trends: TrendSet,
    /// Time since the controller started reading
    pub elapsed: Duration,
    /// Time since the corpus size last changed
    pub corpus_elapsed: Duration,
}

/// State carried between records of one run.
///
/// Only the controller mutates it. Records are replaced whole, never edited
/// in place.
#[derive(Debug, Clone)]
pub struct StreamState {
    previous: Option<Record>,
    baseline: Option<Record>,
    started_at: Instant,
    corpus_grown_at: Instant,
    records_seen: u64,
}

impl StreamState {
    pub fn new(now: Instant) -> Self {
        Self {
            previous: None,
            baseline: None,
            started_at: now,
            corpus_grown_at: now,
            records_seen: 0,
        }
    }

    /// Fold a freshly parsed record into the state
    pub fn apply(&mut self, record: Record, now: Instant) -> LiveUpdate {
        let trends = TrendSet::between(&record, self.previous.as_ref());

        if self.previous.as_ref().map(|prev| prev.corpus) != Some(record.corpus) {
            self.corpus_grown_at = now;
        }

        // go-fuzz reports zero coverage while it is still loading the corpus
        if self.baseline.is_none() && record.cover > 0 {
            tracing::debug!(cover = record.cover, corpus = record.corpus, "baseline selected");
            self.baseline = Some(record.clone());
        }

        self.records_seen += 1;
        self.previous = Some(record.clone());

        LiveUpdate {
            record,
            trends,
            elapsed: now.saturating_duration_since(self.started_at),
            corpus_elapsed: now.saturating_duration_since(self.corpus_grown_at),
        }
    }

    /// Compare the baseline with the latest record.
    ///
    /// Returns `None` before the first record. Falls back to the latest record
    /// as baseline when no record has reported coverage yet.
    pub fn summary(&self, now: Instant) -> Option<Summary> {
        let latest = self.previous.as_ref()?;
        let baseline = self.baseline.as_ref().unwrap_or(latest);

        Some(Summary::between(
            baseline,
            latest,
            now.saturating_duration_since(self.started_at),
        ))
    }

    pub fn previous(&self) -> Option<&Record> {
        self.previous.as_ref()
    }

    pub fn baseline(&self) -> Option<&Record> {
        self.baseline.as_ref()
    }

    pub fn records_seen(&self) -> u64 {
        self.records_seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fz_engine::{Trend, parse};
    use fz_testing::StatusLine;

    fn record(line: StatusLine) -> Record {
        parse(&line.build()).unwrap()
    }

    #[test]
    fn test_empty_state_has_no_summary() {
        let state = StreamState::new(Instant::now());
        assert!(state.summary(Instant::now()).is_none());
        assert!(state.previous().is_none());
        assert_eq!(state.records_seen(), 0);
    }

    #[test]
    fn test_first_record_has_unchanged_trends() {
        let start = Instant::now();
        let mut state = StreamState::new(start);

        let update = state.apply(record(StatusLine::new().workers(8)), start);
        assert_eq!(update.trends, TrendSet::default());
        assert_eq!(update.trends.workers, Trend::Unchanged);
    }

    #[test]
    fn test_baseline_waits_for_coverage() {
        let start = Instant::now();
        let mut state = StreamState::new(start);

        state.apply(record(StatusLine::new().cover(0)), start);
        assert!(state.baseline().is_none());

        state.apply(record(StatusLine::new().cover(50).corpus(210)), start);
        state.apply(record(StatusLine::new().cover(90).corpus(240)), start);

        let baseline = state.baseline().unwrap();
        assert_eq!(baseline.cover, 50);
        assert_eq!(state.records_seen(), 3);
    }

    #[test]
    fn test_summary_falls_back_to_latest_without_baseline() {
        let start = Instant::now();
        let mut state = StreamState::new(start);
        state.apply(record(StatusLine::new().cover(0).crashers(2)), start);

        let summary = state.summary(start + Duration::from_secs(10)).unwrap();
        assert_eq!(summary.crashers_gain, 0);
        assert_eq!(summary.cover_gain, 0);
        assert_eq!(summary.elapsed, Duration::from_secs(10));
    }

    #[test]
    fn test_summary_uses_baseline_and_latest() {
        let start = Instant::now();
        let mut state = StreamState::new(start);
        state.apply(record(StatusLine::new().cover(10).corpus(100)), start);
        state.apply(record(StatusLine::new().cover(25).corpus(130).crashers(1)), start);

        let summary = state.summary(start).unwrap();
        assert_eq!(summary.cover_gain, 15);
        assert_eq!(summary.corpus_gain, 30);
        assert_eq!(summary.crashers_gain, 1);
    }

    #[test]
    fn test_corpus_anchor_resets_on_change() {
        let start = Instant::now();
        let mut state = StreamState::new(start);

        state.apply(record(StatusLine::new().corpus(100)), start);

        let later = start + Duration::from_secs(30);
        let update = state.apply(record(StatusLine::new().corpus(100)), later);
        assert_eq!(update.corpus_elapsed, Duration::from_secs(30));
        assert_eq!(update.elapsed, Duration::from_secs(30));

        let grown = start + Duration::from_secs(45);
        let update = state.apply(record(StatusLine::new().corpus(101)), grown);
        assert_eq!(update.corpus_elapsed, Duration::ZERO);
        assert_eq!(update.trends.corpus, Trend::Up);
    }
}
