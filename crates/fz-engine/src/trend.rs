use fz_types::Record;

/// Direction of change of a metric between two records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Unchanged,
}

/// Compare a current value against a reference value
pub fn compare(current: u64, reference: u64) -> Trend {
    match current.cmp(&reference) {
        std::cmp::Ordering::Greater => Trend::Up,
        std::cmp::Ordering::Less => Trend::Down,
        std::cmp::Ordering::Equal => Trend::Unchanged,
    }
}

/// Non-negative increase of a metric since the baseline.
/// Regressions render as zero.
pub fn gain(latest: u64, baseline: u64) -> u64 {
    latest.saturating_sub(baseline)
}

/// Trends shown on the live status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrendSet {
    pub workers: Trend,
    pub corpus: Trend,
    pub cover: Trend,
}

impl TrendSet {
    /// Trends of `current` relative to the previously rendered record.
    /// Everything is unchanged when there is nothing to compare against.
    pub fn between(current: &Record, previous: Option<&Record>) -> Self {
        let Some(previous) = previous else {
            return Self::default();
        };

        Self {
            workers: compare(current.workers, previous.workers),
            corpus: compare(current.corpus, previous.corpus),
            cover: compare(current.cover, previous.cover),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fz_testing::fixtures::StatusLine;

    #[test]
    fn test_compare_is_antisymmetric() {
        let values = [0, 1, 2, 205, u64::MAX];

        for &a in &values {
            assert_eq!(compare(a, a), Trend::Unchanged);

            for &b in &values {
                match compare(a, b) {
                    Trend::Up => assert_eq!(compare(b, a), Trend::Down),
                    Trend::Down => assert_eq!(compare(b, a), Trend::Up),
                    Trend::Unchanged => assert_eq!(a, b),
                }
            }
        }
    }

    #[test]
    fn test_gain_never_negative() {
        assert_eq!(gain(10, 4), 6);
        assert_eq!(gain(4, 4), 0);
        assert_eq!(gain(4, 10), 0);
    }

    #[test]
    fn test_trend_set_without_previous() {
        let current = crate::parse(&StatusLine::new().workers(8).build()).unwrap();
        assert_eq!(TrendSet::between(&current, None), TrendSet::default());
    }

    #[test]
    fn test_trend_set_tracks_each_metric() {
        let previous = crate::parse(&StatusLine::new().workers(8).corpus(200).cover(100).build())
            .unwrap();
        let current = crate::parse(&StatusLine::new().workers(6).corpus(200).cover(120).build())
            .unwrap();

        let trends = TrendSet::between(&current, Some(&previous));
        assert_eq!(trends.workers, Trend::Down);
        assert_eq!(trends.corpus, Trend::Unchanged);
        assert_eq!(trends.cover, Trend::Up);
    }
}
