use chrono::NaiveDateTime;
use std::fmt;
use std::time::Duration;

/// One parsed go-fuzz status line.
///
/// A `Record` is only ever produced whole: if any required field fails to
/// convert, the parser returns an error instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub timestamp: NaiveDateTime,
    pub workers: u64,
    pub corpus: u64,
    /// Time since the corpus last grew, as reported by go-fuzz ("(1m45s ago)").
    /// Older go-fuzz builds omit it.
    pub corpus_age: Option<Duration>,
    pub crashers: u64,
    pub restarts: u64,
    pub execs: u64,
    pub execs_per_sec: u64,
    pub cover: u64,
    pub uptime: Option<Duration>,
}

/// Named fields of a status line, used in conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Timestamp,
    Workers,
    Corpus,
    CorpusAge,
    Crashers,
    Restarts,
    Execs,
    ExecsPerSec,
    Cover,
    Uptime,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Timestamp => "date and time",
            Field::Workers => "workers",
            Field::Corpus => "corpus",
            Field::CorpusAge => "corpus age",
            Field::Crashers => "crashers",
            Field::Restarts => "restarts",
            Field::Execs => "execs",
            Field::ExecsPerSec => "execs per sec",
            Field::Cover => "cover",
            Field::Uptime => "uptime",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
