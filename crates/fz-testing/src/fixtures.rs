//! go-fuzz status line fixtures.

/// Status line as printed by go-fuzz after a short run
pub const SAMPLE_LINE: &str = "2021/09/21 21:46:20 workers: 8, corpus: 205 (1m45s ago), crashers: 2, restarts: 1/9710, execs: 4078324 (38839/sec), cover: 225, uptime: 1m45s";

/// Line go-fuzz prints when it receives SIGINT
pub const SHUTDOWN_LINE: &str = "2021/09/21 21:50:01 shutting down...";

/// Builder for well-formed status lines.
///
/// # Example
/// ```
/// use fz_testing::StatusLine;
///
/// let line = StatusLine::new().workers(4).cover(120).build();
/// assert!(line.contains("workers: 4"));
/// assert!(line.contains("cover: 120"));
/// ```
#[derive(Debug, Clone)]
pub struct StatusLine {
    date: String,
    time: String,
    workers: String,
    corpus: String,
    corpus_age: String,
    crashers: String,
    restarts: String,
    execs: String,
    execs_per_sec: String,
    cover: String,
    uptime: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            date: "2021/09/21".to_string(),
            time: "21:44:38".to_string(),
            workers: "8".to_string(),
            corpus: "205".to_string(),
            corpus_age: "3s".to_string(),
            crashers: "0".to_string(),
            restarts: "0".to_string(),
            execs: "0".to_string(),
            execs_per_sec: "0".to_string(),
            cover: "0".to_string(),
            uptime: "3s".to_string(),
        }
    }

    pub fn time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn workers(mut self, workers: u64) -> Self {
        self.workers = workers.to_string();
        self
    }

    pub fn corpus(mut self, corpus: u64) -> Self {
        self.corpus = corpus.to_string();
        self
    }

    pub fn crashers(mut self, crashers: u64) -> Self {
        self.crashers = crashers.to_string();
        self
    }

    pub fn restarts(mut self, restarts: u64) -> Self {
        self.restarts = restarts.to_string();
        self
    }

    pub fn execs(mut self, execs: u64) -> Self {
        self.execs = execs.to_string();
        self
    }

    pub fn execs_per_sec(mut self, execs_per_sec: u64) -> Self {
        self.execs_per_sec = execs_per_sec.to_string();
        self
    }

    pub fn cover(mut self, cover: u64) -> Self {
        self.cover = cover.to_string();
        self
    }

    pub fn uptime(mut self, uptime: &str) -> Self {
        self.uptime = uptime.to_string();
        self
    }

    /// Replace the raw token of a field, e.g. to inject a non-numeric value.
    ///
    /// Accepted names: `time`, `workers`, `corpus`, `crashers`, `restarts`,
    /// `execs`, `execs_per_sec`, `cover`.
    pub fn raw(mut self, field: &str, token: &str) -> Self {
        let token = token.to_string();
        match field {
            "time" => self.time = token,
            "workers" => self.workers = token,
            "corpus" => self.corpus = token,
            "crashers" => self.crashers = token,
            "restarts" => self.restarts = token,
            "execs" => self.execs = token,
            "execs_per_sec" => self.execs_per_sec = token,
            "cover" => self.cover = token,
            other => panic!("unknown status line field: {}", other),
        }
        self
    }

    pub fn build(&self) -> String {
        format!(
            "{} {} workers: {}, corpus: {} ({} ago), crashers: {}, restarts: 1/{}, execs: {} ({}/sec), cover: {}, uptime: {}",
            self.date,
            self.time,
            self.workers,
            self.corpus,
            self.corpus_age,
            self.crashers,
            self.restarts,
            self.execs,
            self.execs_per_sec,
            self.cover,
            self.uptime,
        )
    }
}
