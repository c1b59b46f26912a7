//! Position-based parser for go-fuzz status lines.
//!
//! go-fuzz prints one status line every few seconds:
//!
//! ```text
//! 2021/09/21 21:46:20 workers: 8, corpus: 205 (1m45s ago), crashers: 2, restarts: 1/9710, execs: 4078324 (38839/sec), cover: 225, uptime: 1m45s
//! ```
//!
//! The line is split on commas and every value is read by its segment index
//! and whitespace token index. Labels are never matched.

use crate::duration::parse_go_duration;
use chrono::NaiveDateTime;
use fz_types::{ConversionError, Field, MIN_SEGMENTS, ParseError, Record, Result};
use std::time::Duration;

/// Marker go-fuzz prints once it starts shutting down
pub const DEFAULT_SHUTDOWN_MARKER: &str = "shutting down...";

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Decoration removed from a token before conversion
#[derive(Debug, Clone, Copy)]
enum Strip {
    Prefix(&'static str),
    All(&'static str),
}

/// Location of a value inside a status line
#[derive(Debug, Clone, Copy)]
struct TokenSpec {
    field: Field,
    segment: usize,
    token: usize,
    strip: &'static [Strip],
}

const EXECS_STRIP: &[Strip] = &[Strip::All("/sec"), Strip::All("("), Strip::All(")")];

const WORKERS: TokenSpec = TokenSpec {
    field: Field::Workers,
    segment: 0,
    token: 3,
    strip: &[],
};
const CORPUS: TokenSpec = TokenSpec {
    field: Field::Corpus,
    segment: 1,
    token: 1,
    strip: &[],
};
const CORPUS_AGE: TokenSpec = TokenSpec {
    field: Field::CorpusAge,
    segment: 1,
    token: 2,
    strip: &[Strip::All("(")],
};
const CRASHERS: TokenSpec = TokenSpec {
    field: Field::Crashers,
    segment: 2,
    token: 1,
    strip: &[],
};
const RESTARTS: TokenSpec = TokenSpec {
    field: Field::Restarts,
    segment: 3,
    token: 1,
    strip: &[Strip::Prefix("1/")],
};
const EXECS: TokenSpec = TokenSpec {
    field: Field::Execs,
    segment: 4,
    token: 1,
    strip: EXECS_STRIP,
};
const EXECS_PER_SEC: TokenSpec = TokenSpec {
    field: Field::ExecsPerSec,
    segment: 4,
    token: 2,
    strip: EXECS_STRIP,
};
const COVER: TokenSpec = TokenSpec {
    field: Field::Cover,
    segment: 5,
    token: 1,
    strip: &[],
};
const UPTIME: TokenSpec = TokenSpec {
    field: Field::Uptime,
    segment: 6,
    token: 1,
    strip: &[],
};

/// Parse one go-fuzz status line.
///
/// Parsing is all-or-nothing: the first required field that fails to convert
/// aborts the parse. `corpus_age` and `uptime` are informational and become
/// `None` when missing or malformed.
pub fn parse(line: &str) -> Result<Record> {
    let segments: Vec<&str> = line.split(',').collect();

    if segments.len() < MIN_SEGMENTS {
        return Err(ParseError::TooFewFields {
            found: segments.len(),
        });
    }

    // Struct fields are evaluated in source order, which fixes the order in
    // which conversion failures are reported.
    Ok(Record {
        timestamp: read_timestamp(&segments)?,
        workers: read_integer(&segments, &WORKERS)?,
        corpus: read_integer(&segments, &CORPUS)?,
        corpus_age: read_duration(&segments, &CORPUS_AGE),
        crashers: read_integer(&segments, &CRASHERS)?,
        restarts: read_integer(&segments, &RESTARTS)?,
        execs: read_integer(&segments, &EXECS)?,
        execs_per_sec: read_integer(&segments, &EXECS_PER_SEC)?,
        cover: read_integer(&segments, &COVER)?,
        uptime: read_duration(&segments, &UPTIME),
    })
}

/// Returns true if the line carries the given shutdown marker
pub fn is_shutdown_marker(line: &str, marker: &str) -> bool {
    !marker.is_empty() && line.contains(marker)
}

fn read_timestamp(segments: &[&str]) -> Result<NaiveDateTime> {
    let head = segments[0];
    let raw = format!("{} {}", token_at(head, 0), token_at(head, 1));

    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(|source| {
        ParseError::FieldConversion {
            field: Field::Timestamp,
            cause: ConversionError::Timestamp { token: raw, source },
        }
    })
}

fn read_integer(segments: &[&str], spec: &TokenSpec) -> Result<u64> {
    let token = read_token(segments, spec);

    token
        .parse::<u64>()
        .map_err(|source| ParseError::FieldConversion {
            field: spec.field,
            cause: ConversionError::Integer { token, source },
        })
}

fn read_duration(segments: &[&str], spec: &TokenSpec) -> Option<Duration> {
    parse_go_duration(&read_token(segments, spec))
}

fn read_token(segments: &[&str], spec: &TokenSpec) -> String {
    let token = segments
        .get(spec.segment)
        .map(|segment| token_at(segment, spec.token))
        .unwrap_or_default();

    strip_token(token, spec.strip)
}

fn token_at(segment: &str, index: usize) -> &str {
    segment.split_whitespace().nth(index).unwrap_or_default()
}

fn strip_token(token: &str, rules: &[Strip]) -> String {
    let mut value = token.to_string();

    for rule in rules {
        match rule {
            Strip::Prefix(prefix) => {
                if let Some(rest) = value.strip_prefix(prefix) {
                    value = rest.to_string();
                }
            }
            Strip::All(pattern) => value = value.replace(pattern, ""),
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_at_skips_leading_whitespace() {
        assert_eq!(token_at(" corpus: 205 (3s ago)", 1), "205");
        assert_eq!(token_at(" corpus: 205", 7), "");
    }

    #[test]
    fn test_strip_rules() {
        assert_eq!(strip_token("1/9710", &[Strip::Prefix("1/")]), "9710");
        assert_eq!(strip_token("9710", &[Strip::Prefix("1/")]), "9710");
        assert_eq!(strip_token("(38839/sec)", EXECS_STRIP), "38839");
    }

    #[test]
    fn test_corpus_age_and_uptime_are_optional() {
        let line = "2021/09/21 21:44:38 workers: 8, corpus: 205, crashers: 0, restarts: 1/0, execs: 0 (0/sec), cover: 0, uptime: ?";
        let record = parse(line).unwrap();
        assert_eq!(record.corpus_age, None);
        assert_eq!(record.uptime, None);
    }

    #[test]
    fn test_corpus_age_is_read_from_annotation() {
        let line = "2021/09/21 21:44:38 workers: 8, corpus: 205 (1m45s ago), crashers: 0, restarts: 1/0, execs: 0 (0/sec), cover: 0, uptime: 2h0m3s";
        let record = parse(line).unwrap();
        assert_eq!(record.corpus_age, Some(Duration::from_secs(105)));
        assert_eq!(record.uptime, Some(Duration::from_secs(7203)));
    }

    #[test]
    fn test_shutdown_marker() {
        assert!(is_shutdown_marker(
            "2021/09/21 21:50:01 shutting down...",
            DEFAULT_SHUTDOWN_MARKER
        ));
        assert!(!is_shutdown_marker(
            "2021/09/21 21:50:01 workers: 8",
            DEFAULT_SHUTDOWN_MARKER
        ));
        assert!(!is_shutdown_marker("anything", ""));
    }
}
