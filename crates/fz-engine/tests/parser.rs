use chrono::NaiveDate;
use fz_engine::parse;
use fz_testing::{SAMPLE_LINE, StatusLine};
use fz_types::{ConversionError, Field, ParseErrorKind};
use std::time::Duration;

#[test]
fn test_parse_sample_line() {
    let record = parse(SAMPLE_LINE).expect("sample line should parse");

    let expected_time = NaiveDate::from_ymd_opt(2021, 9, 21)
        .unwrap()
        .and_hms_opt(21, 46, 20)
        .unwrap();

    assert_eq!(record.timestamp, expected_time);
    assert_eq!(record.workers, 8);
    assert_eq!(record.corpus, 205);
    assert_eq!(record.corpus_age, Some(Duration::from_secs(105)));
    assert_eq!(record.crashers, 2);
    assert_eq!(record.restarts, 9710);
    assert_eq!(record.execs, 4078324);
    assert_eq!(record.execs_per_sec, 38839);
    assert_eq!(record.cover, 225);
    assert_eq!(record.uptime, Some(Duration::from_secs(105)));
}

#[test]
fn test_parse_builder_line() {
    let line = StatusLine::new()
        .time("23:01:02")
        .workers(4)
        .corpus(10)
        .crashers(1)
        .restarts(9710)
        .execs(500)
        .execs_per_sec(42)
        .cover(7)
        .uptime("1h2m3s")
        .build();
    let record = parse(&line).unwrap();

    assert_eq!(
        record.timestamp,
        NaiveDate::from_ymd_opt(2021, 9, 21)
            .unwrap()
            .and_hms_opt(23, 1, 2)
            .unwrap()
    );
    assert_eq!(record.workers, 4);
    assert_eq!(record.corpus, 10);
    assert_eq!(record.crashers, 1);
    assert_eq!(record.restarts, 9710);
    assert_eq!(record.execs, 500);
    assert_eq!(record.execs_per_sec, 42);
    assert_eq!(record.cover, 7);
    assert_eq!(record.uptime, Some(Duration::from_secs(3723)));
}

#[test]
fn test_parse_is_idempotent() {
    assert_eq!(parse(SAMPLE_LINE).unwrap(), parse(SAMPLE_LINE).unwrap());
}

#[test]
fn test_too_few_fields() {
    let err = parse("2021/09/21 21:44:38").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::TooFewFields);
    assert_eq!(err.field(), None);
    assert_eq!(err.to_string(), "output line must contain at least 7 fields");

    let err = parse("").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::TooFewFields);
}

#[test]
fn test_bad_time() {
    let line = StatusLine::new().raw("time", "AA:AA:AA").build();
    let err = parse(&line).unwrap_err();

    assert_eq!(err.kind(), ParseErrorKind::FieldConversion);
    assert_eq!(err.field(), Some(Field::Timestamp));
    match &err {
        fz_types::ParseError::FieldConversion { cause, .. } => {
            assert_eq!(cause.token(), "2021/09/21 AA:AA:AA")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(
        err.to_string()
            .starts_with("can't parse date and time field: parsing \"2021/09/21 AA:AA:AA\"")
    );
}

#[test]
fn test_non_numeric_tokens_name_their_field() {
    let cases = [
        ("workers", "A", Field::Workers),
        ("corpus", "BBB", Field::Corpus),
        ("crashers", "V", Field::Crashers),
        ("crashers", "XX", Field::Crashers),
        ("restarts", "G", Field::Restarts),
        ("execs", "K", Field::Execs),
        ("execs_per_sec", "H", Field::ExecsPerSec),
        ("cover", "T", Field::Cover),
    ];

    for (name, token, field) in cases {
        let line = StatusLine::new().raw(name, token).build();
        let err = parse(&line).unwrap_err();

        assert_eq!(err.kind(), ParseErrorKind::FieldConversion, "{}", line);
        assert_eq!(err.field(), Some(field), "{}", line);

        match err {
            fz_types::ParseError::FieldConversion {
                cause: cause @ ConversionError::Integer { .. },
                ..
            } => assert_eq!(cause.token(), token),
            other => panic!("unexpected error for {}: {:?}", line, other),
        }
    }
}

#[test]
fn test_first_failing_field_wins() {
    let line = StatusLine::new()
        .raw("workers", "x")
        .raw("cover", "y")
        .build();
    let err = parse(&line).unwrap_err();
    assert_eq!(err.field(), Some(Field::Workers));
}

#[test]
fn test_negative_values_are_rejected() {
    let line = StatusLine::new().raw("crashers", "-1").build();
    let err = parse(&line).unwrap_err();
    assert_eq!(err.field(), Some(Field::Crashers));
}

#[test]
fn test_missing_execs_rate_token() {
    let line = "2021/09/21 21:44:38 workers: 8, corpus: 205 (3s ago), crashers: 0, restarts: 1/0, execs: 10, cover: 0, uptime: 3s";
    let err = parse(line).unwrap_err();
    assert_eq!(err.field(), Some(Field::ExecsPerSec));
}

#[test]
fn test_extra_segments_are_ignored() {
    let line = format!("{}, extra: 1", SAMPLE_LINE);
    let record = parse(&line).unwrap();
    assert_eq!(record, parse(SAMPLE_LINE).unwrap());
}

#[test]
fn test_shutdown_line_is_not_a_status_line() {
    let err = parse(fz_testing::fixtures::SHUTDOWN_LINE).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::TooFewFields);
}
