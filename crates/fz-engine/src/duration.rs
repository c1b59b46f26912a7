use std::time::Duration;

/// Parse a Go-style duration such as `1m45s`, `2h0m3s`, `1.5s` or `300ms`.
///
/// Returns `None` for empty input, unknown units or negative values.
pub fn parse_go_duration(raw: &str) -> Option<Duration> {
    if raw.is_empty() {
        return None;
    }

    if raw == "0" {
        return Some(Duration::ZERO);
    }

    let mut rest = raw;
    let mut total_nanos = 0f64;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());

        if number_len == 0 {
            return None;
        }

        let value: f64 = rest[..number_len].parse().ok()?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());

        let nanos_per_unit = match &rest[..unit_len] {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };

        total_nanos += value * nanos_per_unit;
        rest = &rest[unit_len..];
    }

    Some(Duration::from_nanos(total_nanos.round() as u64))
}
