use super::FormatOptions;
use fz_engine::Trend;
use owo_colors::{OwoColorize, Style};

pub fn label() -> Style {
    Style::new().bold()
}

pub fn secondary() -> Style {
    Style::new().bright_black()
}

pub fn separator() -> Style {
    Style::new().dimmed()
}

pub fn alert() -> Style {
    Style::new().red()
}

/// Green for growth, red for decline, no colour when unchanged
pub fn trend(trend: Trend) -> Option<Style> {
    match trend {
        Trend::Up => Some(Style::new().green()),
        Trend::Down => Some(Style::new().red()),
        Trend::Unchanged => None,
    }
}

/// Crashers are highlighted whenever there are any
pub fn crashers(count: u64) -> Option<Style> {
    (count > 0).then(alert)
}

/// Apply `style` unless colours are disabled
pub fn paint(text: &str, style: impl Into<Option<Style>>, options: &FormatOptions) -> String {
    match style.into() {
        Some(style) if options.enable_color => text.style(style).to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_plain_passthrough() {
        let text = paint("205", trend(Trend::Up), &FormatOptions::plain());
        assert_eq!(text, "205");
    }

    #[test]
    fn test_paint_colors_by_trend() {
        let options = FormatOptions::default();
        assert!(paint("1", trend(Trend::Up), &options).starts_with("\u{1b}[32m"));
        assert!(paint("1", trend(Trend::Down), &options).starts_with("\u{1b}[31m"));
        assert_eq!(paint("1", trend(Trend::Unchanged), &options), "1");
    }

    #[test]
    fn test_crashers_alert_only_when_nonzero() {
        let options = FormatOptions::default();
        assert_eq!(paint("0", crashers(0), &options), "0");
        assert!(paint("2", crashers(2), &options).starts_with("\u{1b}[31m"));
    }
}
