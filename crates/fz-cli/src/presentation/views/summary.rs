use crate::presentation::formatters::number::{format_gain, format_number};
use crate::presentation::formatters::style::{self, paint};
use crate::presentation::formatters::time::format_duration_short;
use crate::presentation::formatters::FormatOptions;
use fz_engine::Summary;
use std::fmt;

/// Final line printed when the run is interrupted
pub struct SummaryView<'a> {
    pub summary: Option<&'a Summary>,
    pub options: FormatOptions,
}

impl<'a> SummaryView<'a> {
    pub fn new(summary: Option<&'a Summary>, options: FormatOptions) -> Self {
        Self { summary, options }
    }
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = &self.options;

        let Some(summary) = self.summary else {
            return write!(
                f,
                "{}",
                paint("No data received from go-fuzz", style::secondary(), opts)
            );
        };

        let sep = paint("•", style::separator(), opts);
        let label = |text: &str| paint(text, style::label(), opts);

        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {} {} {} {} {}",
            label("Duration:"),
            format_duration_short(summary.elapsed),
            sep,
            label("Execs:"),
            format_number(summary.execs),
            sep,
            label("Corpus:"),
            format_gain(summary.corpus_gain),
            sep,
            label("Crashers:"),
            paint(
                &format_gain(summary.crashers_gain),
                style::crashers(summary.crashers_gain),
                opts
            ),
            sep,
            label("Cover:"),
            format_gain(summary.cover_gain),
        )
    }
}
