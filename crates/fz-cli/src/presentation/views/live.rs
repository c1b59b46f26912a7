use crate::presentation::formatters::number::format_number;
use crate::presentation::formatters::style::{self, paint};
use crate::presentation::formatters::time::{format_clock, format_timestamp};
use crate::presentation::formatters::FormatOptions;
use fz_runtime::LiveUpdate;
use std::fmt;

/// The single status line redrawn for every record
pub struct LiveStatusView<'a> {
    pub update: &'a LiveUpdate,
    pub options: FormatOptions,
}

impl<'a> LiveStatusView<'a> {
    pub fn new(update: &'a LiveUpdate, options: FormatOptions) -> Self {
        Self { update, options }
    }
}

impl fmt::Display for LiveStatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = &self.options;
        let record = &self.update.record;
        let trends = &self.update.trends;
        let sep = paint("•", style::separator(), opts);
        let label = |text: &str| paint(text, style::label(), opts);

        write!(
            f,
            "{} {} ",
            paint(&format_timestamp(&record.timestamp), style::secondary(), opts),
            paint(
                &format!("[{}]", format_clock(self.update.elapsed)),
                style::separator(),
                opts
            ),
        )?;

        write!(
            f,
            "{} {} {} ",
            label("Workers:"),
            paint(&record.workers.to_string(), style::trend(trends.workers), opts),
            sep,
        )?;

        write!(
            f,
            "{} {} {} {} ",
            label("Corpus:"),
            paint(&format_number(record.corpus), style::trend(trends.corpus), opts),
            paint(
                &format!("({})", format_clock(self.update.corpus_elapsed)),
                style::separator(),
                opts
            ),
            sep,
        )?;

        write!(
            f,
            "{} {} {} ",
            label("Crashers:"),
            paint(
                &format_number(record.crashers),
                style::crashers(record.crashers),
                opts
            ),
            sep,
        )?;

        write!(
            f,
            "{} {}{} {} ",
            label("Restarts:"),
            paint("1/", style::secondary(), opts),
            format_number(record.restarts),
            sep,
        )?;

        write!(
            f,
            "{} {} {} ",
            label("Cover:"),
            paint(&format_number(record.cover), style::trend(trends.cover), opts),
            sep,
        )?;

        write!(
            f,
            "{} {}{} {}",
            label("Execs:"),
            format_number(record.execs_per_sec),
            paint("/s", style::secondary(), opts),
            paint(
                &format!("({})", format_number(record.execs)),
                style::separator(),
                opts
            ),
        )
    }
}
