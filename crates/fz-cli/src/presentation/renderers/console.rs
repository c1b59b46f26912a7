use crate::presentation::formatters::style::{self, paint};
use crate::presentation::formatters::FormatOptions;
use crate::presentation::views::{LiveStatusView, SummaryView};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use fz_engine::Summary;
use fz_runtime::{LiveUpdate, StreamView};
use std::fmt::Display;
use std::io::Write;

const STARTING: &str = "Starting tests…";

/// Renders the stream onto a terminal-like writer.
///
/// The live line is rewritten in place (`\r` + clear line) and never ends
/// with a newline until the run is over.
pub struct ConsoleView<W: Write> {
    out: W,
    options: FormatOptions,
    line_shown: bool,
    record_shown: bool,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            line_shown: false,
            record_shown: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear_line(&mut self) -> std::io::Result<()> {
        self.out.write_all(b"\r")?;
        queue!(self.out, Clear(ClearType::CurrentLine))
    }

    fn overwrite(&mut self, text: impl Display) -> fz_runtime::Result<()> {
        self.clear_line()?;
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.line_shown = true;
        Ok(())
    }
}

impl<W: Write> StreamView for ConsoleView<W> {
    fn on_start(&mut self) -> fz_runtime::Result<()> {
        let text = paint(STARTING, style::secondary(), &self.options);
        self.overwrite(text)
    }

    fn on_record(&mut self, update: &LiveUpdate) -> fz_runtime::Result<()> {
        self.overwrite(LiveStatusView::new(update, self.options))?;
        self.record_shown = true;
        Ok(())
    }

    fn on_summary(&mut self, summary: Option<&Summary>) -> fz_runtime::Result<()> {
        self.clear_line()?;
        writeln!(self.out, "{}", SummaryView::new(summary, self.options))?;
        self.out.flush()?;
        self.line_shown = false;
        Ok(())
    }

    fn clear(&mut self) -> fz_runtime::Result<()> {
        if self.line_shown {
            self.clear_line()?;
            self.out.flush()?;
            self.line_shown = false;
        }
        Ok(())
    }

    fn finish(&mut self) -> fz_runtime::Result<()> {
        if !self.line_shown {
            return Ok(());
        }

        // Keep the last record on screen, drop the placeholder
        if self.record_shown {
            writeln!(self.out)?;
            self.out.flush()?;
            self.line_shown = false;
            Ok(())
        } else {
            self.clear()
        }
    }
}
