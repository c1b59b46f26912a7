use crate::config::ControllerConfig;
use crate::events::{SignalKind, StreamEvent};
use crate::state::{LiveUpdate, StreamState};
use crate::{Error, Result};
use fz_engine::Summary;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Upper bound on how long a signal waits while the input is idle
const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn pending_signal(signals: &Receiver<SignalKind>) -> Option<SignalKind> {
    signals.try_recv().ok()
}

/// Output side of the controller.
///
/// The console renderer implements this; tests use a recording view.
pub trait StreamView {
    /// Called once before the first event is handled
    fn on_start(&mut self) -> Result<()>;

    /// A record was parsed; replace the live line
    fn on_record(&mut self, update: &LiveUpdate) -> Result<()>;

    /// go-fuzz announced shutdown; input pauses for the grace period
    fn on_shutting_down(&mut self) -> Result<()> {
        Ok(())
    }

    /// Final summary. `None` if no record was parsed during the run
    fn on_summary(&mut self, summary: Option<&Summary>) -> Result<()>;

    /// Remove the live line before an error is reported
    fn clear(&mut self) -> Result<()>;

    /// Input ended without a summary; leave the last live line in place
    fn finish(&mut self) -> Result<()>;
}

/// How a run ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Interrupted(SignalKind),
    Closed,
}

/// Drives one run: consumes stream events, keeps the state and feeds the view.
pub struct StreamController<V: StreamView> {
    config: ControllerConfig,
    state: StreamState,
    view: V,
}

impl<V: StreamView> StreamController<V> {
    pub fn new(config: ControllerConfig, view: V) -> Self {
        Self {
            config,
            state: StreamState::new(Instant::now()),
            view,
        }
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Handle events until a signal arrives, input closes or a line fails to
    /// parse.
    ///
    /// Pending signals are checked before every input event, so nothing the
    /// reader hands over after a termination request is rendered.
    pub fn run(
        &mut self,
        events: Receiver<StreamEvent>,
        signals: Receiver<SignalKind>,
    ) -> Result<Outcome> {
        tracing::info!("reading go-fuzz output");
        self.view.on_start()?;

        loop {
            if let Some(kind) = pending_signal(&signals) {
                return self.interrupt(kind);
            }

            let event = match events.recv_timeout(SIGNAL_POLL_INTERVAL) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => continue,
                // Reader hung up: same as end of input
                Err(RecvTimeoutError::Disconnected) => StreamEvent::Closed,
            };

            if let Some(kind) = pending_signal(&signals) {
                return self.interrupt(kind);
            }

            match event {
                StreamEvent::Line(line) => self.handle_line(&line)?,
                StreamEvent::ShuttingDown => {
                    tracing::info!(
                        grace_secs = self.config.shutdown_grace.as_secs(),
                        "go-fuzz is shutting down, pausing input"
                    );
                    self.view.on_shutting_down()?;
                }
                StreamEvent::ReadFailed(err) => {
                    self.view.clear()?;
                    return Err(Error::Io(err));
                }
                StreamEvent::Closed => {
                    tracing::info!(records = self.state.records_seen(), "input closed");
                    if self.config.summary_on_eof {
                        self.render_summary()?;
                    } else {
                        self.view.finish()?;
                    }
                    return Ok(Outcome::Closed);
                }
            }
        }
    }

    fn interrupt(&mut self, kind: SignalKind) -> Result<Outcome> {
        tracing::info!(signal = %kind, records = self.state.records_seen(), "termination requested");
        self.render_summary()?;
        Ok(Outcome::Interrupted(kind))
    }

    fn handle_line(&mut self, line: &str) -> Result<()> {
        match fz_engine::parse(line) {
            Ok(record) => {
                tracing::trace!(?record, "parsed status line");
                let update = self.state.apply(record, Instant::now());
                self.view.on_record(&update)
            }
            Err(err) => {
                tracing::warn!(%err, line, "malformed status line");
                self.view.clear()?;
                Err(Error::Parse(err))
            }
        }
    }

    fn render_summary(&mut self) -> Result<()> {
        let summary = self.state.summary(Instant::now());
        self.view.on_summary(summary.as_ref())
    }
}
