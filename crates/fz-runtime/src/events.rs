use std::fmt;

/// Input events produced by the line reader.
///
/// Termination requests travel on their own channel as [`SignalKind`] so they
/// never queue behind input.
#[derive(Debug)]
pub enum StreamEvent {
    /// One raw line from the input stream
    Line(String),

    /// go-fuzz announced shutdown; the reader pauses before reading on
    ShuttingDown,

    /// Reading the input stream failed
    ReadFailed(std::io::Error),

    /// Input stream reached end of file
    Closed,
}

/// Termination signals the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// SIGINT, SIGTERM or SIGHUP
    Interrupt,
    /// SIGQUIT
    Quit,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Interrupt => write!(f, "interrupt"),
            SignalKind::Quit => write!(f, "quit"),
        }
    }
}
