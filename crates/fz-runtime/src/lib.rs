// Runtime layer - owns the read loop over go-fuzz output.
//
// A reader thread hands lines over a rendezvous channel and the signal bridge
// pushes termination requests on a second one. The controller on the calling
// thread checks signals before every line and is the only owner of the stream
// state, so the summary path never races with record updates.

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod reader;
pub mod signals;
pub mod state;

pub use config::{Config, ControllerConfig, DEFAULT_SHUTDOWN_GRACE, resolve_config_path};
pub use controller::{Outcome, StreamController, StreamView};
pub use error::{Error, Result};
pub use events::{SignalKind, StreamEvent};
pub use reader::spawn_reader;
pub use state::{LiveUpdate, StreamState};

use std::io::BufRead;
use std::sync::mpsc::{channel, sync_channel};

/// Wire up reader, signal handlers and controller, then run to completion.
pub fn run_stream<R, V>(input: R, config: ControllerConfig, view: V) -> Result<Outcome>
where
    R: BufRead + Send + 'static,
    V: StreamView,
{
    let (signal_tx, signal_rx) = channel();
    let (event_tx, event_rx) = sync_channel(0);

    signals::install(signal_tx)?;
    let _reader = spawn_reader(
        input,
        event_tx,
        config.shutdown_marker.clone(),
        config.shutdown_grace,
    )?;

    let mut controller = StreamController::new(config, view);
    controller.run(event_rx, signal_rx)
}
