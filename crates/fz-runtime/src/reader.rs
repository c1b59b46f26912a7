use crate::events::StreamEvent;
use fz_engine::is_shutdown_marker;
use std::io::BufRead;
use std::sync::mpsc::SyncSender;
use std::thread::JoinHandle;
use std::time::Duration;

/// Spawn the thread that reads input line by line and forwards it to the
/// controller.
///
/// When a line carries the shutdown marker the thread reports it, sleeps for
/// `grace` and then keeps reading; the marker line itself is not forwarded.
///
/// Pass a rendezvous channel (`sync_channel(0)`) to keep the reader at most
/// one line ahead of the controller.
pub fn spawn_reader<R>(
    input: R,
    tx: SyncSender<StreamEvent>,
    shutdown_marker: String,
    grace: Duration,
) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            for line in input.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        let _ = tx.send(StreamEvent::ReadFailed(err));
                        return;
                    }
                };

                if is_shutdown_marker(&line, &shutdown_marker) {
                    if tx.send(StreamEvent::ShuttingDown).is_err() {
                        return;
                    }
                    std::thread::sleep(grace);
                    continue;
                }

                // Controller is gone
                if tx.send(StreamEvent::Line(line)).is_err() {
                    return;
                }
            }

            let _ = tx.send(StreamEvent::Closed);
        })
}
