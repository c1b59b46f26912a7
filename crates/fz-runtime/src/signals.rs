use crate::Result;
use crate::events::SignalKind;
use std::sync::mpsc::Sender;

/// Forward termination signals to the controller's signal channel.
///
/// The handlers only send on the channel; rendering and exiting stay with the
/// controller. Must be called at most once per process.
pub fn install(tx: Sender<SignalKind>) -> Result<()> {
    // SIGINT, SIGTERM and SIGHUP (ctrlc "termination" feature)
    let interrupt_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(SignalKind::Interrupt);
    })?;

    #[cfg(unix)]
    install_quit(tx)?;

    Ok(())
}

#[cfg(unix)]
fn install_quit(tx: Sender<SignalKind>) -> Result<()> {
    use signal_hook::consts::SIGQUIT;
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGQUIT])?;

    std::thread::Builder::new()
        .name("signal-quit".to_string())
        .spawn(move || {
            for _ in signals.forever() {
                if tx.send(SignalKind::Quit).is_err() {
                    break;
                }
            }
        })?;

    Ok(())
}
