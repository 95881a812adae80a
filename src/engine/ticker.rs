//! Fixed-interval loop thread

use std::io;
use std::ops::ControlFlow;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A background thread that calls a step function once per interval
///
/// The first step runs immediately. Steps never overlap. The loop ends when
/// the step returns `ControlFlow::Break` or when [`Ticker::stop`] is called.
#[derive(Debug)]
pub struct Ticker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn<F>(name: &str, interval: Duration, mut step: F) -> io::Result<Self>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new().name(name.to_string()).spawn(move || {
            log::debug!("Loop thread started ({}ms interval)", interval.as_millis());
            loop {
                if step().is_break() {
                    log::debug!("Loop finished on its own");
                    break;
                }
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                        log::debug!("Loop stopped");
                        break;
                    }
                }
            }
        })?;
        Ok(Self { stop_tx, handle })
    }

    /// True once the loop thread has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signal the loop and wait for it to exit; no step runs after this returns
    pub fn stop(self) {
        // The receiver is gone if the loop already ended on its own
        let _ = self.stop_tx.send(());
        if self.handle.join().is_err() {
            log::error!("Game loop thread panicked");
        }
    }
}
