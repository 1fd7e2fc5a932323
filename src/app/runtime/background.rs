use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::Duration;

/// Interval between redraw ticks.
const TICK_INTERVAL_MS: u64 = 200;

/// What: Spawn the tick worker that nudges the event loop to redraw.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events
///
/// Details:
/// - Stops once the receiver is gone.
pub fn spawn_tick_worker(tick_tx: &mpsc::UnboundedSender<()>) {
    let tick_tx_bg = tick_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
        loop {
            interval.tick().await;
            if tick_tx_bg.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the thread reading terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel sender for terminal events
/// - `event_thread_cancelled`: Flag checked between polls to stop the thread
///
/// Details:
/// - Polls with a short timeout so cancellation is noticed promptly.
/// - Exits when the flag is set or the receiver has been dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "terminal event read failed");
                    }
                },
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("event thread stopped");
    });
}
