use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::select;

use crate::logic::{apply_border_response, apply_catalog_result, apply_detail_response};
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for a single message from any channel and applies it to `app`.
/// - The main loop is the only writer of `AppState`.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, &channels.detail_req_tx)
        }
        Some(result) = channels.catalog_res_rx.recv() => {
            apply_catalog_result(app, result);
            false
        }
        Some(resp) = channels.detail_res_rx.recv() => {
            apply_detail_response(app, resp, &channels.border_req_tx);
            false
        }
        Some(resp) = channels.border_res_rx.recv() => {
            apply_border_response(app, resp);
            false
        }
        Some(()) = channels.tick_rx.recv() => false,
        else => false
    }
}

/// What: Run the main event loop, rendering between messages.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Details:
/// - Exits when the event handler reports a quit.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "draw failed");
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
