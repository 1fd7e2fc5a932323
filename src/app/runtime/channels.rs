use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{CountryClient, FetchError};
use crate::state::{BorderRequest, BorderResponse, Country, DetailRequest, DetailResponse};

use super::workers::{spawn_border_worker, spawn_detail_worker};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers used between the main event loop
///   and the background workers. Request receivers are moved into the
///   workers when the channels are created.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub catalog_res_tx: mpsc::UnboundedSender<Result<Vec<Country>, FetchError>>,
    pub catalog_res_rx: mpsc::UnboundedReceiver<Result<Vec<Country>, FetchError>>,
    pub detail_req_tx: mpsc::UnboundedSender<DetailRequest>,
    pub detail_res_rx: mpsc::UnboundedReceiver<DetailResponse>,
    pub border_req_tx: mpsc::UnboundedSender<BorderRequest>,
    pub border_res_rx: mpsc::UnboundedReceiver<BorderResponse>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels and spawn the detail and border workers.
    ///
    /// Inputs:
    /// - `client`: Shared catalog service client handed to the workers
    ///
    /// Output:
    /// - A `Channels` struct with every sender and receiver initialized
    ///
    /// Details:
    /// - The catalog worker is not spawned here; it runs once, on demand.
    pub fn new(client: &CountryClient) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (catalog_res_tx, catalog_res_rx) = mpsc::unbounded_channel();
        let (detail_req_tx, detail_req_rx) = mpsc::unbounded_channel::<DetailRequest>();
        let (detail_res_tx, detail_res_rx) = mpsc::unbounded_channel::<DetailResponse>();
        let (border_req_tx, border_req_rx) = mpsc::unbounded_channel::<BorderRequest>();
        let (border_res_tx, border_res_rx) = mpsc::unbounded_channel::<BorderResponse>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();

        spawn_detail_worker(client.clone(), detail_req_rx, detail_res_tx);
        spawn_border_worker(client.clone(), border_req_rx, border_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            catalog_res_tx,
            catalog_res_rx,
            detail_req_tx,
            detail_res_rx,
            border_req_tx,
            border_res_rx,
            tick_tx,
            tick_rx,
        }
    }
}
