use tokio::sync::mpsc;

use crate::sources::{CountryClient, FetchError};
use crate::state::{
    AppState, BorderRequest, BorderResponse, Country, DetailRequest, DetailResponse,
};

/// What: Issue the single catalog fetch of this run.
///
/// Inputs:
/// - `app`: Application state; `catalog_requested` guards against a second fetch
/// - `client`: Catalog service client
/// - `res_tx`: Channel receiving the fetch outcome
///
/// Output:
/// - `true` if a fetch was started; `false` if one was already issued.
pub fn request_catalog(
    app: &mut AppState,
    client: &CountryClient,
    res_tx: &mpsc::UnboundedSender<Result<Vec<Country>, FetchError>>,
) -> bool {
    if app.catalog_requested {
        return false;
    }
    app.catalog_requested = true;
    let client = client.clone();
    let res_tx = res_tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_catalog().await;
        let _ = res_tx.send(result);
    });
    true
}

/// What: Spawn the worker serving primary detail requests.
///
/// Inputs:
/// - `client`: Catalog service client
/// - `req_rx`: Incoming detail requests
/// - `res_tx`: Outgoing responses, each echoing its request id and code
///
/// Details:
/// - Requests are served one after another; staleness is decided by the receiver.
pub fn spawn_detail_worker(
    client: CountryClient,
    mut req_rx: mpsc::UnboundedReceiver<DetailRequest>,
    res_tx: mpsc::UnboundedSender<DetailResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let result = client.fetch_by_code(&req.code).await;
            if res_tx
                .send(DetailResponse {
                    id: req.id,
                    code: req.code,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
    });
}

/// What: Spawn the worker resolving border codes into records.
///
/// Inputs:
/// - `client`: Catalog service client
/// - `req_rx`: Incoming border requests
/// - `res_tx`: Outgoing responses, each echoing its request id
pub fn spawn_border_worker(
    client: CountryClient,
    mut req_rx: mpsc::UnboundedReceiver<BorderRequest>,
    res_tx: mpsc::UnboundedSender<BorderResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let result = client.fetch_by_codes(&req.codes).await;
            if res_tx.send(BorderResponse { id: req.id, result }).is_err() {
                break;
            }
        }
    });
}
