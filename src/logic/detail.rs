//! Detail view resolution: primary record fetch plus border enrichment.

use tokio::sync::mpsc;

use crate::logic::format::{PLACEHOLDER, format_count, or_placeholder};
use crate::logic::text::collate;
use crate::state::{
    AppState, BorderEntry, BorderRequest, BorderResponse, BorderState, Country, CountryDetail,
    DetailRequest, DetailResponse, DetailState, Screen,
};

/// User-visible message when the primary detail fetch fails.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load country details.";

/// What: Start loading the detail view for `code` under a fresh request id.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_detail_id` and `latest_detail_id`
/// - `code`: Country code to show
/// - `detail_tx`: Channel to the detail worker
///
/// Output:
/// - Switches to the detail screen in `Loading` and sends a `DetailRequest`.
///
/// Details:
/// - Any response still in flight for an older id is dropped on arrival.
pub fn open_detail(
    app: &mut AppState,
    code: &str,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) {
    let id = app.next_detail_id;
    app.next_detail_id += 1;
    app.latest_detail_id = id;
    app.screen = Screen::Detail;
    app.border_selected = 0;
    app.detail = DetailState::Loading {
        code: code.to_string(),
    };
    tracing::debug!(id, code, "detail requested");
    let _ = detail_tx.send(DetailRequest {
        id,
        code: code.to_string(),
    });
}

/// What: Apply the primary detail fetch outcome.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `resp`: Worker response
/// - `border_tx`: Channel to the border worker
///
/// Details:
/// - Responses whose id is not the latest are stale and ignored.
/// - No record means `NotFound`; a fetch error means `Failed` with a fixed message.
/// - A record with border codes requests their enrichment under the same id.
pub fn apply_detail_response(
    app: &mut AppState,
    resp: DetailResponse,
    border_tx: &mpsc::UnboundedSender<BorderRequest>,
) {
    if resp.id != app.latest_detail_id {
        tracing::debug!(
            id = resp.id,
            latest = app.latest_detail_id,
            "dropping stale detail response"
        );
        return;
    }
    let records = match resp.result {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(code = %resp.code, error = %e, "detail fetch failed");
            app.detail = DetailState::Failed {
                code: resp.code,
                message: DETAIL_ERROR_MESSAGE.to_string(),
            };
            return;
        }
    };
    let Some(country) = records.into_iter().next() else {
        tracing::info!(code = %resp.code, "country not found");
        app.detail = DetailState::NotFound { code: resp.code };
        return;
    };
    let borders = if country.border_codes.is_empty() {
        BorderState::NoBorders
    } else {
        let _ = border_tx.send(BorderRequest {
            id: resp.id,
            codes: country.border_codes.clone(),
        });
        BorderState::Loading
    };
    app.border_selected = 0;
    app.detail = DetailState::Ready(Box::new(CountryDetail { country, borders }));
}

/// What: Apply the border enrichment outcome.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `resp`: Worker response
///
/// Details:
/// - Ignored unless the id is the latest and the detail is `Ready`.
/// - Failure leaves the primary record in place and shows no borders.
pub fn apply_border_response(app: &mut AppState, resp: BorderResponse) {
    if resp.id != app.latest_detail_id {
        tracing::debug!(id = resp.id, "dropping stale border response");
        return;
    }
    let DetailState::Ready(detail) = &mut app.detail else {
        return;
    };
    detail.borders = match resp.result {
        Ok(records) => {
            let mut entries: Vec<BorderEntry> = records
                .iter()
                .map(|c| BorderEntry {
                    name: c.common_name().to_string(),
                    code: c.code.clone(),
                })
                .collect();
            entries.sort_by(|a, b| collate(&a.name, &b.name));
            BorderState::Resolved(entries)
        }
        Err(e) => {
            tracing::warn!(country = %detail.country.code, error = %e, "border enrichment failed");
            BorderState::Unavailable
        }
    };
    app.border_selected = 0;
}

/// What: Leave the detail screen for the list.
///
/// Details:
/// - Bumps the latest id so in-flight detail or border responses are dropped.
/// - The catalog is kept as is; nothing is refetched.
pub fn back_to_home(app: &mut AppState) {
    app.latest_detail_id = app.next_detail_id;
    app.next_detail_id += 1;
    app.detail = DetailState::Idle;
    app.border_selected = 0;
    app.screen = Screen::Home;
}

/// Move the border selection by `delta`, wrapping around the resolved entries.
pub fn move_border_selection(app: &mut AppState, delta: isize) {
    let DetailState::Ready(detail) = &app.detail else {
        return;
    };
    let len = detail.borders.entries().len();
    if len == 0 {
        return;
    }
    // Border lists are a handful of entries, far below `isize::MAX`.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let next = (app.border_selected as isize + delta).rem_euclid(len as isize) as usize;
    app.border_selected = next;
}

/// Code of the highlighted border entry, if any.
#[must_use]
pub fn selected_border_code(app: &AppState) -> Option<String> {
    match &app.detail {
        DetailState::Ready(detail) => detail
            .borders
            .entries()
            .get(app.border_selected)
            .map(|b| b.code.clone()),
        _ => None,
    }
}

/// Common form of the first native name (by language key), or the common name.
#[must_use]
pub fn native_name(country: &Country) -> &str {
    country
        .name
        .native_name
        .values()
        .next()
        .map(|n| n.common.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(country.name.common.as_str())
}

/// Display-ready values of the detail view's two field columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailFields {
    /// Native name.
    pub native_name: String,
    /// Population with thousands grouping.
    pub population: String,
    /// Region.
    pub region: String,
    /// Subregion.
    pub subregion: String,
    /// First capital.
    pub capital: String,
    /// First top-level domain.
    pub top_level_domain: String,
    /// Name of the first currency by code.
    pub currency: String,
    /// Language names, sorted and comma-joined.
    pub languages: String,
}

impl From<&Country> for DetailFields {
    fn from(c: &Country) -> Self {
        let mut languages: Vec<&str> = c
            .languages
            .values()
            .map(String::as_str)
            .filter(|l| !l.is_empty())
            .collect();
        languages.sort_by(|a, b| collate(a, b));
        let native = native_name(c);
        Self {
            native_name: or_placeholder(Some(native)),
            population: format_count(c.population),
            region: or_placeholder(c.region.as_deref()),
            subregion: or_placeholder(c.subregion.as_deref()),
            capital: or_placeholder(c.capital()),
            top_level_domain: or_placeholder(c.top_level_domains.first().map(String::as_str)),
            currency: or_placeholder(
                c.currencies
                    .values()
                    .next()
                    .and_then(|cur| cur.name.as_deref()),
            ),
            languages: if languages.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                languages.join(", ")
            },
        }
    }
}
