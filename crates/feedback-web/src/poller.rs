//! Submission feed polling and in-browser API calls
//!
//! The dashboard owns no fetch logic of its own; it hands its signals to
//! [`start`] and the poller keeps them fresh until the owning scope is
//! disposed.

use std::time::Duration;

use chrono::Utc;
use leptos::{
    create_rw_signal, on_cleanup, set_interval_with_handle, spawn_local, window, RwSignal,
    SignalSet,
};
use serde::de::DeserializeOwned;

use feedback_core::types::{ApiErrorBody, NewSubmission};
use feedback_core::utils::format_clock_time;
use feedback_core::{AnalyticsSummary, Error, Result, Submission, SubmissionList};

/// Fixed refresh cadence of the dashboard feed
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Reactive slots the poller writes into
///
/// Signals are `Copy`, so one value is shared freely between the interval
/// closure and the async fetches without reference counting.
#[derive(Debug, Clone, Copy)]
pub struct FeedSignals {
    /// Current submission list; replaced wholesale on every successful fetch
    pub submissions: RwSignal<Vec<Submission>>,

    /// Latest analytics summary, if any fetch has succeeded yet
    pub analytics: RwSignal<Option<AnalyticsSummary>>,

    /// Read-path error message shown in the banner
    pub error: RwSignal<Option<String>>,

    /// Wall-clock time of the last successful list fetch
    pub last_updated: RwSignal<Option<String>>,

    /// True until the first list fetch settles
    pub loading: RwSignal<bool>,
}

impl FeedSignals {
    /// Fresh signals for a newly mounted dashboard
    #[must_use]
    pub fn new() -> Self {
        Self {
            submissions: create_rw_signal(Vec::new()),
            analytics: create_rw_signal(None),
            error: create_rw_signal(None),
            last_updated: create_rw_signal(None),
            loading: create_rw_signal(true),
        }
    }
}

impl Default for FeedSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Refresh immediately, then on every tick of [`POLL_INTERVAL`]
///
/// The interval handle is cleared when the current reactive scope is
/// disposed, so navigating away stops the timer. Ticks fire regardless of
/// whether the previous tick's requests have settled; a slow response may
/// apply after a newer one, and that race is accepted.
pub fn start(feed: FeedSignals) {
    refresh(feed);

    match set_interval_with_handle(move || refresh(feed), POLL_INTERVAL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::error!("Failed to schedule poll interval: {:?}", e),
    }
}

/// One poll tick: two independent fetches
///
/// The list fetch drives the banner and the last-updated stamp; a failure
/// leaves the previous list untouched. The analytics fetch never surfaces
/// an error to the user, it is logged and retried on the next tick.
pub fn refresh(feed: FeedSignals) {
    spawn_local(async move {
        match fetch_submissions().await {
            Ok(list) => {
                feed.submissions.set(list.submissions);
                feed.last_updated.set(Some(format_clock_time(&Utc::now())));
                feed.error.set(None);
            }
            Err(e) => feed.error.set(Some(e.user_message())),
        }
        feed.loading.set(false);
    });

    spawn_local(async move {
        match fetch_analytics().await {
            Ok(summary) => feed.analytics.set(Some(summary)),
            Err(e) => tracing::error!("Failed to fetch analytics: {}", e),
        }
    });
}

async fn fetch_submissions() -> Result<SubmissionList> {
    get_json("/api/submissions").await
}

async fn fetch_analytics() -> Result<AnalyticsSummary> {
    get_json("/api/analytics").await
}

/// POST the validated form body, returning the created submission
///
/// # Errors
///
/// Returns an error when the request fails or the server rejects the
/// submission; a server-provided `detail.message` wins over the generic
/// status text.
pub async fn post_submission(body: &NewSubmission) -> Result<Submission> {
    let response = reqwest::Client::new()
        .post(absolute_url("/api/submissions"))
        .json(body)
        .send()
        .await
        .map_err(|e| Error::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let error_body: ApiErrorBody = response.json().await.unwrap_or_default();
        return Err(match error_body.detail {
            Some(detail) => Error::Api {
                status: status.as_u16(),
                message: detail.message,
            },
            None => Error::Http {
                status: status.as_u16(),
            },
        });
    }

    response
        .json()
        .await
        .map_err(|e| Error::Other(format!("Failed to parse submission: {e}")))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let response = reqwest::get(absolute_url(path))
        .await
        .map_err(|e| Error::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let error_body: ApiErrorBody = response.json().await.unwrap_or_default();
        return Err(match error_body.detail {
            Some(detail) => Error::Api {
                status: status.as_u16(),
                message: detail.message,
            },
            None => Error::Http {
                status: status.as_u16(),
            },
        });
    }

    response
        .json()
        .await
        .map_err(|e| Error::Other(format!("Failed to parse response: {e}")))
}

/// Same-origin absolute URL for a proxy path
///
/// reqwest needs absolute URLs even on wasm, so the page origin is joined
/// with the path.
fn absolute_url(path: &str) -> String {
    let origin = window().location().origin().unwrap_or_default();
    format!("{origin}{path}")
}
