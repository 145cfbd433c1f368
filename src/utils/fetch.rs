//! Dataset download with a timeout.
//!
//! Uses the same `gloo-net` client as the icon loader; the request is raced
//! against a `gloo-timers` timeout.

use std::future::Future;

use futures_util::future::{Either, select};
use futures_util::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::config::FETCH_TIMEOUT_MS;
use crate::error::FetchError;

/// GET `url` as text, giving up after [`FETCH_TIMEOUT_MS`].
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    with_timeout(get_text(url), TimeoutFuture::new(FETCH_TIMEOUT_MS)).await
}

async fn get_text(url: &str) -> Result<String, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::NetworkError(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    response
        .text()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)
}

/// Resolve `work`, or fail with [`FetchError::Timeout`] if `timer` fires first.
async fn with_timeout<T, W, D>(work: W, timer: D) -> Result<T, FetchError>
where
    W: Future<Output = Result<T, FetchError>>,
    D: Future<Output = ()>,
{
    pin_mut!(work, timer);
    match select(work, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout),
    }
}
