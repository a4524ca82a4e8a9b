//! Remote List Service Bindings
//!
//! One async fn per endpoint over the browser fetch API, organized by
//! domain.

mod session;
mod todo;

pub use session::*;
pub use todo::*;

use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Failures surfaced by the remote list service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 404 on the session probe; handled by creating the session.
    #[error("session not found")]
    SessionMissing,
    /// Any other non-2xx response.
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },
    /// Transport-level failure (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be read or parsed.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Send one request and hand back the raw `Response`.
///
/// HTTP status is left to the caller: 404 means different things on
/// different endpoints.
async fn send(method: &str, url: &str, body: Option<&str>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?
        .into();
    Ok(response)
}

/// Reject non-2xx statuses.
fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::RequestFailed {
            status: response.status(),
        })
    }
}

/// Read the response body as text.
async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response
        .text()
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?
        .as_string()
        .ok_or_else(|| ApiError::Decode("body is not a string".into()))
}
