//! Movie API Bindings
//!
//! Browser-fetch wrappers for the external movie log backend.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::{Movie, MoviePayload};

/// Base URL of the backend API.
const API_BASE: &str = "http://localhost:5000";

/// Failure of one API call. Each operation surfaces this to the user as a
/// single generic notice; the detail is only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, ...).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// A request or response body could not be encoded or decoded.
    #[error("invalid JSON body: {0}")]
    Json(String),
}

fn movies_url(id: Option<u32>) -> String {
    match id {
        Some(id) => format!("{API_BASE}/api/movies/{id}"),
        None => format!("{API_BASE}/api/movies"),
    }
}

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Send one request and check the response status.
async fn send(method: &str, url: &str, body: Option<&MoviePayload>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(payload) = body {
        let json = serde_json::to_string(payload).map_err(|e| ApiError::Json(e.to_string()))?;
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(js_detail(e)))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(js_detail(e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_detail(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ApiError::Network(js_detail(e)))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(|e| ApiError::Json(js_detail(e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Json(js_detail(e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Json(e.to_string()))
}

/// Fetch every record, in server order.
pub async fn list_movies() -> Result<Vec<Movie>, ApiError> {
    let response = send("GET", &movies_url(None), None).await?;
    decode(response).await
}

/// Create a new record. The response body is ignored; the view re-fetches
/// the list instead of consuming the created record.
pub async fn create_movie(payload: &MoviePayload) -> Result<(), ApiError> {
    send("POST", &movies_url(None), Some(payload)).await?;
    Ok(())
}

/// Replace the record `id` with the full payload.
pub async fn update_movie(id: u32, payload: &MoviePayload) -> Result<(), ApiError> {
    send("PUT", &movies_url(Some(id)), Some(payload)).await?;
    Ok(())
}

/// Delete the record `id`.
pub async fn delete_movie(id: u32) -> Result<(), ApiError> {
    send("DELETE", &movies_url(Some(id)), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_has_no_id() {
        assert_eq!(movies_url(None), "http://localhost:5000/api/movies");
    }

    #[test]
    fn record_url_addresses_the_id() {
        assert_eq!(movies_url(Some(1)), "http://localhost:5000/api/movies/1");
    }
}
