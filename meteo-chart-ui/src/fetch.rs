//! Browser-side dataset fetch.
//!
//! The static CSV files are served next to the app bundle; this wrapper
//! resolves one of them to plain text or a [`LoadError`] the view state
//! machine can settle on. No caching, no retry: each call hits the network
//! again, and a failed page stays failed until the user reloads.

use meteo_obs::loader::LoadError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch a resource and return its body as UTF-8 text.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or(LoadError::HttpRequest)?;

    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| LoadError::HttpRequest)?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| LoadError::HttpRequest)?;

    if !response.ok() {
        log::warn!("Bad response for {}: {}", url, response.status());
        return Err(LoadError::HttpStatus(response.status()));
    }

    let text_promise = response.text().map_err(|_| LoadError::HttpRequest)?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|_| LoadError::HttpRequest)?;
    text_value.as_string().ok_or(LoadError::HttpRequest)
}
