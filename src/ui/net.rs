//! Client-side fetch helpers.
//!
//! Thin wrappers over the browser fetch API used by the pricing, auth, and
//! analytics code. Every helper returns `Result<_, String>`; callers decide
//! whether a failure is worth showing (purchase verification) or only worth
//! a console line (pricing, analytics).

#[cfg(not(feature = "ssr"))]
use serde::{Serialize, de::DeserializeOwned};

/// GET a JSON endpoint.
#[cfg(not(feature = "ssr"))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");

    let req = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;

    if !resp.ok() {
        return Err(format!("request to {} failed: {}", url, resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// POST a JSON body and decode a JSON response. Non-2xx responses still
/// decode the body; the verification endpoint answers failures with a
/// structured payload the caller wants to read.
#[cfg(not(feature = "ssr"))]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(
        &serde_json::to_string(body)
            .map_err(|e| e.to_string())?
            .into(),
    );

    let req = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// POST a JSON body where the response body does not matter (analytics).
#[cfg(not(feature = "ssr"))]
pub async fn post_json_discard<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(
        &serde_json::to_string(body)
            .map_err(|e| e.to_string())?
            .into(),
    );

    let req = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;

    if resp.ok() {
        Ok(())
    } else {
        Err(format!("request to {} failed: {}", url, resp.status()))
    }
}

/// Read a value from localStorage.
#[cfg(not(feature = "ssr"))]
pub fn storage_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

/// Write a value to localStorage. Failures (private mode, quota) are dropped;
/// everything persisted here is re-derivable.
#[cfg(not(feature = "ssr"))]
pub fn storage_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(not(feature = "ssr"))]
pub fn storage_remove(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Read a value from sessionStorage (per-tab-session state, e.g. banner
/// dismissals).
#[cfg(not(feature = "ssr"))]
pub fn session_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.session_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

#[cfg(not(feature = "ssr"))]
pub fn session_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

// Server-side stubs: pages render on the server with defaults and hydrate
// the real values on the client.

#[cfg(feature = "ssr")]
pub fn storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn storage_set(_key: &str, _value: &str) {}

#[cfg(feature = "ssr")]
pub fn storage_remove(_key: &str) {}

#[cfg(feature = "ssr")]
pub fn session_get(_key: &str) -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn session_set(_key: &str, _value: &str) {}
