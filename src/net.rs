use futures::TryFutureExt;
use shared::Settings;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::window;

#[cfg(feature = "deploy")]
const SETTINGS_URL: &str = "./settings.json";
#[cfg(not(feature = "deploy"))]
const SETTINGS_URL: &str = "/settings";

fn wrap_response_into_json(value: JsValue) -> Result<JsFuture, JsValue> {
    let resp: Response = value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "{} answered {}",
            resp.url(),
            resp.status()
        )));
    }

    Ok(JsFuture::from(resp.json()?))
}

async fn fetch_json(request: &Request) -> Result<JsValue, JsValue> {
    JsFuture::from(window().fetch_with_request(request))
        .and_then(|value| async move { wrap_response_into_json(value)?.await })
        .await
}

fn request_url(method: &str, url: &str) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);

    Request::new_with_str_and_init(url, &opts)
}

pub fn request_settings() -> Result<Request, JsValue> {
    request_url("GET", SETTINGS_URL)
}

/// Fetches the page's [`Settings`] document from the host.
pub async fn fetch_settings() -> Result<Settings, JsValue> {
    let value = fetch_json(&request_settings()?).await?;

    Ok(serde_wasm_bindgen::from_value(value)?)
}
