mod app;
mod draw;
mod frame;
mod net;

use std::cell::RefCell;

use app::App;
use itertools::Itertools;
use log::{info, warn, Level};
use net::fetch_settings;
use shared::{Settings, Viewport};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, HtmlScriptElement, Window};

pub use app::send_mail;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn window() -> Window {
    web_sys::window().expect("no global `window` exists")
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window().request_animation_frame(f.as_ref().unchecked_ref())
}

fn cancel_animation_frame(handle: i32) {
    let _ = window().cancel_animation_frame(handle);
}

fn document() -> Document {
    window()
        .document()
        .expect("should have a document on window")
}

fn query_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document().query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect_vec())
}

fn viewport() -> Viewport {
    let window = window();

    Viewport::new(
        window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default(),
        window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default(),
    )
}

/// Settings embedded in the page as `<script type="application/json" id="portfolio-settings">`.
fn inline_settings() -> Option<Settings> {
    let script = document()
        .get_element_by_id("portfolio-settings")?
        .dyn_into::<HtmlScriptElement>()
        .ok()?;
    let text = script.text().ok()?;

    match serde_json::from_str::<Settings>(&text) {
        Ok(settings) => Some(settings),
        Err(err) => {
            warn!("inline settings are malformed: {err}");
            None
        }
    }
}

async fn load_settings() -> Settings {
    let settings = match inline_settings() {
        Some(settings) => settings,
        None => match fetch_settings().await {
            Ok(settings) => settings,
            Err(err) => {
                info!("using default settings, fetch failed: {err:?}");
                Settings::default()
            }
        },
    };

    settings.validated().unwrap_or_else(|err| {
        warn!("using default settings: {err}");
        Settings::default()
    })
}

#[wasm_bindgen(start)]
async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Info);

    let settings = load_settings().await;
    let app = App::install(&settings);

    info!("portfolio effects ready: {app}");
    APP.with(|cell| cell.replace(Some(app)));

    Ok(())
}

/// Halts the background and cursor animation loops.
#[wasm_bindgen(js_name = stopEffects)]
pub fn stop_effects() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            app.stop();
            info!("portfolio effects stopped: {app}");
        }
    });
}
