use std::{cell::RefCell, rc::Rc};

use log::info;
use nalgebra::vector;
use shared::{Follower, Settings};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{HtmlElement, PointerEvent};

use super::AppError;
use crate::{
    document,
    frame::{run_frames, FrameHandle},
    viewport, window,
};

const BLOB_SELECTOR: &str = "#cursor-blob";

/// Eases `#cursor-blob` towards the pointer every frame.
pub fn install(settings: &Settings) -> Result<FrameHandle, AppError> {
    let blob = document()
        .query_selector(BLOB_SELECTOR)?
        .ok_or_else(|| AppError::missing(BLOB_SELECTOR))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::new(format!("`{BLOB_SELECTOR}` is not an HTML element")))?;

    let follower = Rc::new(RefCell::new(Follower::new(
        viewport().center(),
        settings.cursor.damping,
    )));

    {
        let follower = follower.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            follower.borrow_mut().set_target(vector![
                event.client_x() as f64,
                event.client_y() as f64
            ]);
        });
        window()
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    info!("cursor blob: damping {}", settings.cursor.damping);

    Ok(run_frames(move || {
        let transform = {
            let mut follower = follower.borrow_mut();
            follower.step();
            follower.css_transform()
        };

        blob.style().set_property("transform", &transform)
    })?)
}
