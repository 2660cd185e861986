use std::{cell::RefCell, rc::Rc};

use log::{info, warn};
use nalgebra::vector;
use shared::{Bounds, HoverEffect, HoverSettings, HoverStyle, Magnet, Tilt};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CssStyleDeclaration, HtmlElement, MouseEvent};

use crate::{frame::FrameGate, query_all};

const TILT_SELECTOR: &str = ".tilt";
const MAGNET_SELECTOR: &str = ".magnet";

fn apply_style(style: &CssStyleDeclaration, hover_style: &HoverStyle) -> Result<(), JsValue> {
    style.set_property("transform", &hover_style.transform)?;

    if let Some(box_shadow) = &hover_style.box_shadow {
        style.set_property("box-shadow", box_shadow)?;
    }

    Ok(())
}

fn bounds(element: &HtmlElement) -> Bounds {
    let rect = element.get_bounding_client_rect();

    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Drives `effect` from pointer movement over `element`.
///
/// Moves update the effect immediately but restyle at most once per frame;
/// leaving restyles at once and drops any pending frame.
pub fn bind<E>(element: HtmlElement, effect: E) -> Result<(), JsValue>
where
    E: HoverEffect + 'static,
{
    let effect = Rc::new(RefCell::new(effect));

    let gate = {
        let effect = effect.clone();
        let element = element.clone();

        Rc::new(FrameGate::new(move || {
            if let Err(err) = apply_style(&element.style(), &effect.borrow().style()) {
                warn!("hover update failed: {err:?}");
            }
        }))
    };

    {
        let effect = effect.clone();
        let gate = gate.clone();
        let target = element.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let pointer = vector![event.client_x() as f64, event.client_y() as f64];
            effect.borrow_mut().on_move(&bounds(&target), pointer);

            if let Err(err) = gate.request() {
                warn!("hover frame request failed: {err:?}");
            }
        });
        element.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let target = element.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: MouseEvent| {
            gate.cancel();

            let mut effect = effect.borrow_mut();
            effect.on_leave();

            if let Err(err) = apply_style(&target.style(), &effect.style()) {
                warn!("hover reset failed: {err:?}");
            }
        });
        element
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn bind_all<E, F>(selector: &str, make: F) -> Result<usize, JsValue>
where
    E: HoverEffect + 'static,
    F: Fn() -> E,
{
    let mut bound = 0;

    for element in query_all(selector)? {
        match element.dyn_into::<HtmlElement>() {
            Ok(element) => {
                bind(element, make())?;
                bound += 1;
            }
            Err(element) => warn!("skipping non-HTML `{selector}` element <{}>", element.tag_name()),
        }
    }

    Ok(bound)
}

/// Binds tilt to every `.tilt` card and magnetism to every `.magnet` button.
pub fn install(settings: &HoverSettings) -> Result<usize, JsValue> {
    let settings = *settings;

    let tilts = bind_all(TILT_SELECTOR, || Tilt::new(settings))?;
    let magnets = bind_all(MAGNET_SELECTOR, || Magnet::new(settings))?;

    info!("hover: {tilts} tilt cards, {magnets} magnetic buttons");

    Ok(tilts + magnets)
}
