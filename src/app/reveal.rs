use std::{cell::RefCell, rc::Rc};

use js_sys::Array;
use log::{debug, info, warn};
use shared::{Reveal, RevealSet, RevealSettings};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::query_all;

const ANIMATE_SELECTOR: &str = "[data-animate]";
const INDEX_ATTRIBUTE: &str = "data-reveal-index";

fn on_intersect(
    entries: Array,
    observer: &IntersectionObserver,
    reveals: &mut RevealSet,
    class: &str,
) -> Result<(), JsValue> {
    for entry in entries.iter() {
        let entry = entry.dyn_into::<IntersectionObserverEntry>()?;

        if !entry.is_intersecting() {
            continue;
        }

        let target = entry.target();
        let Some(index) = target
            .get_attribute(INDEX_ATTRIBUTE)
            .and_then(|index| index.parse::<usize>().ok())
        else {
            continue;
        };

        if reveals.reveal(index) == Reveal::Revealed {
            target.class_list().add_1(class)?;
            observer.unobserve(&target);
            debug!("revealed #{index}, {} left", reveals.remaining());
        }
    }

    Ok(())
}

/// Adds the reveal class to each `[data-animate]` element the first time it scrolls into view.
pub fn install(settings: &RevealSettings) -> Result<usize, JsValue> {
    let elements = query_all(ANIMATE_SELECTOR)?;

    if elements.is_empty() {
        return Ok(0);
    }

    let reveals = Rc::new(RefCell::new(RevealSet::new(elements.len())));
    let class = settings.class.clone();

    let closure = Closure::<dyn FnMut(_, _)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let mut reveals = reveals.borrow_mut();

            if let Err(err) = on_intersect(entries, &observer, &mut reveals, &class) {
                warn!("reveal failed: {err:?}");
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.threshold));

    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
    closure.forget();

    for (index, element) in elements.iter().enumerate() {
        element.set_attribute(INDEX_ATTRIBUTE, &index.to_string())?;
        observer.observe(element);
    }

    info!("reveal: observing {} elements", elements.len());

    Ok(elements.len())
}
