use log::{info, warn};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{
    Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::{document, query_all};

const ANCHOR_SELECTOR: &str = "a[href^='#']";

/// The fragment id of an in-page `href`, if it names one.
fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn scroll_to(target: Element) -> Result<(), JsValue> {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);

    target.scroll_into_view_with_scroll_into_view_options(&options);

    if let Ok(target) = target.dyn_into::<HtmlElement>() {
        target.focus()?;
    }

    Ok(())
}

/// Smooth-scrolls to the target of every same-page link instead of jumping.
pub fn install() -> Result<usize, JsValue> {
    let anchors = query_all(ANCHOR_SELECTOR)?;

    for anchor in &anchors {
        let link = anchor.clone();

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_id(&href).and_then(|id| document().get_element_by_id(id))
            else {
                return;
            };

            event.prevent_default();
            if let Err(err) = scroll_to(target) {
                warn!("scroll to {href} failed: {err:?}");
            }
        });
        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    info!("anchors: {} in-page links", anchors.len());

    Ok(anchors.len())
}

#[cfg(test)]
mod tests {
    use super::anchor_id;

    #[test]
    fn only_named_fragments_scroll() {
        assert_eq!(anchor_id("#work"), Some("work"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
        assert_eq!(anchor_id("/about#work"), None);
    }
}
