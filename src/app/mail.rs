use std::cell::RefCell;

use log::{info, warn};
use shared::{MailDraft, MailSettings};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Event, FormData, HtmlFormElement};

use crate::{query_all, window};

const FORM_SELECTOR: &str = "form[data-mail]";
const ADDRESS_ATTRIBUTE: &str = "data-mail";
const BOUND_ATTRIBUTE: &str = "data-mail-bound";

thread_local! {
    static MAIL_SETTINGS: RefCell<MailSettings> = RefCell::new(MailSettings::default());
}

/// Reads the draft out of the contact form; absent fields are left empty.
fn read_draft(form: &HtmlFormElement) -> Result<MailDraft, JsValue> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();

    Ok(MailDraft::new(field("name"), field("email"), field("message")))
}

/// Hands the form's contents to the visitor's mail client and clears the form.
fn compose(form: &HtmlFormElement, settings: &MailSettings) -> Result<(), JsValue> {
    let uri = read_draft(form)?.mailto(settings);

    window().location().set_href(&uri)?;
    form.reset();

    Ok(())
}

fn settings_for(form: &HtmlFormElement, settings: &MailSettings) -> MailSettings {
    settings.for_form(form.get_attribute(ADDRESS_ATTRIBUTE).as_deref())
}

/// Submit handler for pages wiring the form inline, as in `onsubmit="return sendMail(event)"`.
///
/// Forms already bound by [`install`] are left to their own listener.
#[wasm_bindgen(js_name = sendMail)]
pub fn send_mail(event: Event) -> Result<bool, JsValue> {
    event.prevent_default();

    let form = event
        .target()
        .ok_or_else(|| JsValue::from_str("submit event has no target"))?
        .dyn_into::<HtmlFormElement>()?;

    if form.has_attribute(BOUND_ATTRIBUTE) {
        return Ok(false);
    }

    let settings = MAIL_SETTINGS.with(|cell| settings_for(&form, &cell.borrow()));
    compose(&form, &settings)?;

    Ok(false)
}

/// Intercepts submission of every `form[data-mail]`.
pub fn install(settings: &MailSettings) -> Result<usize, JsValue> {
    MAIL_SETTINGS.with(|cell| cell.replace(settings.clone()));

    let forms = query_all(FORM_SELECTOR)?;

    for form in &forms {
        let Some(form) = form.dyn_ref::<HtmlFormElement>() else {
            warn!("skipping `{FORM_SELECTOR}` that is not a form");
            continue;
        };

        let settings = settings_for(form, settings);
        let target = form.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            event.prevent_default();

            if let Err(err) = compose(&target, &settings) {
                warn!("could not open the mail client: {err:?}");
            }
        });
        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        form.set_attribute(BOUND_ATTRIBUTE, "")?;
        closure.forget();
    }

    info!("mail: {} contact forms", forms.len());

    Ok(forms.len())
}
