use std::fmt;

use log::warn;
use shared::Settings;
use wasm_bindgen::JsValue;

use super::{anchor, background, blob, hover, mail, reveal, year};
use crate::frame::FrameHandle;

/// Errors concerning the [`App`].
#[derive(Debug)]
pub struct AppError(String);

impl AppError {
    pub fn new(message: impl Into<String>) -> AppError {
        AppError(message.into())
    }

    pub fn missing(selector: &str) -> AppError {
        AppError(format!("no element matches `{selector}`"))
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError(format!("{value:?}"))
    }
}

impl From<AppError> for JsValue {
    fn from(app_error: AppError) -> Self {
        JsValue::from_str(&app_error.0)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every effect installed on the page.
///
/// Components are independent: one that cannot find its element is skipped
/// and the rest carry on.
#[derive(Default)]
pub struct App {
    background: Option<FrameHandle>,
    blob: Option<FrameHandle>,
    reveals: usize,
    hovers: usize,
    anchors: usize,
    mail_forms: usize,
}

impl App {
    pub fn install(settings: &Settings) -> App {
        optional(year::stamp());

        App {
            background: optional(background::install(settings)),
            blob: optional(blob::install(settings)),
            reveals: optional(reveal::install(&settings.reveal)).unwrap_or_default(),
            hovers: optional(hover::install(&settings.hover)).unwrap_or_default(),
            anchors: optional(anchor::install()).unwrap_or_default(),
            mail_forms: optional(mail::install(&settings.mail)).unwrap_or_default(),
        }
    }

    /// Halts the background and cursor loops.
    pub fn stop(&self) {
        for handle in [&self.background, &self.blob].into_iter().flatten() {
            handle.stop();
        }
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let running = |handle: &Option<FrameHandle>| {
            handle
                .as_ref()
                .map(FrameHandle::is_running)
                .unwrap_or_default()
        };

        write!(
            f,
            "background {}, blob {}, {} reveals, {} hover effects, {} anchors, {} mail forms",
            if running(&self.background) { "on" } else { "off" },
            if running(&self.blob) { "on" } else { "off" },
            self.reveals,
            self.hovers,
            self.anchors,
            self.mail_forms,
        )
    }
}

/// Skips a component that failed to install.
fn optional<T, E>(result: Result<T, E>) -> Option<T>
where
    E: Into<AppError>,
{
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{}", err.into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_components_are_skipped() {
        let installed: Option<usize> = optional(Ok::<_, AppError>(3));
        let skipped: Option<usize> = optional(Err(AppError::missing("#nowhere")));

        assert_eq!(installed, Some(3));
        assert_eq!(skipped, None);
    }

    #[test]
    fn partial_install_still_reports() {
        let app = App {
            reveals: optional(Ok::<_, AppError>(4)).unwrap_or_default(),
            hovers: optional(Err::<usize, _>(AppError::new("observer refused")))
                .unwrap_or_default(),
            anchors: 2,
            ..Default::default()
        };

        app.stop();

        assert_eq!(
            app.to_string(),
            "background off, blob off, 4 reveals, 0 hover effects, 2 anchors, 0 mail forms"
        );
    }
}
