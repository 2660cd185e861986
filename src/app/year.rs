use super::AppError;
use crate::document;

const YEAR_SELECTOR: &str = "#year";

/// Writes the current year into `#year`.
pub fn stamp() -> Result<(), AppError> {
    let element = document()
        .query_selector(YEAR_SELECTOR)?
        .ok_or_else(|| AppError::missing(YEAR_SELECTOR))?;

    element.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));

    Ok(())
}
