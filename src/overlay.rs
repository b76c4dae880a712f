use crate::constants::{ERROR_ELEMENT_ID, LOADING_ELEMENT_ID, STATUS_ELEMENT_ID};
use web_sys as web;

/// Show `message` in the error banner, hide the loading indicator and log it.
pub fn show_error(document: &web::Document, message: &str) {
    log::error!("{}", message);
    if let Some(el) = document.get_element_by_id(ERROR_ELEMENT_ID) {
        el.set_text_content(Some(&format!("Error: {}", message)));
        _ = el.set_attribute("style", "display:block");
    }
    hide_loading(document);
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ELEMENT_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Replace the status line text.
#[inline]
pub fn set_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_ELEMENT_ID) {
        el.set_text_content(Some(text));
    }
}
