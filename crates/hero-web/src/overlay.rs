use crate::constants::OVERLAY_LOADED_CLASS;
use web_sys as web;

/// Fade the loading overlay out. Idempotent; CSS handles the transition and
/// disables pointer events once faded.
#[inline]
pub fn mark_loaded(overlay: &web::HtmlElement) {
    let _ = overlay.class_list().add_1(OVERLAY_LOADED_CLASS);
}
