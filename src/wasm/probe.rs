use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{window, HtmlCanvasElement};

/// True iff a 2D context can be created on a fresh canvas element.
#[wasm_bindgen(js_name = supportsCanvas)]
pub fn supports_canvas() -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .and_then(|canvas| canvas.get_context("2d").ok().flatten())
        .is_some()
}

pub fn user_agent() -> Option<String> {
    window()?.navigator().user_agent().ok()
}

#[wasm_bindgen(js_name = firefoxVersion)]
pub fn firefox_version() -> Option<f64> {
    crate::probe::firefox_version(&user_agent()?)
}

/// Whether the wave can run in this browser.
pub fn effect_supported() -> bool {
    crate::probe::effect_supported(supports_canvas(), firefox_version())
}
