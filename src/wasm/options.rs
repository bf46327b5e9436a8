//! Reading option objects handed in from JavaScript.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::config::{ImageOptions, Orientation, WaveOptions};
use crate::error::WaveError;

fn field(obj: &JsValue, key: &str) -> Result<Option<JsValue>, WaveError> {
    let value = Reflect::get(obj, &JsValue::from_str(key)).map_err(WaveError::host)?;
    Ok(if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    })
}

fn number(obj: &JsValue, key: &str) -> Result<Option<f64>, WaveError> {
    Ok(field(obj, key)?.and_then(|v| v.as_f64()))
}

fn string(obj: &JsValue, key: &str) -> Result<Option<String>, WaveError> {
    Ok(field(obj, key)?.and_then(|v| v.as_string()))
}

/// Wave settings from `{ amplitude, wavelength, period, shading, squeeze,
/// fps, "vertical-wave" }`. The surface is left unset.
pub fn wave_options_from_js<S>(obj: &JsValue) -> Result<WaveOptions<S>, WaveError> {
    if !obj.is_object() {
        return Ok(WaveOptions::default());
    }
    Ok(WaveOptions {
        surface: None,
        amplitude: number(obj, "amplitude")?,
        wavelength: number(obj, "wavelength")?,
        period: number(obj, "period")?,
        shading: number(obj, "shading")?,
        squeeze: number(obj, "squeeze")?,
        fps: number(obj, "fps")?,
        orientation: field(obj, "vertical-wave")?
            .map(|v| Orientation::from_vertical_flag(v.is_truthy())),
    })
}

/// Wave settings plus the `canvas` element to wave. A missing or non-canvas
/// `canvas` leaves the surface unset.
pub fn canvas_wave_options_from_js(
    obj: &JsValue,
) -> Result<WaveOptions<HtmlCanvasElement>, WaveError> {
    let mut options = wave_options_from_js(obj)?;
    if obj.is_object() {
        options.surface = field(obj, "canvas")?.and_then(|v| v.dyn_into().ok());
    }
    Ok(options)
}

/// Image settings from `{ image_src, target_id, image_padding, ... }`.
/// `canvas_id` is accepted in place of `target_id`.
pub fn image_options_from_js(obj: &JsValue) -> Result<ImageOptions, WaveError> {
    if !obj.is_object() {
        return Ok(ImageOptions::default());
    }
    let target_id = match string(obj, "target_id")? {
        Some(id) => Some(id),
        None => string(obj, "canvas_id")?,
    };
    Ok(ImageOptions {
        image_src: string(obj, "image_src")?,
        target_id,
        image_padding: number(obj, "image_padding")?,
        wave: wave_options_from_js(obj)?,
    })
}
