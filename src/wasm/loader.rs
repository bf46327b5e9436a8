use std::future::Future;

use js_sys::Promise;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{window, HtmlCanvasElement, HtmlImageElement};

use super::options::image_options_from_js;
use super::render::{context_2d, wave_image, WaveHandle};
use crate::config::{ImageConfig, ImageOptions};
use crate::error::WaveError;

/// Load `options.image_src` into the canvas `options.target_id` and wave it.
///
/// Options are validated before anything is requested, so a missing
/// `image_src` or `target_id` fails here rather than in the future. The
/// future resolves once the image is drawn and the timer is running, and
/// fails if the image cannot be loaded.
pub fn add_wavable_image(
    options: ImageOptions,
) -> Result<impl Future<Output = Result<WaveHandle, WaveError>>, WaveError> {
    let config = options.validate()?;
    Ok(load_and_wave(config))
}

async fn load_and_wave(config: ImageConfig) -> Result<WaveHandle, WaveError> {
    let image = load_image(&config.image_src).await?;
    let canvas = canvas_by_id(&config.target_id)?;

    let (w, h) = config.canvas_size(image.natural_width(), image.natural_height());
    canvas.set_width(w);
    canvas.set_height(h);
    context_2d(&canvas)?
        .draw_image_with_html_image_element(&image, 0.0, config.draw_offset())
        .map_err(WaveError::host)?;

    wave_image(config.wave_options(canvas))
}

async fn load_image(src: &str) -> Result<HtmlImageElement, WaveError> {
    let image = HtmlImageElement::new().map_err(WaveError::host)?;
    let loaded = Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(src);

    let result = JsFuture::from(loaded).await;
    image.set_onload(None);
    image.set_onerror(None);
    result.map_err(|_| WaveError::ImageLoad(src.to_owned()))?;

    log::debug!(
        "loaded {} ({}x{})",
        src,
        image.natural_width(),
        image.natural_height()
    );
    Ok(image)
}

fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, WaveError> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| WaveError::Host("no document".into()))?
        .get_element_by_id(id)
        .ok_or_else(|| WaveError::Host(format!("#{id} not found")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| WaveError::Host(format!("#{id} is not a canvas")))
}

/// JS entry point: throws `ReferenceError` for missing options, otherwise
/// returns a promise of the running `WaveHandle`.
#[wasm_bindgen(js_name = addWavableImage)]
pub fn add_wavable_image_js(options: &JsValue) -> Result<Promise, JsValue> {
    let pending = add_wavable_image(image_options_from_js(options)?)?;
    Ok(future_to_promise(async move {
        match pending.await {
            Ok(handle) => Ok(handle.into()),
            Err(e) => {
                log::error!("{e}");
                Err(e.into())
            }
        }
    }))
}
