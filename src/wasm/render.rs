use wasm_bindgen::{closure::Closure, prelude::*, Clamped, JsCast};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use super::options::canvas_wave_options_from_js;
use crate::config::{WaveConfig, WaveOptions};
use crate::error::WaveError;
use crate::surface::{Surface, SurfaceExtent};
use crate::wave::WaveAnimation;

impl SurfaceExtent for HtmlCanvasElement {
    fn width(&self) -> u32 {
        HtmlCanvasElement::width(self)
    }

    fn height(&self) -> u32 {
        HtmlCanvasElement::height(self)
    }
}

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, WaveError> {
    canvas
        .get_context("2d")
        .map_err(WaveError::host)?
        .ok_or_else(|| WaveError::Host("2d canvas context not supported".into()))?
        .dyn_into()
        .map_err(|_| WaveError::Host("context is not a CanvasRenderingContext2d".into()))
}

/// Repeating wave timer. Dropping the handle stops the animation; call
/// [`WaveHandle::forget`] to leave it running for the life of the page.
#[wasm_bindgen]
pub struct WaveHandle {
    id: i32,
    tick: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl WaveHandle {
    /// Interval id as returned by `setInterval`.
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> i32 {
        self.id
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    /// Stop the timer. Safe to call more than once.
    pub fn cancel(&mut self) {
        if self.tick.take().is_some() {
            if let Some(window) = window() {
                window.clear_interval_with_handle(self.id);
            }
            log::debug!("wave timer {} cancelled", self.id);
        }
    }
}

impl WaveHandle {
    pub fn forget(mut self) {
        if let Some(tick) = self.tick.take() {
            tick.forget();
        }
    }
}

impl Drop for WaveHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Snapshot the canvas and start redrawing it with the wave every
/// `1000 / fps` milliseconds.
pub fn wave_image(options: WaveOptions<HtmlCanvasElement>) -> Result<WaveHandle, WaveError> {
    let WaveConfig {
        surface: canvas,
        params,
    } = options.validate()?;
    let ctx = context_2d(&canvas)?;
    let (w, h) = (canvas.width(), canvas.height());

    let snapshot = ctx
        .get_image_data(0.0, 0.0, f64::from(w), f64::from(h))
        .map_err(WaveError::host)?;
    let pristine = Surface::from_rgba(w, h, snapshot.data().0)?;
    let mut animation = WaveAnimation::new(pristine, params);

    let tick = Closure::wrap(Box::new(move || {
        let frame = animation.tick(js_sys::Date::now());
        let put = ImageData::new_with_u8_clamped_array_and_sh(Clamped(frame.as_rgba()), w, h)
            .and_then(|data| ctx.put_image_data(&data, 0.0, 0.0));
        if let Err(e) = put {
            log::error!("wave frame not drawn: {:?}", e);
        }
    }) as Box<dyn FnMut()>);

    let window = window().ok_or_else(|| WaveError::Host("no window".into()))?;
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            params.interval_ms(),
        )
        .map_err(WaveError::host)?;

    log::info!(
        "waving {}x{} canvas every {} ms ({:?})",
        w,
        h,
        params.interval_ms(),
        params.orientation
    );
    Ok(WaveHandle {
        id,
        tick: Some(tick),
    })
}

/// JS entry point taking `{ canvas, amplitude, ..., "vertical-wave" }`.
/// Throws `ReferenceError` when `canvas` is missing.
#[wasm_bindgen(js_name = waveImage)]
pub fn wave_image_js(options: &JsValue) -> Result<WaveHandle, JsValue> {
    Ok(wave_image(canvas_wave_options_from_js(options)?)?)
}
