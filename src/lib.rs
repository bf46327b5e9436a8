//! Waving-flag canvas effect.
//!
//! The pixel math, options and user-agent parsing are plain Rust and build on
//! any target. The browser side (canvas probe, image loading, the redraw
//! timer) lives in [`wasm`] and only compiles for wasm32.

pub mod config;
pub mod error;
pub mod logging;
pub mod probe;
pub mod surface;
pub mod wave;

pub use config::{ImageConfig, ImageOptions, Orientation, WaveConfig, WaveOptions, WaveParams};
pub use error::WaveError;
pub use logging::LogConfig;
pub use surface::{Surface, SurfaceExtent};
pub use wave::WaveAnimation;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::logging::LogConfig;

    mod demo;
    pub mod loader;
    pub mod options;
    pub mod probe;
    pub mod render;

    pub use loader::add_wavable_image;
    pub use probe::{effect_supported, firefox_version, supports_canvas};
    pub use render::{wave_image, WaveHandle};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        LogConfig::default().install();

        if !effect_supported() {
            log::warn!(
                "wave disabled: canvas={} firefox={:?}",
                supports_canvas(),
                firefox_version()
            );
            return Ok(());
        }

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        if let Err(e) = demo::add_wavable_flags(&document) {
            log::error!("{e}");
        }
        Ok(())
    }
}
