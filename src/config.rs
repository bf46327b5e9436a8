//! Wave and image options with their defaults.
//!
//! The `*Options` structs are what callers hand in: every optional knob is an
//! `Option` so "unset" is explicit. `validate` fills in the defaults and
//! returns the matching `*Config`. Converting a config back into options and
//! validating again yields the same config.

use crate::error::{Result, WaveError};
use crate::surface::SurfaceExtent;

pub const DEFAULT_AMPLITUDE: f64 = 10.0;
pub const DEFAULT_PERIOD: f64 = 200.0;
pub const DEFAULT_SHADING: f64 = 100.0;
pub const DEFAULT_SQUEEZE: f64 = 0.0;
pub const DEFAULT_FPS: f64 = 30.0;
/// Default wavelength is the surface width divided by this.
pub const WAVELENGTH_DIVISOR: f64 = 10.0;
pub const DEFAULT_IMAGE_PADDING: f64 = 15.0;

/// Axis the wave travels along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Columns are displaced vertically, wave runs left to right.
    #[default]
    Horizontal,
    /// Rows are displaced horizontally, wave runs top to bottom.
    Vertical,
}

impl Orientation {
    pub fn from_vertical_flag(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// Numeric parameters of the per-pixel wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Peak displacement in pixels.
    pub amplitude: f64,
    /// Pixels per radian of phase along the wave axis.
    pub wavelength: f64,
    /// Milliseconds per radian of phase over time.
    pub period: f64,
    /// Brightness change per pixel of offset delta.
    pub shading: f64,
    pub squeeze: f64,
    pub fps: f64,
    pub orientation: Orientation,
}

impl WaveParams {
    /// Defaults for a surface `width` pixels wide.
    pub fn for_width(width: u32) -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            wavelength: f64::from(width) / WAVELENGTH_DIVISOR,
            period: DEFAULT_PERIOD,
            shading: DEFAULT_SHADING,
            squeeze: DEFAULT_SQUEEZE,
            fps: DEFAULT_FPS,
            orientation: Orientation::Horizontal,
        }
    }

    /// Timer interval for `fps`, in whole milliseconds.
    ///
    /// Zero fps saturates to the longest interval, NaN and negative rates to 0.
    pub fn interval_ms(&self) -> i32 {
        let ms = (1000.0 / self.fps).round();
        if ms.is_nan() {
            0
        } else {
            ms.max(0.0) as i32
        }
    }
}

/// Unvalidated wave options for a surface of type `S`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveOptions<S> {
    pub surface: Option<S>,
    pub amplitude: Option<f64>,
    pub wavelength: Option<f64>,
    pub period: Option<f64>,
    pub shading: Option<f64>,
    pub squeeze: Option<f64>,
    pub fps: Option<f64>,
    pub orientation: Option<Orientation>,
}

impl<S> Default for WaveOptions<S> {
    fn default() -> Self {
        Self {
            surface: None,
            amplitude: None,
            wavelength: None,
            period: None,
            shading: None,
            squeeze: None,
            fps: None,
            orientation: None,
        }
    }
}

impl<S> WaveOptions<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Some(surface),
            ..Self::default()
        }
    }
}

impl<S: SurfaceExtent> WaveOptions<S> {
    pub fn validate(self) -> Result<WaveConfig<S>> {
        let surface = self.surface.ok_or(WaveError::MissingOption("canvas"))?;
        let defaults = WaveParams::for_width(surface.width());
        let params = WaveParams {
            amplitude: self.amplitude.unwrap_or(defaults.amplitude),
            wavelength: self.wavelength.unwrap_or(defaults.wavelength),
            period: self.period.unwrap_or(defaults.period),
            shading: self.shading.unwrap_or(defaults.shading),
            squeeze: self.squeeze.unwrap_or(defaults.squeeze),
            fps: self.fps.unwrap_or(defaults.fps),
            orientation: self.orientation.unwrap_or(defaults.orientation),
        };
        Ok(WaveConfig { surface, params })
    }
}

/// Validated wave options: a surface plus fully populated parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveConfig<S> {
    pub surface: S,
    pub params: WaveParams,
}

impl<S> From<WaveConfig<S>> for WaveOptions<S> {
    fn from(config: WaveConfig<S>) -> Self {
        let p = config.params;
        Self {
            surface: Some(config.surface),
            amplitude: Some(p.amplitude),
            wavelength: Some(p.wavelength),
            period: Some(p.period),
            shading: Some(p.shading),
            squeeze: Some(p.squeeze),
            fps: Some(p.fps),
            orientation: Some(p.orientation),
        }
    }
}

/// Unvalidated options for `add_wavable_image`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageOptions {
    pub image_src: Option<String>,
    /// Id of the canvas element the image is drawn into.
    pub target_id: Option<String>,
    /// Space above and below the image, in pixels. Not validated: negative
    /// or fractional values go through the same arithmetic as any other.
    pub image_padding: Option<f64>,
    /// Wave settings applied once the image is on the canvas. The surface
    /// slot is filled in after load and is ignored here.
    pub wave: WaveOptions<()>,
}

impl ImageOptions {
    pub fn new(image_src: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            image_src: Some(image_src.into()),
            target_id: Some(target_id.into()),
            ..Self::default()
        }
    }

    pub fn validate(self) -> Result<ImageConfig> {
        let image_src = self.image_src.ok_or(WaveError::MissingOption("image_src"))?;
        let target_id = self.target_id.ok_or(WaveError::MissingOption("target_id"))?;
        Ok(ImageConfig {
            image_src,
            target_id,
            image_padding: self.image_padding.unwrap_or(DEFAULT_IMAGE_PADDING),
            wave: WaveOptions {
                surface: None,
                ..self.wave
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageConfig {
    pub image_src: String,
    pub target_id: String,
    pub image_padding: f64,
    pub wave: WaveOptions<()>,
}

impl ImageConfig {
    /// Canvas size needed to hold an image of the given size plus padding.
    ///
    /// The height is `image_height + 2 * padding` truncated to a canvas
    /// dimension: negative or NaN results give 0.
    pub fn canvas_size(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        let height = f64::from(image_height) + self.image_padding * 2.0;
        (image_width, height.max(0.0) as u32)
    }

    /// Vertical offset at which the image is drawn.
    pub fn draw_offset(&self) -> f64 {
        self.image_padding / 2.0
    }

    /// Attach the loaded surface to the wave settings.
    pub fn wave_options<S>(&self, surface: S) -> WaveOptions<S> {
        let w = &self.wave;
        WaveOptions {
            surface: Some(surface),
            amplitude: w.amplitude,
            wavelength: w.wavelength,
            period: w.period,
            shading: w.shading,
            squeeze: w.squeeze,
            fps: w.fps,
            orientation: w.orientation,
        }
    }
}

impl From<ImageConfig> for ImageOptions {
    fn from(config: ImageConfig) -> Self {
        Self {
            image_src: Some(config.image_src),
            target_id: Some(config.target_id),
            image_padding: Some(config.image_padding),
            wave: config.wave,
        }
    }
}
