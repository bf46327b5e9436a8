//! Per-pixel wave distortion.
//!
//! Every frame is rebuilt from the pristine snapshot, so nothing accumulates
//! between ticks. For a horizontal wave each column `x` is displaced
//! vertically by
//!
//! ```text
//! offset = sin(x / wavelength - t) * amplitude * (x / width)
//! ```
//!
//! where `t` is the clock in milliseconds divided by `period`. The left edge
//! stays pinned and the displacement grows towards the right, like a flag on
//! a pole. Brightness follows the slope of the offset along the row. A
//! vertical wave is the same computation with the axes swapped.

use crate::config::{Orientation, WaveParams};
use crate::error::{Result, WaveError};
use crate::surface::{Surface, SurfaceExtent};

/// Phase of the wave at `now_ms`.
pub fn phase(now_ms: f64, period: f64) -> f64 {
    now_ms / period
}

/// Displacement at `pos` along an axis of length `len`.
///
/// Non-finite results (zero wavelength, zero period) mean no displacement.
pub fn offset(pos: u32, len: u32, params: &WaveParams, phase: f64) -> f64 {
    let pos = f64::from(pos);
    let pct = pos / f64::from(len);
    let o = (pos / params.wavelength - phase).sin() * params.amplitude * pct;
    if o.is_finite() {
        o
    } else {
        0.0
    }
}

/// Index along the displaced axis that `at` reads from, clamped to `[0, len)`.
pub fn source_index(at: u32, displacement: f64, len: u32) -> u32 {
    let d = if displacement.is_finite() {
        displacement
    } else {
        0.0
    };
    let src = (f64::from(at) + d).floor();
    src.clamp(0.0, f64::from(len.saturating_sub(1))) as u32
}

/// Brightness delta for an offset change of `delta` pixels.
pub fn shade(delta: f64, shading: f64) -> f64 {
    let s = delta * shading;
    if s.is_finite() {
        s
    } else {
        0.0
    }
}

/// Shaded channel value, clamped and rounded half to even like a store into
/// a `Uint8ClampedArray`.
pub fn shade_channel(value: u8, shade: f64) -> u8 {
    (f64::from(value) + shade).clamp(0.0, 255.0).round_ties_even() as u8
}

/// Render one frame of the wave from `pristine` into `out` at `now_ms`.
///
/// Fails without touching `out` if the two surfaces differ in size.
pub fn render_frame(
    pristine: &Surface,
    out: &mut Surface,
    params: &WaveParams,
    now_ms: f64,
) -> Result<()> {
    let expected = (pristine.width(), pristine.height());
    let actual = (out.width(), out.height());
    if expected != actual {
        return Err(WaveError::SizeMismatch { expected, actual });
    }
    render_into(pristine, out, params, now_ms);
    Ok(())
}

/// `render_frame` for surfaces already known to have the same size.
fn render_into(pristine: &Surface, out: &mut Surface, params: &WaveParams, now_ms: f64) {
    let phase = phase(now_ms, params.period);

    // `along` runs with the wave, `across` is the displaced axis.
    let (along_len, across_len) = match params.orientation {
        Orientation::Horizontal => (pristine.width(), pristine.height()),
        Orientation::Vertical => (pristine.height(), pristine.width()),
    };
    let to_xy = |along: u32, across: u32| match params.orientation {
        Orientation::Horizontal => (along, across),
        Orientation::Vertical => (across, along),
    };

    // Offsets only depend on position along the wave, not on the line.
    let offsets: Vec<f64> = (0..along_len)
        .map(|a| offset(a, along_len, params, phase))
        .collect();

    let half = f64::from(across_len) / 2.0;
    for across in 0..across_len {
        let sq = (f64::from(across) - half) * params.squeeze;
        let mut last = 0.0;

        for (along, &o) in (0..along_len).zip(offsets.iter()) {
            let pct = f64::from(along) / f64::from(along_len);
            let src = source_index(across, o + sq * pct, across_len);
            let s = shade(o - last, params.shading);
            last = o;

            let (sx, sy) = to_xy(along, src);
            let [r, g, b, a] = pristine.pixel(sx, sy);
            let (dx, dy) = to_xy(along, across);
            out.set_pixel(
                dx,
                dy,
                [shade_channel(r, s), shade_channel(g, s), shade_channel(b, s), a],
            );
        }
    }
}

/// Animation state for one surface: the pristine snapshot plus the frame
/// being rebuilt on each tick.
#[derive(Debug, Clone)]
pub struct WaveAnimation {
    pristine: Surface,
    frame: Surface,
    params: WaveParams,
}

impl WaveAnimation {
    pub fn new(pristine: Surface, params: WaveParams) -> Self {
        let frame = pristine.clone();
        Self {
            pristine,
            frame,
            params,
        }
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn pristine(&self) -> &Surface {
        &self.pristine
    }

    pub fn frame(&self) -> &Surface {
        &self.frame
    }

    /// Recompute the frame for `now_ms` and return it.
    pub fn tick(&mut self, now_ms: f64) -> &Surface {
        render_into(&self.pristine, &mut self.frame, &self.params, now_ms);
        &self.frame
    }
}
