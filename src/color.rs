//! Per-trajectory color cycling.
//!
//! Each trajectory cycles through the hue wheel at a slightly different
//! speed, offset by its fixed hue offset, so neighbouring trails never share
//! a color for long. Colors come out as linear RGB in [0, 1] via a standard
//! HSL conversion at full saturation and half lightness.

use serde::Deserialize;

/// Hue cycling speeds: trajectory `i` cycles at `base_speed + i·index_step`.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ColorCycle {
    pub base_speed: f64,
    pub index_step: f64,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self {
            base_speed: 0.1,
            index_step: 0.01,
        }
    }
}

impl ColorCycle {
    /// Hue in [0, 1) for trajectory `index` at elapsed time `t`.
    pub fn hue_at(&self, t: f64, index: usize, color_offset: f64) -> f64 {
        let speed = self.base_speed + index as f64 * self.index_step;
        let wave = 0.5 + 0.5 * (t * speed).sin();
        (wave + color_offset).rem_euclid(1.0)
    }

    /// RGB color for trajectory `index` at elapsed time `t`.
    pub fn rgb_at(&self, t: f64, index: usize, color_offset: f64) -> [f32; 3] {
        hsl_to_rgb(self.hue_at(t, index, color_offset) as f32, 1.0, 0.5)
    }
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Standard HSL to RGB conversion; all inputs and outputs in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}
