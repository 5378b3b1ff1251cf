//! Engine configuration.
//!
//! All knobs the simulation consumes at construction, with defaults matching
//! the original demo. Configs deserialize from JSON with every field
//! optional, so a file only needs to name what it overrides.

use serde::Deserialize;
use thiserror::Error;

use crate::color::ColorCycle;
use crate::params::{Baselines, Waves};

/// Invalid construction-time configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window size must be at least 1")]
    ZeroWindow,

    #[error("buffer capacity {capacity} must exceed window size {window} (recycle factor must be at least 2)")]
    CapacityTooSmall { window: usize, capacity: usize },

    #[error("integration step must be finite and positive, got {0}")]
    InvalidStep(f64),
}

/// Everything the simulation needs at construction.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of independent trajectories.
    pub trajectory_count: usize,
    /// Fixed integration step in simulated seconds.
    pub dt: f64,
    /// Target visible trail length in points.
    pub window_size: usize,
    /// Buffer capacity as a multiple of the window size.
    pub recycle_factor: usize,
    /// Discarded integration steps run before the first visible frame.
    pub warmup_steps: usize,
    /// Global visual scale applied to every written position.
    pub scale_factor: f64,
    /// Coefficient baselines.
    pub baselines: Baselines,
    /// Per-coefficient sinusoidal drift.
    pub waves: Waves,
    /// Hue cycling speeds.
    pub color: ColorCycle,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trajectory_count: 7,
            dt: 0.01,
            window_size: 1234,
            recycle_factor: 5,
            warmup_steps: 5000,
            scale_factor: 10.0,
            baselines: Baselines::default(),
            waves: Waves::default(),
            color: ColorCycle::default(),
        }
    }
}

impl SimConfig {
    /// Total allocated points per trail buffer.
    pub fn capacity(&self) -> usize {
        self.window_size * self.recycle_factor
    }

    /// Fail fast on configurations the cursor lifecycle cannot support.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if self.capacity() <= self.window_size {
            return Err(ConfigError::CapacityTooSmall {
                window: self.window_size,
                capacity: self.capacity(),
            });
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidStep(self.dt));
        }
        Ok(())
    }
}
