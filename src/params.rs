//! Time-varying Rössler coefficient modulation.
//!
//! The three coefficients (a, b, c) of the Rössler system each drift around a
//! fixed baseline along an independent sine wave. All three are sampled at the
//! same elapsed time within a frame so the system never sees skewed
//! coefficients.

use serde::Deserialize;

/// Baseline (midpoint) values for the three Rössler coefficients.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Baselines {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for Baselines {
    fn default() -> Self {
        Self {
            a: 0.2,
            b: 0.2,
            c: 5.7,
        }
    }
}

/// A single sinusoidal drift applied to one coefficient.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Wave {
    /// Angular frequency in radians per second of elapsed time.
    pub freq: f64,
    /// Peak deviation from the baseline.
    pub amp: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            freq: 0.0,
            amp: 0.0,
            phase: 0.0,
        }
    }
}

impl Wave {
    /// Deviation from the baseline at elapsed time `t`.
    pub fn offset_at(&self, t: f64) -> f64 {
        self.amp * (t * self.freq + self.phase).sin()
    }
}

/// The per-coefficient wave set.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Waves {
    pub a: Wave,
    pub b: Wave,
    pub c: Wave,
}

impl Default for Waves {
    fn default() -> Self {
        Self {
            a: Wave {
                freq: 0.002,
                amp: 0.05,
                phase: 0.0,
            },
            b: Wave {
                freq: 0.005,
                amp: 0.05,
                phase: 1.5,
            },
            c: Wave {
                freq: 0.007,
                amp: 3.0,
                phase: 3.0,
            },
        }
    }
}

/// The three Rössler coefficients at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Derives the instantaneous coefficients from baselines plus waves.
#[derive(Clone, Copy, Debug)]
pub struct ParamModulator {
    baselines: Baselines,
    waves: Waves,
}

impl ParamModulator {
    pub fn new(baselines: Baselines, waves: Waves) -> Self {
        Self { baselines, waves }
    }

    /// Coefficients at elapsed time `t`, all three sampled at the same `t`.
    pub fn at(&self, t: f64) -> Coefficients {
        Coefficients {
            a: self.baselines.a + self.waves.a.offset_at(t),
            b: self.baselines.b + self.waves.b.offset_at(t),
            c: self.baselines.c + self.waves.c.offset_at(t),
        }
    }

    /// Constant baseline coefficients, used while warming the system up
    /// before the clock is meaningful.
    pub fn baseline(&self) -> Coefficients {
        Coefficients {
            a: self.baselines.a,
            b: self.baselines.b,
            c: self.baselines.c,
        }
    }
}
