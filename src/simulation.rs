//! Per-frame simulation driver.
//!
//! Owns every moving part: the trajectory states, one trail buffer per
//! trajectory, the single shared cursor, and the clock. Construction runs
//! the blocking warm-up phase; afterwards each `tick` advances the whole
//! system by one frame and returns the render view.

use crate::color::ColorCycle;
use crate::config::{ConfigError, SimConfig};
use crate::frame::{FrameView, TrailView};
use crate::integrator::rk4_step;
use crate::params::ParamModulator;
use crate::trail::{TrailBuffer, TrailCursor};
use crate::trajectory::TrajectorySet;

pub struct Simulation {
    dt: f64,
    scale_factor: f64,
    modulator: ParamModulator,
    color: ColorCycle,
    trajectories: TrajectorySet,
    trails: Vec<TrailBuffer>,
    cursor: TrailCursor,
    clock: f64,
}

impl Simulation {
    /// Validate the configuration, build the trajectory set and buffers, and
    /// run the warm-up phase. Returns with the clock at zero and the cursor
    /// at (0, 0), ready for the first production tick.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let capacity = config.capacity();
        let trajectories = TrajectorySet::new(config.trajectory_count);
        let trails = (0..config.trajectory_count)
            .map(|_| TrailBuffer::new(capacity))
            .collect();

        let mut sim = Self {
            dt: config.dt,
            scale_factor: config.scale_factor,
            modulator: ParamModulator::new(config.baselines, config.waves),
            color: config.color,
            trajectories,
            trails,
            cursor: TrailCursor::new(config.window_size, capacity),
            clock: 0.0,
        };
        sim.warm_up(config.warmup_steps);
        Ok(sim)
    }

    /// Step every trajectory `steps` times with the constant baseline
    /// coefficients, writing nothing. Settles the states into the attractor
    /// basin before anything becomes visible.
    fn warm_up(&mut self, steps: usize) {
        let coeffs = self.modulator.baseline();
        for _ in 0..steps {
            for trajectory in self.trajectories.iter_mut() {
                trajectory.state = rk4_step(trajectory.state, self.dt, &coeffs);
            }
        }
        log::info!(
            "warmed up {} trajectories over {} steps",
            self.trajectories.len(),
            steps
        );
    }

    /// Advance the whole system by one frame.
    ///
    /// `frame_dt` is the elapsed wall time of the frame in seconds; it only
    /// drives the clock for coefficient and color modulation, never the
    /// integration step. Negative deltas are clamped so the clock stays
    /// monotonic. Returns the post-advance render view.
    pub fn tick(&mut self, frame_dt: f64) -> FrameView<'_> {
        self.clock += frame_dt.max(0.0);
        let t = self.clock;
        let coeffs = self.modulator.at(t);
        let slot = self.cursor.write_slot();

        for (i, trajectory) in self.trajectories.iter_mut().enumerate() {
            trajectory.state = rk4_step(trajectory.state, self.dt, &coeffs);

            if let Some(slot) = slot {
                let scaled = trajectory.state * (self.scale_factor * trajectory.viz_scale);
                let rgb = self.color.rgb_at(t, i, trajectory.color_offset);
                self.trails[i].write(
                    slot,
                    [scaled.x as f32, scaled.y as f32, scaled.z as f32],
                    rgb,
                );
            }
        }

        self.cursor.advance();
        self.frame()
    }

    /// The current render view without advancing anything.
    pub fn frame(&self) -> FrameView<'_> {
        let (visible_start, visible_end) = self.cursor.visible();
        FrameView {
            visible_start,
            visible_end,
            trails: self
                .trails
                .iter()
                .map(|trail| TrailView {
                    positions: trail.positions(visible_start, visible_end),
                    colors: trail.colors(visible_start, visible_end),
                })
                .collect(),
        }
    }

    /// Elapsed simulated time since the end of warm-up.
    pub fn elapsed(&self) -> f64 {
        self.clock
    }

    pub fn cursor(&self) -> &TrailCursor {
        &self.cursor
    }

    pub fn trajectories(&self) -> &TrajectorySet {
        &self.trajectories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::TrailPhase;

    fn small_config() -> SimConfig {
        SimConfig {
            trajectory_count: 2,
            window_size: 3,
            recycle_factor: 2,
            warmup_steps: 0,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_first_tick_exposes_one_point() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let frame = sim.tick(1.0 / 60.0);
        assert_eq!((frame.visible_start, frame.visible_end), (0, 1));
        assert_eq!(frame.trails.len(), 2);
        assert_eq!(frame.trails[0].positions.len(), 3);
    }

    #[test]
    fn test_visible_length_capped_at_window() {
        let mut sim = Simulation::new(small_config()).unwrap();
        for _ in 0..40 {
            let frame = sim.tick(1.0 / 60.0);
            assert!(frame.visible_len() <= 3);
        }
    }

    #[test]
    fn test_clock_accumulates_and_clamps() {
        let mut sim = Simulation::new(small_config()).unwrap();
        sim.tick(0.5);
        sim.tick(-2.0);
        sim.tick(0.25);
        assert!((sim.elapsed() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_trajectories_still_runs() {
        let config = SimConfig {
            trajectory_count: 0,
            ..small_config()
        };
        let mut sim = Simulation::new(config).unwrap();
        let frame = sim.tick(1.0 / 60.0);
        assert!(frame.trails.is_empty());
        assert_eq!((frame.visible_start, frame.visible_end), (0, 1));
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = SimConfig {
            recycle_factor: 1,
            ..small_config()
        };
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_draining_freezes_buffer_content() {
        let mut sim = Simulation::new(small_config()).unwrap();
        // window 3, capacity 6: six writing frames fill the buffer.
        for _ in 0..6 {
            sim.tick(1.0 / 60.0);
        }
        assert_eq!(sim.cursor().phase(), TrailPhase::Draining);
        let frozen: Vec<f32> = sim.frame().trails[0].positions.to_vec();
        let frame = sim.tick(1.0 / 60.0);
        // Tail advanced by one, so the surviving range is the old one minus
        // its first point.
        assert_eq!(frame.trails[0].positions, &frozen[3..]);
    }

    #[test]
    fn test_reset_returns_to_empty_then_refills() {
        let mut sim = Simulation::new(small_config()).unwrap();
        // Full cycle for window 3 / capacity 6 is 10 frames, after which
        // the cursor is back at (0, 0).
        for _ in 0..10 {
            sim.tick(1.0 / 60.0);
        }
        let frame = sim.frame();
        assert!(frame.is_empty());
        assert_eq!((frame.visible_start, frame.visible_end), (0, 0));
        let frame = sim.tick(1.0 / 60.0);
        assert_eq!((frame.visible_start, frame.visible_end), (0, 1));
    }

    #[test]
    fn test_ticks_are_deterministic() {
        let mut a = Simulation::new(small_config()).unwrap();
        let mut b = Simulation::new(small_config()).unwrap();
        for _ in 0..25 {
            a.tick(1.0 / 60.0);
            b.tick(1.0 / 60.0);
        }
        let fa = a.frame();
        let fb = b.frame();
        assert_eq!(fa.trails[0].positions, fb.trails[0].positions);
        assert_eq!(fa.trails[1].colors, fb.trails[1].colors);
    }
}
