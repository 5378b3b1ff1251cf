//! Trajectory set: N independently evolving Rössler states.
//!
//! Each trajectory carries its mutable 3D state plus two fixed visual
//! modifiers assigned at construction: a hue offset and a scale multiplier
//! that spreads the trails apart on screen. Trajectories live for the whole
//! session; only their states change.

use glam::DVec3;

/// One evolving state vector with its fixed visual modifiers.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// Current simulation state, mutated every integration step.
    pub state: DVec3,
    /// Hue offset in [0, 1), fixed per trajectory.
    pub color_offset: f64,
    /// Positive scale multiplier applied when positions are written out.
    pub viz_scale: f64,
}

/// All trajectories, in index order.
#[derive(Clone, Debug)]
pub struct TrajectorySet {
    trajectories: Vec<Trajectory>,
}

impl TrajectorySet {
    /// Build `count` trajectories with deterministic, evenly spread initial
    /// conditions: trajectory `i` starts at (0.1·(i+1), 0, 0) with hue
    /// offset i/count and scale multiplier (i+1)/count.
    pub fn new(count: usize) -> Self {
        let n = count as f64;
        let trajectories = (0..count)
            .map(|i| Trajectory {
                state: DVec3::new(0.1 * (i as f64 + 1.0), 0.0, 0.0),
                color_offset: i as f64 / n,
                viz_scale: (i as f64 + 1.0) / n,
            })
            .collect();
        Self { trajectories }
    }

    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trajectory> {
        self.trajectories.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Trajectory> {
        self.trajectories.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Trajectory> {
        self.trajectories.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_conditions_are_spread() {
        let set = TrajectorySet::new(7);
        assert_eq!(set.len(), 7);
        for (i, traj) in set.iter().enumerate() {
            let expected_x = 0.1 * (i as f64 + 1.0);
            assert!((traj.state.x - expected_x).abs() < 1e-12);
            assert_eq!(traj.state.y, 0.0);
            assert_eq!(traj.state.z, 0.0);
        }
    }

    #[test]
    fn test_visual_modifiers() {
        let set = TrajectorySet::new(4);
        let third = set.get(2).unwrap();
        assert!((third.color_offset - 0.5).abs() < 1e-12);
        assert!((third.viz_scale - 0.75).abs() < 1e-12);
        // Hue offsets stay inside [0, 1).
        for traj in set.iter() {
            assert!(traj.color_offset >= 0.0 && traj.color_offset < 1.0);
            assert!(traj.viz_scale > 0.0);
        }
    }

    #[test]
    fn test_empty_set() {
        let set = TrajectorySet::new(0);
        assert!(set.is_empty());
        assert!(set.get(0).is_none());
    }
}
