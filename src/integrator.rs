//! Fixed-step 4th-order Runge-Kutta integration of the Rössler system.
//!
//! The step is a pure function over f64 state: identical inputs always yield
//! bit-identical outputs. No adaptive step-size control is attempted; an
//! unstable `dt` is a configuration problem, not something corrected here.

use glam::DVec3;

use crate::params::Coefficients;

/// Rössler right-hand side:
/// dx/dt = -y - z, dy/dt = x + a·y, dz/dt = b + z·(x - c).
fn derivatives(s: DVec3, p: &Coefficients) -> DVec3 {
    DVec3::new(-s.y - s.z, s.x + p.a * s.y, p.b + s.z * (s.x - p.c))
}

/// Advance one trajectory state by a single RK4 step of size `dt`.
pub fn rk4_step(state: DVec3, dt: f64, coeffs: &Coefficients) -> DVec3 {
    let k1 = derivatives(state, coeffs);
    let k2 = derivatives(state + k1 * (dt * 0.5), coeffs);
    let k3 = derivatives(state + k2 * (dt * 0.5), coeffs);
    let k4 = derivatives(state + k3 * dt, coeffs);
    state + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSSLER: Coefficients = Coefficients {
        a: 0.2,
        b: 0.2,
        c: 5.7,
    };

    #[test]
    fn test_step_is_deterministic() {
        let state = DVec3::new(0.1, 0.0, 0.0);
        let first = rk4_step(state, 0.01, &ROSSLER);
        let second = rk4_step(state, 0.01, &ROSSLER);
        // Bit-identical, not merely close.
        assert_eq!(first.to_array(), second.to_array());
    }

    #[test]
    fn test_origin_is_fixed_point_of_undriven_system() {
        let zero = Coefficients {
            a: 0.0,
            b: 0.0,
            c: 0.0,
        };
        let mut state = DVec3::ZERO;
        for _ in 0..1000 {
            state = rk4_step(state, 0.01, &zero);
        }
        assert_eq!(state, DVec3::ZERO);
    }

    #[test]
    fn test_step_matches_componentwise_reference() {
        // Scalar transcription of the classic RK4 update, kept independent of
        // the vectorised implementation.
        fn reference(x: f64, y: f64, z: f64, dt: f64, p: &Coefficients) -> (f64, f64, f64) {
            let f = |x: f64, y: f64, z: f64| (-y - z, x + p.a * y, p.b + z * (x - p.c));
            let k1 = f(x, y, z);
            let k2 = f(
                x + k1.0 * dt * 0.5,
                y + k1.1 * dt * 0.5,
                z + k1.2 * dt * 0.5,
            );
            let k3 = f(
                x + k2.0 * dt * 0.5,
                y + k2.1 * dt * 0.5,
                z + k2.2 * dt * 0.5,
            );
            let k4 = f(x + k3.0 * dt, y + k3.1 * dt, z + k3.2 * dt);
            (
                x + (dt / 6.0) * (k1.0 + 2.0 * k2.0 + 2.0 * k3.0 + k4.0),
                y + (dt / 6.0) * (k1.1 + 2.0 * k2.1 + 2.0 * k3.1 + k4.1),
                z + (dt / 6.0) * (k1.2 + 2.0 * k2.2 + 2.0 * k3.2 + k4.2),
            )
        }

        let state = DVec3::new(0.7, -1.3, 0.04);
        let next = rk4_step(state, 0.01, &ROSSLER);
        let (rx, ry, rz) = reference(state.x, state.y, state.z, 0.01, &ROSSLER);
        assert!((next.x - rx).abs() < 1e-12);
        assert!((next.y - ry).abs() < 1e-12);
        assert!((next.z - rz).abs() < 1e-12);
    }

    #[test]
    fn test_nonfinite_state_propagates_silently() {
        let state = DVec3::new(f64::NAN, 0.0, 0.0);
        let next = rk4_step(state, 0.01, &ROSSLER);
        assert!(next.x.is_nan());
    }
}
