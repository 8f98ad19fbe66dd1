//! The Lorenz system and the simulation that keeps its trajectory current.

use std::time::Instant;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::integrator::{integrate, IntegrationError, Trajectory};

/// Lorenz coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LorenzParams {
    pub sigma: f64,
    pub r: f64,
    pub b: f64,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            r: 28.0,
            b: 8.0 / 3.0,
        }
    }
}

/// Right-hand side of the Lorenz equations. Autonomous, so `t` is unused.
pub fn lorenz(params: &LorenzParams, y: &DVec3, _t: f64) -> DVec3 {
    DVec3::new(
        params.sigma * (y.y - y.x),
        (params.r - y.z) * y.x - y.y,
        y.x * y.y - params.b * y.z,
    )
}

/// Fixed inputs of every regeneration; only the coefficients ever change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub start: [f64; 3],
    pub start_time: f64,
    pub end_time: f64,
    pub step: f64,
}

impl Scenario {
    pub fn start_value(&self) -> DVec3 {
        DVec3::from_array(self.start)
    }

    pub fn run(&self, params: &LorenzParams) -> Result<Trajectory<DVec3>, IntegrationError> {
        integrate(
            params,
            self.start_value(),
            self.start_time,
            self.end_time,
            self.step,
            lorenz,
        )
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            start: [0.0, 1.0, 0.0],
            start_time: 0.0,
            end_time: 50.0,
            step: 1e-4,
        }
    }
}

/// Which coefficient an adjustment targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    Sigma,
    R,
    B,
}

/// Owns the coefficients and the trajectory they produce.
///
/// Every coefficient change reruns the whole integration; nothing is cached
/// between runs.
#[derive(Debug, Clone)]
pub struct Simulation {
    params: LorenzParams,
    scenario: Scenario,
    trajectory: Trajectory<DVec3>,
    generation: u64,
}

impl Simulation {
    pub fn new(params: LorenzParams, scenario: Scenario) -> Result<Self, IntegrationError> {
        let trajectory = Self::regenerate(&params, &scenario)?;
        Ok(Self {
            params,
            scenario,
            trajectory,
            generation: 0,
        })
    }

    pub fn params(&self) -> &LorenzParams {
        &self.params
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn trajectory(&self) -> &Trajectory<DVec3> {
        &self.trajectory
    }

    pub fn points(&self) -> &[DVec3] {
        self.trajectory.as_slice()
    }

    /// Bumped on every successful regeneration; renderers compare it to skip re-uploads
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_params(&mut self, params: LorenzParams) -> Result<(), IntegrationError> {
        self.trajectory = Self::regenerate(&params, &self.scenario)?;
        self.params = params;
        self.generation += 1;
        Ok(())
    }

    pub fn adjust(&mut self, coefficient: Coefficient, delta: f64) -> Result<(), IntegrationError> {
        let mut params = self.params;
        match coefficient {
            Coefficient::Sigma => params.sigma += delta,
            Coefficient::R => params.r += delta,
            Coefficient::B => params.b += delta,
        }
        self.set_params(params)
    }

    fn regenerate(
        params: &LorenzParams,
        scenario: &Scenario,
    ) -> Result<Trajectory<DVec3>, IntegrationError> {
        let started = Instant::now();
        let trajectory = scenario.run(params)?;
        log::info!(
            "Integrated sigma={} r={} b={:.4}: {} samples in {:.1} ms",
            params.sigma,
            params.r,
            params.b,
            trajectory.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(trajectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_scenario() -> Scenario {
        Scenario {
            end_time: 0.5,
            step: 0.01,
            ..Scenario::default()
        }
    }

    #[test]
    fn test_default_params() {
        let params = LorenzParams::default();
        assert_eq!(params.sigma, 10.0);
        assert_eq!(params.r, 28.0);
        assert!((params.b - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_lorenz_derivative_at_start() {
        let d = lorenz(&LorenzParams::default(), &DVec3::new(0.0, 1.0, 0.0), 0.0);
        assert_eq!(d, DVec3::new(10.0, -1.0, 0.0));
    }

    #[test]
    fn test_origin_is_fixed_point() {
        let d = lorenz(&LorenzParams::default(), &DVec3::ZERO, 3.0);
        assert_eq!(d, DVec3::ZERO);
    }

    #[test]
    fn test_first_euler_step() {
        let scenario = short_scenario();
        let trajectory = scenario.run(&LorenzParams::default()).unwrap();
        assert_eq!(trajectory[0], DVec3::new(0.0, 1.0, 0.0));
        assert!(trajectory[1].abs_diff_eq(DVec3::new(0.1, 0.99, 0.0), 1e-12));
    }

    #[test]
    fn test_adjust_regenerates() {
        let mut sim = Simulation::new(LorenzParams::default(), short_scenario()).unwrap();
        let before = sim.points().to_vec();
        sim.adjust(Coefficient::R, 1.0).unwrap();

        assert_eq!(sim.params().r, 29.0);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.points().len(), before.len());
        assert_eq!(sim.points()[0], before[0]);
        assert_ne!(sim.points().last(), before.last());
    }

    #[test]
    fn test_adjust_other_coefficients() {
        let mut sim = Simulation::new(LorenzParams::default(), short_scenario()).unwrap();
        sim.adjust(Coefficient::Sigma, -1.0).unwrap();
        sim.adjust(Coefficient::B, 0.5).unwrap();
        assert_eq!(sim.params().sigma, 9.0);
        assert!((sim.params().b - (8.0 / 3.0 + 0.5)).abs() < 1e-12);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_bad_scenario_rejected() {
        let scenario = Scenario {
            step: 0.0,
            ..Scenario::default()
        };
        assert!(Simulation::new(LorenzParams::default(), scenario).is_err());
    }

    #[test]
    fn test_scenario_deserializes_with_defaults() {
        let scenario: Scenario = serde_json::from_str(r#"{ "end_time": 5.0 }"#).unwrap();
        assert_eq!(scenario.end_time, 5.0);
        assert_eq!(scenario.step, 1e-4);
        assert_eq!(scenario.start, [0.0, 1.0, 0.0]);
    }
}
