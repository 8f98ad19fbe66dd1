//! Free-fly camera and fixed-step ODE integration, plus a viewer that flies
//! through the Lorenz attractor.
//!
//! `math`, `camera`, `integrator` and `lorenz` are pure data: no window, no
//! GPU, no I/O. The remaining modules wire them to winit and wgpu.

pub mod app;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod controls;
pub mod input;
pub mod integrator;
pub mod lorenz;
pub mod math;
pub mod renderer;

pub use camera::Camera;
pub use integrator::{integrate, IntegrationError, Trajectory, MAX_STEPS};
pub use lorenz::{lorenz, LorenzParams, Scenario, Simulation};
pub use math::{Axis, Transform, VectorSpace};
