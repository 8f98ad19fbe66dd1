use std::ops::{Add, Mul};

/// What the integrator needs from a state: addition and scaling by an `f64`.
///
/// Blanket-implemented, so `f64`, `glam::DVec3`, `glam::DVec4` and user types
/// with the right operator impls all qualify.
pub trait VectorSpace: Clone + Add<Output = Self> + Mul<f64, Output = Self> {}

impl<T> VectorSpace for T where T: Clone + Add<Output = T> + Mul<f64, Output = T> {}
