//! Fixed-step explicit Euler integration over any [`VectorSpace`] state.

use std::ops::Index;

use crate::math::VectorSpace;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum IntegrationError {
    #[error("step size must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("end time {end} is before start time {start}")]
    ReversedRange { start: f64, end: f64 },
    #[error("integration bounds and step must be finite")]
    NonFinite,
    #[error("range needs {0} steps, more than the limit of {max}", max = MAX_STEPS)]
    TooManySteps(f64),
}

/// Largest step count a single run may take
pub const MAX_STEPS: usize = 100_000_000;

/// Ordered samples from one integration run, initial state first
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    samples: Vec<S>,
}

impl<S> Trajectory<S> {
    pub fn as_slice(&self) -> &[S] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&S> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.samples.iter()
    }

    pub fn into_vec(self) -> Vec<S> {
        self.samples
    }
}

impl<S> Default for Trajectory<S> {
    fn default() -> Self {
        Self { samples: Vec::new() }
    }
}

impl<S> AsRef<[S]> for Trajectory<S> {
    fn as_ref(&self) -> &[S] {
        &self.samples
    }
}

impl<S> Index<usize> for Trajectory<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.samples[index]
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Number of Euler steps needed to cover `[start_time, end_time]`
pub fn step_count(start_time: f64, end_time: f64, step: f64) -> Result<usize, IntegrationError> {
    if !(start_time.is_finite() && end_time.is_finite()) || step.is_infinite() {
        return Err(IntegrationError::NonFinite);
    }
    if step.is_nan() || step <= 0.0 {
        return Err(IntegrationError::NonPositiveStep(step));
    }
    if end_time < start_time {
        return Err(IntegrationError::ReversedRange {
            start: start_time,
            end: end_time,
        });
    }

    let steps = ((end_time - start_time) / step).ceil();
    if !steps.is_finite() || steps > MAX_STEPS as f64 {
        return Err(IntegrationError::TooManySteps(steps));
    }

    Ok(steps as usize)
}

/// Integrate `derivative` from `start_time` to `end_time` with explicit Euler.
///
/// Returns `ceil((end_time - start_time) / step) + 1` samples: the initial
/// state, then the state after every step. The last step may overshoot
/// `end_time` when the range is not a whole number of steps.
pub fn integrate<P, S, F>(
    params: &P,
    start_value: S,
    start_time: f64,
    end_time: f64,
    step: f64,
    mut derivative: F,
) -> Result<Trajectory<S>, IntegrationError>
where
    S: VectorSpace,
    F: FnMut(&P, &S, f64) -> S,
{
    let n = step_count(start_time, end_time, step)?;

    let mut samples = Vec::with_capacity(n + 1);
    samples.push(start_value.clone());

    let mut state = start_value;
    let mut time = start_time;
    for _ in 0..n {
        let rate = derivative(params, &state, time);
        state = state + rate * step;
        time += step;
        samples.push(state.clone());
    }

    Ok(Trajectory { samples })
}
