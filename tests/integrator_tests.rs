use glam::DVec3;
use lorenz_flight::{integrate, IntegrationError, MAX_STEPS};

#[cfg(test)]
mod integrator_tests {
    use super::*;

    #[test]
    fn test_zero_derivative_gives_constant_sequence() {
        let start = DVec3::new(1.0, -2.0, 3.5);
        let (t0, t1, h) = (0.0, 1.0, 0.125);

        let trajectory = integrate(&(), start, t0, t1, h, |_, _, _| DVec3::ZERO).unwrap();

        let expected_len = ((t1 - t0) / h).ceil() as usize + 1;
        assert_eq!(trajectory.len(), expected_len);
        assert_eq!(trajectory.len(), 9);
        assert!(trajectory.iter().all(|s| *s == start));
    }

    #[test]
    fn test_zero_derivative_non_integral_range() {
        let trajectory = integrate(&(), 4.0_f64, 0.0, 1.0, 0.3, |_, _, _| 0.0).unwrap();
        // ceil(1.0 / 0.3) = 4 steps
        assert_eq!(trajectory.len(), 5);
        assert!(trajectory.iter().all(|s| *s == 4.0));
    }

    #[test]
    fn test_constant_derivative_is_exact() {
        let start = DVec3::new(0.5, 0.0, -1.0);
        let k = DVec3::new(1.0, -2.0, 0.5);
        let h = 0.125;

        let trajectory = integrate(&k, start, 0.0, 2.0, h, |k, _, _| *k).unwrap();

        assert_eq!(trajectory.len(), 17);
        for (i, sample) in trajectory.iter().enumerate() {
            let expected = start + k * (i as f64 * h);
            assert!(
                sample.abs_diff_eq(expected, 1e-12),
                "sample {} was {:?}, expected {:?}",
                i,
                sample,
                expected
            );
        }
    }

    #[test]
    fn test_constant_derivative_with_awkward_step() {
        let k = 3.0_f64;
        let h = 0.1;
        let trajectory = integrate(&k, 1.0_f64, 0.0, 1.0, h, |k, _, _| *k).unwrap();
        for (i, sample) in trajectory.iter().enumerate() {
            assert!((sample - (1.0 + i as f64 * h * k)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_horizon_yields_initial_state() {
        let start = DVec3::new(7.0, 8.0, 9.0);
        let trajectory =
            integrate(&(), start, 2.5, 2.5, 0.01, |_, _, _| DVec3::ONE).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.first(), Some(&start));
    }

    #[test]
    fn test_first_sample_is_start_value() {
        let trajectory = integrate(&(), 2.0_f64, 0.0, 1.0, 0.5, |_, y, _| -*y).unwrap();
        assert_eq!(trajectory[0], 2.0);
        assert_eq!(trajectory.as_slice(), &[2.0, 1.0, 0.5]);
    }

    #[test]
    fn test_start_time_offsets_derivative_time() {
        let trajectory = integrate(&(), 0.0_f64, 10.0, 12.0, 1.0, |_, _, t| t).unwrap();
        assert_eq!(trajectory.as_slice(), &[0.0, 10.0, 21.0]);
    }

    #[test]
    fn test_reversed_range_is_error() {
        let result = integrate(&(), DVec3::ZERO, 5.0, 1.0, 0.1, |_, _, _| DVec3::ZERO);
        assert_eq!(
            result.unwrap_err(),
            IntegrationError::ReversedRange { start: 5.0, end: 1.0 }
        );
    }

    #[test]
    fn test_non_positive_step_is_error() {
        for step in [0.0, -0.01] {
            let result = integrate(&(), 0.0_f64, 0.0, 1.0, step, |_, _, _| 1.0);
            assert_eq!(result.unwrap_err(), IntegrationError::NonPositiveStep(step));
        }
    }

    #[test]
    fn test_nan_bounds_are_error() {
        let result = integrate(&(), 0.0_f64, f64::NAN, 1.0, 0.1, |_, _, _| 1.0);
        assert_eq!(result.unwrap_err(), IntegrationError::NonFinite);
    }

    #[test]
    fn test_subnormal_step_is_error() {
        let result = integrate(&(), 0.0_f64, 0.0, 50.0, 1e-320, |_, _, _| 0.0);
        assert!(matches!(result, Err(IntegrationError::TooManySteps(n)) if n.is_infinite()));
    }

    #[test]
    fn test_huge_range_is_error() {
        let end = (MAX_STEPS as f64 + 1.0) * 0.5;
        let result = integrate(&(), DVec3::ZERO, 0.0, end, 0.5, |_, _, _| DVec3::ZERO);
        assert_eq!(
            result.unwrap_err(),
            IntegrationError::TooManySteps(MAX_STEPS as f64 + 1.0)
        );
    }

    #[test]
    fn test_custom_state_type() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Population {
            prey: f64,
            predators: f64,
        }

        impl std::ops::Add for Population {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self {
                    prey: self.prey + rhs.prey,
                    predators: self.predators + rhs.predators,
                }
            }
        }

        impl std::ops::Mul<f64> for Population {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self {
                    prey: self.prey * rhs,
                    predators: self.predators * rhs,
                }
            }
        }

        // Lotka-Volterra with unit coefficients
        let start = Population {
            prey: 2.0,
            predators: 1.0,
        };
        let trajectory = integrate(&(), start, 0.0, 0.5, 0.5, |_, s: &Population, _| Population {
            prey: s.prey - s.prey * s.predators,
            predators: s.prey * s.predators - s.predators,
        })
        .unwrap();

        assert_eq!(trajectory.len(), 2);
        assert_eq!(
            trajectory[1],
            Population {
                prey: 2.0,
                predators: 1.5
            }
        );
    }
}
