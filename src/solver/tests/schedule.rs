use approx::assert_abs_diff_eq;

use crate::config::{SolverOptions, StepAlg};
use crate::solver::StepSchedule;
use crate::solver::tests::RecordingQuadratic;

#[test]
fn test_fixed_schedule_is_constant() {
    let schedule = StepSchedule::new(0.1, 0.5, StepAlg::Fixed);
    for t in [0, 1, 10, 1_000, 1_000_000] {
        assert_eq!(schedule.step_size(t), 0.1);
    }
}

#[test]
fn test_decay_schedule_formula() {
    // step(t) = 0.1 / (1 + 0.1 * 0.1 * t)
    let schedule = StepSchedule::new(0.1, 0.1, StepAlg::Decay);
    assert_eq!(schedule.step_size(0), 0.1);
    assert_abs_diff_eq!(schedule.step_size(1), 0.1 / 1.01, epsilon = 1e-15);
    assert_abs_diff_eq!(schedule.step_size(100), 0.05, epsilon = 1e-15);
    assert_abs_diff_eq!(schedule.step_size(900), 0.01, epsilon = 1e-15);
}

#[test]
fn test_decay_schedule_is_non_increasing() {
    let schedule = StepSchedule::new(0.5, 0.3, StepAlg::Decay);
    let steps: Vec<f64> = (0..500).map(|t| schedule.step_size(t)).collect();
    for pair in steps.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
}

#[test]
fn test_decay_with_zero_lambda_equals_fixed() {
    let decay = StepSchedule::new(0.1, 0.0, StepAlg::Decay);
    let fixed = StepSchedule::new(0.1, 0.0, StepAlg::Fixed);
    for t in 0..1_000 {
        assert_eq!(decay.step_size(t), fixed.step_size(t));
    }
}

#[test]
fn test_schedule_from_config() {
    let problem = RecordingQuadratic::small();
    let config = SolverOptions::new()
        .step(0.2)
        .step_alg("decay")
        .lambda(0.5)
        .resolve(&problem)
        .unwrap();
    let schedule = StepSchedule::from_config(&config);
    assert_eq!(schedule, StepSchedule::new(0.2, 0.5, StepAlg::Decay));
}
