use crate::solver::{ConvergenceMonitor, StopReason};

#[test]
fn test_optgap_is_cost_minus_reference() {
    let monitor = ConvergenceMonitor::new(1.5, 1e-6, None);
    assert_eq!(monitor.optgap(4.0), 2.5);

    let monitor = ConvergenceMonitor::new(f64::NEG_INFINITY, 1e-6, None);
    assert_eq!(monitor.optgap(4.0), f64::INFINITY);
}

#[test]
fn test_continue_while_gap_above_tolerance_and_budget_left() {
    let monitor = ConvergenceMonitor::new(0.0, 1e-6, Some(10));
    assert_eq!(monitor.check(1.0, 0), None);
    assert_eq!(monitor.check(1.0, 9), None);
}

#[test]
fn test_stop_when_tolerance_reached() {
    let monitor = ConvergenceMonitor::new(0.0, 1e-6, Some(10));
    assert_eq!(monitor.check(1e-6, 3), Some(StopReason::ToleranceReached));
    assert_eq!(monitor.check(0.0, 0), Some(StopReason::ToleranceReached));
    // 两个条件同时满足时报告间隙条件
    assert_eq!(monitor.check(1e-7, 10), Some(StopReason::ToleranceReached));
}

#[test]
fn test_stop_when_epoch_budget_exhausted() {
    let monitor = ConvergenceMonitor::new(0.0, 1e-6, Some(10));
    assert_eq!(monitor.check(1.0, 10), Some(StopReason::EpochBudgetExhausted));

    let monitor = ConvergenceMonitor::new(0.0, 1e-6, Some(0));
    assert_eq!(monitor.check(1.0, 0), Some(StopReason::EpochBudgetExhausted));
}

#[test]
fn test_unbounded_budget_never_exhausts() {
    let monitor = ConvergenceMonitor::new(f64::NEG_INFINITY, 1e-12, None);
    assert_eq!(monitor.check(f64::INFINITY, usize::MAX), None);
}

#[test]
fn test_nan_gap_stops() {
    let monitor = ConvergenceMonitor::new(0.0, 1e-6, None);
    assert_eq!(monitor.check(f64::NAN, 1), Some(StopReason::ToleranceReached));
}
