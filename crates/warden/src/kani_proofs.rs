//! Kani proofs for policy evaluation
//!
//! Bounded model checking of the fail-closed and logging guarantees.
//!
//! Run with: `cargo kani --harness verify_*`

#[cfg(kani)]
use crate::evaluator::PolicyEvaluator;
#[cfg(kani)]
use crate::window::WorkWindow;

/// Proof #1: Unknown users are always denied
///
/// **Property**: An identity absent from the directory never receives a grant,
/// whatever hour is supplied.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_unknown_user_fails_closed() {
    let mut evaluator = PolicyEvaluator::new();
    let hour: u32 = kani::any();

    assert!(!evaluator.evaluate_abac("mallory", hour, "company-laptop"));
    assert!(!evaluator.evaluate_rbac("mallory", "admin"));
}

/// Proof #2: The work window is half-open
///
/// **Property**: For any valid window, the start hour is inside and the end
/// hour is outside.
#[cfg(kani)]
#[kani::proof]
fn verify_window_half_open() {
    let start: u8 = kani::any();
    let end: u8 = kani::any();

    if let Ok(window) = WorkWindow::new(start, end) {
        assert!(window.contains(u32::from(start)));
        assert!(!window.contains(u32::from(end)));
    }
}

/// Proof #3: One log entry per evaluation
///
/// **Property**: Each call grows the log by exactly one entry.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_log_grows_by_one() {
    let mut evaluator = PolicyEvaluator::new();
    let hour: u32 = kani::any();

    let before = evaluator.access_log().len();
    evaluator.evaluate_abac("luna", hour, "company-laptop");
    assert_eq!(evaluator.access_log().len(), before + 1);
}
