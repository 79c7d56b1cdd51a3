//! Run outcomes and the per-step observer hook.

use std::fmt;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The step budget was used up.
    MaxStepsReached,
    /// Too many consecutive steps failed to improve the best score.
    Stalled,
    /// The best score reached the configured target.
    TargetReached,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Termination::MaxStepsReached => "max steps reached",
            Termination::Stalled => "stalled",
            Termination::TargetReached => "target score reached",
        };
        f.write_str(reason)
    }
}

/// Receives progress once per completed step.
///
/// Any `FnMut(usize, f64, f64)` closure is an observer:
///
/// ```
/// use u_grouping::tabu::StepObserver;
///
/// let mut seen = Vec::new();
/// let mut observer = |step: usize, current: f64, best: f64| seen.push((step, current, best));
/// observer.on_step(1, 0.5, 0.75);
/// assert_eq!(seen, vec![(1, 0.5, 0.75)]);
/// ```
pub trait StepObserver {
    /// Called after step `step` (1-based) with the scores of the current
    /// and best partitions.
    fn on_step(&mut self, step: usize, current_score: f64, best_score: f64);
}

impl<F> StepObserver for F
where
    F: FnMut(usize, f64, f64),
{
    fn on_step(&mut self, step: usize, current_score: f64, best_score: f64) {
        self(step, current_score, best_score)
    }
}

/// Observer that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _step: usize, _current_score: f64, _best_score: f64) {}
}
