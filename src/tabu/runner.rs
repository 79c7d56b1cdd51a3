//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Initialize: clear the tabu memory, take the initial partition as
//!    both current and best
//! 2. At each step:
//!    a. Generate the swap neighborhood, skipping tabu slots
//!    b. Rank candidates by delta-aware score and take the best
//!    c. Record both move endpoints in the tabu memory
//!    d. Accept the candidate as current, even when it is worse
//!    e. Snapshot current into best on strict improvement, otherwise
//!       count a stalled step
//! 3. Terminate on the step budget, the stall limit or the target score
//!
//! An empty neighborhood aborts the run with
//! [`GroupingError::ExhaustedNeighborhood`].
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use tracing::{debug, info, warn};

use super::config::TabuConfig;
use super::memory::TabuMemory;
use super::neighborhood::Neighborhood;
use super::types::{NoopObserver, StepObserver, Termination};
use crate::data::Dataset;
use crate::error::{GroupingError, Result};
use crate::partition::{Partition, SwapMove};
use crate::score::{group_scores, partition_score};

/// Result of a grouping run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best partition found.
    pub best: Partition,
    /// Score of the best partition.
    pub best_score: f64,
    /// Score of the initial partition.
    pub initial_score: f64,
    /// Steps executed.
    pub steps: usize,
    /// Step at which the best partition was found (0 = initial).
    pub best_step: usize,
    /// Best score after each step.
    pub score_history: Vec<f64>,
    /// Accepted moves in order.
    pub moves: Vec<SwapMove>,
    /// Why the run stopped.
    pub termination: Termination,
}

impl TabuResult {
    /// 1-based group number of every record in the best partition.
    pub fn assignment(&self) -> Vec<usize> {
        self.best.assignment()
    }
}

/// Tabu Search runner over a fixed dataset.
///
/// # Examples
///
/// ```
/// use u_grouping::data::{ColumnGroup, Dataset};
/// use u_grouping::partition::Partition;
/// use u_grouping::tabu::{TabuConfig, TabuRunner};
///
/// let kind = ColumnGroup::one_hot("kind", &[Some("a"), Some("a"), Some("b"), Some("b")]).unwrap();
/// let data = Dataset::new(vec![kind]).unwrap();
/// let initial = Partition::new(vec![vec![0, 1], vec![2, 3]]);
///
/// let config = TabuConfig::default().with_tabu_capacity(2).with_max_steps(10);
/// let runner = TabuRunner::new(&data, config).unwrap();
/// let result = runner.run(&initial).unwrap();
/// assert!(result.best_score > result.initial_score);
/// ```
#[derive(Debug, Clone)]
pub struct TabuRunner<'a> {
    data: &'a Dataset,
    config: TabuConfig,
}

impl<'a> TabuRunner<'a> {
    /// Creates a runner, rejecting an invalid configuration.
    pub fn new(data: &'a Dataset, config: TabuConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { data, config })
    }

    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Runs the search from `initial`.
    pub fn run(&self, initial: &Partition) -> Result<TabuResult> {
        self.run_with_observer(initial, &mut NoopObserver)
    }

    /// Runs the search, reporting each step to `observer`.
    pub fn run_with_observer<O>(&self, initial: &Partition, observer: &mut O) -> Result<TabuResult>
    where
        O: StepObserver + ?Sized,
    {
        initial.validate(self.data.n_records())?;

        let mut memory = TabuMemory::new(self.config.tabu_capacity);
        let mut current = initial.clone();
        let mut current_scores = group_scores(self.data, &current);
        let initial_score = partition_score(self.data, &current);

        let mut best = current.clone();
        let mut best_score = initial_score;
        let mut best_step = 0;
        let mut no_improve_count = 0;

        let mut score_history = Vec::with_capacity(self.config.max_steps);
        let mut moves = Vec::with_capacity(self.config.max_steps);

        info!(
            event = "run_start",
            records = self.data.n_records(),
            groups = current.group_count(),
            initial_score,
        );

        let mut termination = Termination::MaxStepsReached;
        if self.reached_target(best_score) {
            termination = Termination::TargetReached;
        } else {
            for step in 1..=self.config.max_steps {
                let neighborhood = Neighborhood::generate(&current, &memory);
                let Some(ranked) = neighborhood.rank(self.data, &current, &current_scores) else {
                    warn!(event = "neighborhood_exhausted", step, best_score);
                    return Err(GroupingError::ExhaustedNeighborhood {
                        step,
                        best,
                        best_score,
                    });
                };

                memory.record(&ranked.mv);
                current = current.apply(&ranked.mv);
                current_scores[ranked.mv.src_group] = ranked.src_score;
                current_scores[ranked.mv.dst_group] = ranked.dst_score;
                moves.push(ranked.mv);

                let current_score = partition_score(self.data, &current);
                if current_score > best_score {
                    best = current.clone();
                    best_score = current_score;
                    best_step = step;
                    no_improve_count = 0;
                } else {
                    no_improve_count += 1;
                }
                score_history.push(best_score);

                debug!(
                    event = "step",
                    step,
                    current_score,
                    best_score,
                    candidates = neighborhood.len(),
                    src_group = ranked.mv.src_group,
                    src_slot = ranked.mv.src_slot,
                    dst_group = ranked.mv.dst_group,
                    dst_slot = ranked.mv.dst_slot,
                );
                observer.on_step(step, current_score, best_score);

                if self.reached_target(best_score) {
                    termination = Termination::TargetReached;
                    break;
                }
                if no_improve_count >= self.config.max_no_improve {
                    termination = Termination::Stalled;
                    break;
                }
            }
        }

        info!(
            event = "run_end",
            reason = %termination,
            steps = moves.len(),
            best_step,
            best_score,
        );

        Ok(TabuResult {
            best,
            best_score,
            initial_score,
            steps: moves.len(),
            best_step,
            score_history,
            moves,
            termination,
        })
    }

    fn reached_target(&self, score: f64) -> bool {
        self.config.target_score.is_some_and(|target| score >= target)
    }
}
