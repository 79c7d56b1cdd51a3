//! Swap neighborhood of a partition.
//!
//! The neighborhood holds every legal exchange of two records between two
//! distinct groups. Candidate partitions are independent copies built on
//! demand; ranking only rebuilds the two groups a move touches.

use crate::data::Dataset;
use crate::partition::{Partition, SwapMove};
use crate::score::group_score;

use super::memory::TabuMemory;

/// A selected move together with its delta-aware score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMove {
    /// The winning move.
    pub mv: SwapMove,
    /// Aggregate score of the partition after the move.
    pub total: f64,
    /// New score of `mv.src_group`.
    pub src_score: f64,
    /// New score of `mv.dst_group`.
    pub dst_score: f64,
}

/// All non-tabu swap moves from one partition.
#[derive(Debug, Clone, Default)]
pub struct Neighborhood {
    moves: Vec<SwapMove>,
}

impl Neighborhood {
    /// Enumerates the moves reachable from `current`.
    ///
    /// Order is fixed: source group, destination group (`!=` source),
    /// source slot, destination slot. Slots held by `memory` are skipped at
    /// either end.
    pub fn generate(current: &Partition, memory: &TabuMemory) -> Self {
        let m = current.group_count();
        let mut moves = Vec::new();

        for i in 0..m {
            for j in 0..m {
                if i == j {
                    continue;
                }
                for k in 0..current.group(i).len() {
                    if memory.contains(i, k) {
                        continue;
                    }
                    for b in 0..current.group(j).len() {
                        if memory.contains(j, b) {
                            continue;
                        }
                        moves.push(SwapMove::new(i, k, j, b));
                    }
                }
            }
        }

        Self { moves }
    }

    /// Moves in enumeration order.
    pub fn moves(&self) -> &[SwapMove] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Candidate partition for the move at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn candidate(&self, current: &Partition, index: usize) -> Partition {
        current.apply(&self.moves[index])
    }

    /// Every candidate paired with its move, in enumeration order.
    pub fn candidates<'a>(
        &'a self,
        current: &'a Partition,
    ) -> impl Iterator<Item = (SwapMove, Partition)> + 'a {
        self.moves.iter().map(move |mv| (*mv, current.apply(mv)))
    }

    /// Selects the highest-scoring candidate.
    ///
    /// `baseline` holds the current score of every group of `current`. A
    /// candidate's total is the baseline aggregate with the two touched
    /// groups' scores replaced by their rescored values. The total does not
    /// depend on which group is the source, so ties (including a move and
    /// its mirror) keep the earliest move. Returns `None` for an empty
    /// neighborhood.
    pub fn rank(&self, data: &Dataset, current: &Partition, baseline: &[f64]) -> Option<RankedMove> {
        let aggregate: f64 = baseline.iter().sum();
        let mut src_buf: Vec<usize> = Vec::new();
        let mut dst_buf: Vec<usize> = Vec::new();
        let mut best: Option<RankedMove> = None;

        for mv in &self.moves {
            src_buf.clear();
            src_buf.extend_from_slice(current.group(mv.src_group));
            dst_buf.clear();
            dst_buf.extend_from_slice(current.group(mv.dst_group));
            std::mem::swap(&mut src_buf[mv.src_slot], &mut dst_buf[mv.dst_slot]);

            let src_score = group_score(data, &src_buf);
            let dst_score = group_score(data, &dst_buf);
            // Pairwise sums commute, so a move and its mirror round identically.
            let old = baseline[mv.src_group] + baseline[mv.dst_group];
            let total = aggregate - old + (src_score + dst_score);

            if best.is_none_or(|b| total > b.total) {
                best = Some(RankedMove {
                    mv: *mv,
                    total,
                    src_score,
                    dst_score,
                });
            }
        }

        best
    }
}
