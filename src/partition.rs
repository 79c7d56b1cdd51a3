//! Partition state and swap moves.
//!
//! A [`Partition`] is an ordered list of groups; each group is an ordered
//! list of record indices whose positions are the slots addressed by a
//! [`SwapMove`]. Moves only ever exchange two records between groups, so
//! group sizes and the covered record set stay fixed for a whole run.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GroupingError, Result};

/// Exchange of the record at `(src_group, src_slot)` with the record at
/// `(dst_group, dst_slot)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapMove {
    /// Group the first record leaves.
    pub src_group: usize,
    /// Slot of the first record within `src_group`.
    pub src_slot: usize,
    /// Group the second record leaves.
    pub dst_group: usize,
    /// Slot of the second record within `dst_group`.
    pub dst_slot: usize,
}

impl SwapMove {
    pub fn new(src_group: usize, src_slot: usize, dst_group: usize, dst_slot: usize) -> Self {
        Self {
            src_group,
            src_slot,
            dst_group,
            dst_slot,
        }
    }

    /// The two `(group, slot)` coordinates touched by this move.
    pub fn endpoints(&self) -> [(usize, usize); 2] {
        [
            (self.src_group, self.src_slot),
            (self.dst_group, self.dst_slot),
        ]
    }
}

/// An assignment of every record to exactly one group.
///
/// # Examples
///
/// ```
/// use u_grouping::partition::{Partition, SwapMove};
///
/// let p = Partition::divide(&[0, 1, 2, 3, 4], 2).unwrap();
/// assert_eq!(p.groups(), &[vec![0, 1, 2], vec![3, 4]]);
///
/// let q = p.apply(&SwapMove::new(0, 0, 1, 1));
/// assert_eq!(q.groups(), &[vec![4, 1, 2], vec![3, 0]]);
/// assert_eq!(q.assignment(), vec![2, 1, 1, 2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    groups: Vec<Vec<usize>>,
}

impl Partition {
    /// Wraps explicit groups. Use [`validate`](Self::validate) to check
    /// that they cover a record universe exactly once.
    pub fn new(groups: Vec<Vec<usize>>) -> Self {
        Self { groups }
    }

    /// Splits `order` into `group_count` contiguous groups.
    ///
    /// Sizes differ by at most one; the first `len % group_count` groups
    /// receive the extra record.
    pub fn divide(order: &[usize], group_count: usize) -> Result<Self> {
        if group_count == 0 {
            return Err(GroupingError::Configuration(
                "group count must be a positive integer".into(),
            ));
        }
        if group_count > order.len() {
            return Err(GroupingError::Configuration(format!(
                "group count {group_count} exceeds record count {}",
                order.len()
            )));
        }

        let base = order.len() / group_count;
        let extra = order.len() % group_count;
        let mut groups = Vec::with_capacity(group_count);
        let mut start = 0;
        for g in 0..group_count {
            let size = base + usize::from(g < extra);
            groups.push(order[start..start + size].to_vec());
            start += size;
        }

        Ok(Self { groups })
    }

    /// Shuffles the records `0..n_records` and divides them into
    /// `group_count` groups.
    pub fn shuffled<R: Rng>(n_records: usize, group_count: usize, rng: &mut R) -> Result<Self> {
        let mut order: Vec<usize> = (0..n_records).collect();
        order.shuffle(rng);
        Self::divide(&order, group_count)
    }

    /// Groups in order.
    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Records of group `index`, in slot order.
    pub fn group(&self, index: usize) -> &[usize] {
        &self.groups[index]
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of slots across all groups.
    pub fn n_records(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Group sizes in order.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// Checks that the groups cover `0..n_records` exactly once.
    pub fn validate(&self, n_records: usize) -> Result<()> {
        let mut seen = vec![false; n_records];
        for (g, group) in self.groups.iter().enumerate() {
            for &record in group {
                if record >= n_records {
                    return Err(GroupingError::PreconditionViolation(format!(
                        "group {g} holds record {record}, outside the universe of {n_records} records"
                    )));
                }
                if seen[record] {
                    return Err(GroupingError::PreconditionViolation(format!(
                        "record {record} is assigned more than once"
                    )));
                }
                seen[record] = true;
            }
        }
        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(GroupingError::PreconditionViolation(format!(
                "record {missing} is not assigned to any group"
            )));
        }
        Ok(())
    }

    /// Returns an independent copy with the move's two records exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range.
    pub fn apply(&self, mv: &SwapMove) -> Partition {
        let mut next = self.clone();
        let a = next.groups[mv.src_group][mv.src_slot];
        let b = next.groups[mv.dst_group][mv.dst_slot];
        next.groups[mv.src_group][mv.src_slot] = b;
        next.groups[mv.dst_group][mv.dst_slot] = a;
        next
    }

    /// 1-based group number of every record, indexed by record.
    ///
    /// # Panics
    ///
    /// Panics if the partition does not cover `0..n_records()`.
    pub fn assignment(&self) -> Vec<usize> {
        let mut out = vec![0; self.n_records()];
        for (g, group) in self.groups.iter().enumerate() {
            for &record in group {
                out[record] = g + 1;
            }
        }
        out
    }

    /// Consumes the partition, returning its groups.
    pub fn into_groups(self) -> Vec<Vec<usize>> {
        self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_divide_sizes() {
        let order: Vec<usize> = (0..10).collect();
        let p = Partition::divide(&order, 3).unwrap();
        assert_eq!(p.sizes(), vec![4, 3, 3]);
        assert_eq!(p.group(0), &[0, 1, 2, 3]);
        assert_eq!(p.group(2), &[7, 8, 9]);
    }

    #[test]
    fn test_divide_rejects_bad_group_count() {
        let order = [0, 1, 2];
        assert!(matches!(
            Partition::divide(&order, 0),
            Err(GroupingError::Configuration(_))
        ));
        assert!(matches!(
            Partition::divide(&order, 4),
            Err(GroupingError::Configuration(_))
        ));
    }

    #[test]
    fn test_shuffled_is_valid_and_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = Partition::shuffled(11, 4, &mut rng).unwrap();
        p.validate(11).unwrap();
        assert_eq!(p.sizes(), vec![3, 3, 3, 2]);

        let mut rng = StdRng::seed_from_u64(7);
        let q = Partition::shuffled(11, 4, &mut rng).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn test_validate_detects_violations() {
        assert!(Partition::new(vec![vec![0, 1], vec![2]]).validate(3).is_ok());
        assert!(Partition::new(vec![vec![0, 1], vec![1]]).validate(3).is_err());
        assert!(Partition::new(vec![vec![0, 1], vec![3]]).validate(3).is_err());
        assert!(Partition::new(vec![vec![0], vec![2]]).validate(3).is_err());
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let p = Partition::new(vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
        let q = p.apply(&SwapMove::new(2, 1, 0, 0));

        assert_eq!(p.groups(), &[vec![0, 1], vec![2, 3], vec![4, 5]]);
        assert_eq!(q.groups(), &[vec![5, 1], vec![2, 3], vec![4, 0]]);
        assert_eq!(q.sizes(), p.sizes());
    }

    #[test]
    fn test_assignment_is_one_based() {
        let p = Partition::new(vec![vec![2, 0], vec![1, 3]]);
        assert_eq!(p.assignment(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_move_endpoints() {
        let mv = SwapMove::new(1, 2, 3, 4);
        assert_eq!(mv.endpoints(), [(1, 2), (3, 4)]);
    }
}
