//! Diversity-maximizing group partitioning.
//!
//! Splits a fixed set of records into groups of near-equal size so that
//! each group is as mixed as possible on a chosen set of categorical
//! attributes. The search is a tabu search over pairwise swaps between
//! groups:
//!
//! - **Data**: target attributes encoded into indicator column groups,
//!   rejecting missing cells up front.
//! - **Score**: per-group diversity as squared mean pairwise Euclidean
//!   distance, summed over attributes and groups.
//! - **Partition**: groups of record indices, swap moves, initial
//!   construction and 1-based assignment output.
//! - **Tabu Search**: neighborhood generation, FIFO tabu memory and the
//!   deterministic search loop.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_grouping::data::{ColumnGroup, Dataset};
//! use u_grouping::partition::Partition;
//! use u_grouping::tabu::{TabuConfig, TabuRunner};
//!
//! let team: Vec<Option<&str>> = ["red", "red", "red", "blue", "blue", "blue", "green", "green"]
//!     .into_iter()
//!     .map(Some)
//!     .collect();
//! let data = Dataset::new(vec![ColumnGroup::one_hot("team", &team).unwrap()]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let initial = Partition::shuffled(data.n_records(), 2, &mut rng).unwrap();
//!
//! let config = TabuConfig::default().with_tabu_capacity(4).with_max_steps(50);
//! let result = TabuRunner::new(&data, config).unwrap().run(&initial).unwrap();
//! assert!(result.best_score >= result.initial_score);
//! assert_eq!(result.assignment().len(), 8);
//! ```

pub mod data;
pub mod error;
pub mod partition;
pub mod score;
pub mod tabu;

pub use error::{GroupingError, Result};
