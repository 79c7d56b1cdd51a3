//! Tabu Search (TS) over swap moves between groups.
//!
//! A single-trajectory metaheuristic: each step moves to the best
//! non-tabu neighbor, even a worse one, while a bounded memory of recently
//! touched `(group, slot)` coordinates keeps the search from cycling.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod neighborhood;
mod runner;
mod types;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use neighborhood::{Neighborhood, RankedMove};
pub use runner::{TabuResult, TabuRunner};
pub use types::{NoopObserver, StepObserver, Termination};
