//! Tabu Search configuration.

use crate::error::{GroupingError, Result};

/// Configuration parameters for a grouping run.
///
/// # Examples
///
/// ```
/// use u_grouping::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_steps(1000)
///     .with_tabu_capacity(12)
///     .with_target_score(4.5);
/// assert_eq!(config.max_steps, 1000);
/// assert_eq!(config.tabu_capacity, 12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of `(group, slot)` entries the tabu memory holds.
    pub tabu_capacity: usize,
    /// Maximum number of search steps.
    pub max_steps: usize,
    /// Consecutive non-improving steps before the run stops as stalled.
    pub max_no_improve: usize,
    /// Stop as soon as the best score reaches this value.
    pub target_score: Option<f64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_capacity: 10,
            max_steps: 500,
            max_no_improve: 10,
            target_score: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu memory capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the maximum number of steps.
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    /// Sets the stall limit.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the target score.
    pub fn with_target_score(mut self, score: f64) -> Self {
        self.target_score = Some(score);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tabu_capacity == 0 {
            return Err(GroupingError::Configuration(
                "tabu capacity must be a positive integer".into(),
            ));
        }
        if self.max_steps == 0 {
            return Err(GroupingError::Configuration(
                "maximum steps must be a positive integer".into(),
            ));
        }
        if self.max_no_improve == 0 {
            return Err(GroupingError::Configuration(
                "stall limit must be a positive integer".into(),
            ));
        }
        if let Some(target) = self.target_score {
            if !target.is_finite() {
                return Err(GroupingError::Configuration(format!(
                    "target score must be a finite number, got {target}"
                )));
            }
        }
        Ok(())
    }
}
