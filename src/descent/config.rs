//! Descent configuration.

use std::time::Duration;

use crate::dispatching::PriorityRule;

/// Configuration for the critical-block descent.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_jobshop::descent::DescentConfig;
/// use u_jobshop::dispatching::PriorityRule;
///
/// let config = DescentConfig::default()
///     .with_time_limit(Duration::from_millis(250))
///     .with_initial_rule(PriorityRule::EstSpt);
/// assert_eq!(config.time_limit, Duration::from_millis(250));
/// assert!(config.check_deadline_per_neighbor);
/// ```
#[derive(Debug, Clone)]
pub struct DescentConfig {
    /// Wall-clock budget used by [`DescentRunner::run`](super::DescentRunner::run)
    /// and [`DescentRunner::solve`](super::DescentRunner::solve).
    pub time_limit: Duration,
    /// Also check the deadline between neighbor evaluations, not only
    /// between iterations.
    pub check_deadline_per_neighbor: bool,
    /// Rule used to build the initial solution in
    /// [`DescentRunner::solve`](super::DescentRunner::solve).
    pub initial_rule: PriorityRule,
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(10),
            check_deadline_per_neighbor: true,
            initial_rule: PriorityRule::EstLrpt,
        }
    }
}

impl DescentConfig {
    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Enables or disables the deadline check between neighbor evaluations.
    pub fn with_deadline_check_per_neighbor(mut self, enabled: bool) -> Self {
        self.check_deadline_per_neighbor = enabled;
        self
    }

    /// Sets the dispatching rule for the initial solution.
    pub fn with_initial_rule(mut self, rule: PriorityRule) -> Self {
        self.initial_rule = rule;
        self
    }
}
