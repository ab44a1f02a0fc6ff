//! Built-in priority rules.
//!
//! # Categories
//!
//! - **Processing time**: SPT, LPT
//! - **Remaining work**: SRPT, LRPT
//! - **Earliest-start restricted**: EST_SPT, EST_LPT, EST_SRPT, EST_LRPT
//!
//! # Score Convention
//! All rules return lower scores for higher priority operations.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7.2
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DispatchContext, RuleScore};
use crate::error::JobShopError;
use crate::models::Operation;

/// Priority rule for greedy dispatching.
///
/// The `Est*` variants first restrict the candidates to those whose
/// machine becomes free earliest, then rank the survivors with their
/// base rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityRule {
    /// Shortest Processing Time.
    Spt,
    /// Longest Processing Time.
    Lpt,
    /// Shortest Remaining Processing Time of the job.
    Srpt,
    /// Longest Remaining Processing Time of the job.
    Lrpt,
    /// SPT among operations on the earliest-free machines.
    EstSpt,
    /// LPT among operations on the earliest-free machines.
    EstLpt,
    /// SRPT among operations on the earliest-free machines.
    EstSrpt,
    /// LRPT among operations on the earliest-free machines.
    #[default]
    EstLrpt,
}

impl PriorityRule {
    /// Every rule, in declaration order.
    pub const ALL: [PriorityRule; 8] = [
        Self::Spt,
        Self::Lpt,
        Self::Srpt,
        Self::Lrpt,
        Self::EstSpt,
        Self::EstLpt,
        Self::EstSrpt,
        Self::EstLrpt,
    ];

    /// Rule name (e.g., "SPT", "EST_LRPT").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spt => "SPT",
            Self::Lpt => "LPT",
            Self::Srpt => "SRPT",
            Self::Lrpt => "LRPT",
            Self::EstSpt => "EST_SPT",
            Self::EstLpt => "EST_LPT",
            Self::EstSrpt => "EST_SRPT",
            Self::EstLrpt => "EST_LRPT",
        }
    }

    /// Rule description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Spt => "Shortest Processing Time",
            Self::Lpt => "Longest Processing Time",
            Self::Srpt => "Shortest Remaining Processing Time",
            Self::Lrpt => "Longest Remaining Processing Time",
            Self::EstSpt => "Shortest Processing Time, earliest free machine first",
            Self::EstLpt => "Longest Processing Time, earliest free machine first",
            Self::EstSrpt => "Shortest Remaining Processing Time, earliest free machine first",
            Self::EstLrpt => "Longest Remaining Processing Time, earliest free machine first",
        }
    }

    /// Whether candidates are first filtered to the earliest-free machines.
    pub fn is_est_restricted(&self) -> bool {
        matches!(
            self,
            Self::EstSpt | Self::EstLpt | Self::EstSrpt | Self::EstLrpt
        )
    }

    /// The ranking rule applied after any machine-free filter.
    pub fn base(&self) -> PriorityRule {
        match self {
            Self::EstSpt => Self::Spt,
            Self::EstLpt => Self::Lpt,
            Self::EstSrpt => Self::Srpt,
            Self::EstLrpt => Self::Lrpt,
            other => *other,
        }
    }

    /// Scores a candidate operation. Lower = dispatched first.
    pub fn evaluate(&self, op: Operation, context: &DispatchContext<'_>) -> RuleScore {
        let instance = context.instance();
        match self.base() {
            Self::Spt => instance.duration_of(op),
            Self::Lpt => -instance.duration_of(op),
            Self::Srpt => instance.remaining_work(op),
            _ => -instance.remaining_work(op),
        }
    }
}

impl fmt::Display for PriorityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriorityRule {
    type Err = JobShopError;

    /// Parses a rule name, ignoring case and accepting `-` for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|rule| rule.name() == normalized)
            .ok_or_else(|| JobShopError::UnknownRule(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Instance;

    fn sample_instance() -> Instance {
        Instance::from_pairs(2, &[&[(0, 3), (1, 2)], &[(1, 2), (0, 2)]]).unwrap()
    }

    #[test]
    fn test_scores_follow_convention() {
        let inst = sample_instance();
        let ctx = DispatchContext::new(&inst);
        let a = Operation::new(0, 0); // duration 3, remaining 5
        let b = Operation::new(1, 0); // duration 2, remaining 4

        assert!(PriorityRule::Spt.evaluate(b, &ctx) < PriorityRule::Spt.evaluate(a, &ctx));
        assert!(PriorityRule::Lpt.evaluate(a, &ctx) < PriorityRule::Lpt.evaluate(b, &ctx));
        assert!(PriorityRule::Srpt.evaluate(b, &ctx) < PriorityRule::Srpt.evaluate(a, &ctx));
        assert!(PriorityRule::Lrpt.evaluate(a, &ctx) < PriorityRule::Lrpt.evaluate(b, &ctx));
        assert_eq!(PriorityRule::EstSrpt.evaluate(a, &ctx), 5);
    }

    #[test]
    fn test_base_and_restriction() {
        assert_eq!(PriorityRule::EstLpt.base(), PriorityRule::Lpt);
        assert_eq!(PriorityRule::Srpt.base(), PriorityRule::Srpt);
        assert!(PriorityRule::EstSpt.is_est_restricted());
        assert!(!PriorityRule::Lrpt.is_est_restricted());
        assert_eq!(PriorityRule::default(), PriorityRule::EstLrpt);
    }

    #[test]
    fn test_parse_and_display() {
        for rule in PriorityRule::ALL {
            assert_eq!(rule.to_string().parse::<PriorityRule>().unwrap(), rule);
        }
        assert_eq!("est-lrpt".parse::<PriorityRule>().unwrap(), PriorityRule::EstLrpt);
        assert_eq!(" spt ".parse::<PriorityRule>().unwrap(), PriorityRule::Spt);
        assert_eq!(
            "FIFO".parse::<PriorityRule>().unwrap_err(),
            JobShopError::UnknownRule("FIFO".into())
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PriorityRule::EstSrpt).unwrap();
        assert_eq!(json, "\"EST_SRPT\"");
        let back: PriorityRule = serde_json::from_str("\"LPT\"").unwrap();
        assert_eq!(back, PriorityRule::Lpt);
    }
}
