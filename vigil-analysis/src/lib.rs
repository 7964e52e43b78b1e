//! Vigil Analysis - risk scoring and decision policy
//!
//! Turns a URL into an assessment and an assessment into an action:
//! - RiskScorer combines remote verdicts with local heuristics
//! - The decision policy applies settings and thresholds

pub mod policy;
pub mod scorer;

pub use policy::*;
pub use scorer::*;
