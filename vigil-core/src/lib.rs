//! Vigil Core - risk factor registry and domain model for URL scoring
//!
//! This crate provides the foundational primitives:
//! - Fixed registry of weighted risk factors
//! - Score-to-tier classification
//! - Hostname and scheme heuristics
//! - TTL cache for remote lookup results
//! - Bounded activity log and per-invocation settings

pub mod activity;
pub mod assessment;
pub mod cache;
pub mod heuristics;
pub mod registry;
pub mod settings;
pub mod tier;

pub use activity::*;
pub use assessment::*;
pub use cache::*;
pub use heuristics::*;
pub use registry::*;
pub use settings::*;
pub use tier::*;

/// Remote lookup cache TTL in seconds
pub const CACHE_TTL_SECS: i64 = 300;

/// Interval between background cache sweeps in seconds
pub const SWEEP_INTERVAL_SECS: u64 = 60;

/// Score at or above which a URL is High risk
pub const BLOCK_THRESHOLD: f64 = 8.0;

/// Score at or above which a URL is Medium risk
pub const WARN_THRESHOLD: f64 = 5.0;

/// Score at or above which a URL is Low risk
pub const LOW_THRESHOLD: f64 = 2.0;

/// Upper bound on any risk score
pub const MAX_SCORE: f64 = 10.0;

/// Maximum records retained in the activity log
pub const ACTIVITY_CAPACITY: usize = 100;
