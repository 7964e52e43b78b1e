//! Bounded activity log
//!
//! Keeps the most recent navigation outcomes for inspection. Capacity is
//! fixed; once full, the oldest record is dropped for each new one.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

use crate::{RiskAssessment, RiskTier, ACTIVITY_CAPACITY, BLOCK_THRESHOLD};

/// One logged navigation outcome
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecord {
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub score: f64,
    pub tier: RiskTier,
    pub factor_count: usize,
    /// True when the score reached the block threshold, whether or not a
    /// redirect actually fired
    pub blocked: bool,
}

impl ActivityRecord {
    /// Build a record from an assessment at `timestamp`
    pub fn from_assessment(assessment: &RiskAssessment, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            url: assessment.url.clone(),
            score: assessment.score,
            tier: assessment.tier,
            factor_count: assessment.factors.len(),
            blocked: assessment.score >= BLOCK_THRESHOLD,
        }
    }
}

/// Bounded FIFO log of navigation outcomes
#[derive(Debug)]
pub struct ActivityLog {
    records: VecDeque<ActivityRecord>,
    capacity: usize,
}

impl ActivityLog {
    /// Log with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(ACTIVITY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, evicting the oldest once full
    pub fn append(&mut self, record: ActivityRecord) {
        if self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// All records, oldest first
    pub fn records(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.records.iter()
    }

    /// The most recent `n` records, newest first
    pub fn tail(&self, n: usize) -> Vec<&ActivityRecord> {
        self.records.iter().rev().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
