//! Search telemetry artifact.
//!
//! Every traced search produces a [`SearchTelemetryV1`] describing how the
//! loop terminated and how much work it did, regardless of outcome. The
//! artifact is node-type-agnostic — it records counters and the termination
//! reason, never node values — so it can be rendered to JSON without
//! constraining the caller's node type.

use serde_json::{json, Value};

/// Why a search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The status check signaled `Goal`; a path was reconstructed.
    GoalReached,
    /// The status check signaled `Break`; the frontier was discarded.
    SearchBroken,
    /// The frontier emptied without a `Goal` signal.
    FrontierExhausted,
}

impl TerminationReasonV1 {
    /// Stable string tag used in the JSON rendering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::SearchBroken => "search_broken",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// Counters and termination reason for one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTelemetryV1 {
    /// Frontier pops whose status check signaled `Continue`.
    pub expansions: u64,
    /// Entries recorded in the arena (start node included).
    pub entries_created: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: u64,
    /// Why the loop stopped.
    pub termination: TerminationReasonV1,
}

impl SearchTelemetryV1 {
    /// Render as a JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "expansions": self.expansions,
            "entries_created": self.entries_created,
            "frontier_high_water": self.frontier_high_water,
            "termination": self.termination.as_str(),
        })
    }

    /// Render as a compact JSON string with a stable key order.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}
