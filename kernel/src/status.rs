//! Search loop control signals.
//!
//! [`SearchStatus`] is the three-valued signal a per-node check returns to
//! the expansion loop. [`Flow`] is the general two-valued continue/break
//! signal used by callers that have no goal concept. Conversion between the
//! two is explicit: `Flow` lifts into `SearchStatus` losslessly, and `Goal`
//! is derived separately from a boolean goal test via
//! [`SearchStatus::from_goal`].

/// The per-node status signal steering a graph search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Expand this node's neighbors normally.
    Continue,
    /// Terminate immediately; report no path; discard the frontier.
    Break,
    /// Terminate immediately; report success; reconstruct the path ending
    /// at this node.
    Goal,
}

impl SearchStatus {
    /// Derive a status from a boolean goal test: `true` is `Goal`,
    /// `false` is `Continue`.
    #[must_use]
    pub fn from_goal(is_goal: bool) -> Self {
        if is_goal {
            Self::Goal
        } else {
            Self::Continue
        }
    }
}

/// A two-valued continue/break signal for iteration without a goal concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep iterating.
    Continue,
    /// Stop iterating.
    Break,
}

impl From<Flow> for SearchStatus {
    fn from(flow: Flow) -> Self {
        match flow {
            Flow::Continue => Self::Continue,
            Flow::Break => Self::Break,
        }
    }
}
