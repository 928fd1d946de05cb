//! Goal-check adapters.
//!
//! The engine consumes one contract: a per-node closure returning
//! [`SearchStatus`]. The simpler goal shapes — a boolean predicate, a fixed
//! target node, a fixed target with caller-supplied equality, a plain
//! continue/break signal — are adapters constructing that closure, never
//! separate code paths through the loop.

use wayfind_kernel::status::{Flow, SearchStatus};

/// Adapt a boolean goal predicate: `true` signals `Goal`, `false`
/// `Continue`.
pub fn goal_predicate<N, P>(mut predicate: P) -> impl FnMut(&N) -> SearchStatus
where
    P: FnMut(&N) -> bool,
{
    move |node| SearchStatus::from_goal(predicate(node))
}

/// Adapt a fixed target node compared via the type's natural equality.
pub fn goal_value<N: PartialEq>(target: N) -> impl FnMut(&N) -> SearchStatus {
    move |node| SearchStatus::from_goal(*node == target)
}

/// Adapt a fixed target node compared via a caller-supplied equality
/// function.
pub fn goal_value_by<N, E>(target: N, mut equal: E) -> impl FnMut(&N) -> SearchStatus
where
    E: FnMut(&N, &N) -> bool,
{
    move |node| SearchStatus::from_goal(equal(node, &target))
}

/// Adapt a two-valued continue/break signal. The result never reports
/// `Goal`; useful for traversals that only want early termination.
pub fn from_flow<N, F>(mut flow: F) -> impl FnMut(&N) -> SearchStatus
where
    F: FnMut(&N) -> Flow,
{
    move |node| SearchStatus::from(flow(node))
}
