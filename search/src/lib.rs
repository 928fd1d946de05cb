//! Wayfind Search: graph-agnostic position and path search.
//!
//! This crate provides one algorithmic skeleton in two shapes: binary search
//! over an ordered sequence, and frontier-expansion search (breadth-first,
//! greedy heuristic, A*) over an implicit graph supplied entirely through
//! callbacks. No graph is ever stored; neighbors are produced on demand.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_kernel   ←  wayfind_search   ←  conformance-tests
//! (compare, cost,     (binary, frontier,   (fixtures, lock tests)
//!  status)             trail, engine)
//! ```
//!
//! # Key types
//!
//! - [`binary::BinaryOutcome`] — match position or order-preserving insertion point
//! - [`frontier::Frontier`] — the capability contract both expansion orders satisfy
//! - [`trail::Trail`] / [`trail::Path`] — predecessor arena and the reconstructed route
//! - [`telemetry::SearchTelemetryV1`] — how a search terminated, as a
//!   JSON-renderable artifact
//!
//! The three engine entry points are [`search::breadth_first_search`],
//! [`search::dijkstra_search`], and [`search::astar_search`]; every
//! goal-shape and graph-shape convenience is an adapter over those, never a
//! second loop.

#![forbid(unsafe_code)]

pub mod binary;
pub mod check;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod search;
pub mod telemetry;
pub mod trail;
