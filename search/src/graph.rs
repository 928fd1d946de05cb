//! The abstract graph capability.
//!
//! A graph, for the engine's purposes, is nothing but a neighbor
//! enumeration: given a node, emit each neighbor zero or more times through
//! the provided sink. Types implementing [`Graph`] can be handed directly
//! to the `*_graph` engine wrappers instead of a neighbor closure.

/// A type that can enumerate the neighbors of its nodes on demand.
pub trait Graph {
    /// The node type of the graph.
    type Node;

    /// Emit every neighbor of `node` into `emit`, synchronously.
    ///
    /// Enumeration order is the implementation's choice; it affects
    /// traversal order among equal-priority entries, never correctness.
    fn neighbors(&self, node: &Self::Node, emit: &mut dyn FnMut(Self::Node));
}
