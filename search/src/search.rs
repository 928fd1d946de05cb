//! Search entry points and the expansion loop.
//!
//! One loop shape, three frontier disciplines. Each algorithm seeds its
//! frontier with the start node, then repeatedly extracts the next entry,
//! evaluates the caller's status check, and on `Continue` expands the
//! entry's neighbors back into the frontier. `Break` and an exhausted
//! frontier report no path; `Goal` reconstructs the route from the
//! predecessor arena.
//!
//! The canonical entry points take closures. The `*_graph` variants adapt a
//! [`Graph`] implementation into the closure form; the goal-shape adapters
//! live in [`crate::check`]. None of them is a second loop.
//!
//! There is no visited set and no re-expansion suppression: the engine
//! re-enqueues whatever the neighbor callback emits, exactly as many times
//! as it is emitted. On cyclic graphs, termination is the caller's
//! responsibility — a step budget inside the status check, or dedup inside
//! the neighbor callback.

use wayfind_kernel::cost::Cost;
use wayfind_kernel::status::SearchStatus;

use crate::frontier::{FifoFrontier, Frontier, PriorityFrontier};
use crate::graph::Graph;
use crate::telemetry::{SearchTelemetryV1, TerminationReasonV1};
use crate::trail::{AstarItem, GreedyItem, Path, Trail};

/// Breadth-first search from `start` over the implicit graph `neighbors`.
///
/// FIFO expansion order: on an unweighted graph the returned path, if any,
/// has the minimum number of edges among all start-to-goal routes.
pub fn breadth_first_search<N, FN, CK>(start: N, neighbors: FN, check: CK) -> Option<Path<N>>
where
    N: Clone,
    FN: FnMut(&N, &mut dyn FnMut(N)),
    CK: FnMut(&N) -> SearchStatus,
{
    breadth_first_search_traced(start, neighbors, check).0
}

/// [`breadth_first_search`], also returning the telemetry artifact.
pub fn breadth_first_search_traced<N, FN, CK>(
    start: N,
    mut neighbors: FN,
    mut check: CK,
) -> (Option<Path<N>>, SearchTelemetryV1)
where
    N: Clone,
    FN: FnMut(&N, &mut dyn FnMut(N)),
    CK: FnMut(&N) -> SearchStatus,
{
    let mut trail = Trail::new();
    let mut frontier = FifoFrontier::new();
    frontier.push(trail.push(start, None));
    let mut expansions = 0u64;

    let (outcome, termination) = loop {
        let Some(entry) = frontier.pop() else {
            break (None, TerminationReasonV1::FrontierExhausted);
        };
        let current = trail.value(entry).clone();
        match check(&current) {
            SearchStatus::Break => break (None, TerminationReasonV1::SearchBroken),
            SearchStatus::Goal => {
                break (
                    Some(trail.reconstruct(entry)),
                    TerminationReasonV1::GoalReached,
                );
            }
            SearchStatus::Continue => {
                expansions += 1;
                neighbors(&current, &mut |neighbor| {
                    let child = trail.push(neighbor, Some(entry));
                    frontier.push(child);
                });
            }
        }
    };

    (outcome, telemetry(expansions, &trail, frontier.high_water(), termination))
}

/// Greedy heuristic search from `start`, extracting the frontier entry with
/// the lowest `heuristic` value first.
///
/// Named for continuity with the lineage of this engine: unlike textbook
/// Dijkstra, the extraction priority is `heuristic(neighbor)` alone — no
/// cumulative path cost is accumulated — so this behaves as greedy
/// best-first search and does NOT guarantee cheapest-path results. For
/// cost-optimal routes use [`astar_search`] (a zero heuristic degrades it
/// to cumulative-cost Dijkstra).
pub fn dijkstra_search<N, C, FN, H, CK>(
    start: N,
    neighbors: FN,
    heuristic: H,
    check: CK,
) -> Option<Path<N>>
where
    N: Clone,
    C: Cost,
    FN: FnMut(&N, &mut dyn FnMut(N)),
    H: FnMut(&N) -> C,
    CK: FnMut(&N) -> SearchStatus,
{
    dijkstra_search_traced(start, neighbors, heuristic, check).0
}

/// [`dijkstra_search`], also returning the telemetry artifact.
pub fn dijkstra_search_traced<N, C, FN, H, CK>(
    start: N,
    mut neighbors: FN,
    mut heuristic: H,
    mut check: CK,
) -> (Option<Path<N>>, SearchTelemetryV1)
where
    N: Clone,
    C: Cost,
    FN: FnMut(&N, &mut dyn FnMut(N)),
    H: FnMut(&N) -> C,
    CK: FnMut(&N) -> SearchStatus,
{
    let mut trail = Trail::new();
    let mut frontier: PriorityFrontier<GreedyItem<C>> = PriorityFrontier::new();
    let mut sequence = 0u64;
    // Seed priority plays no role: the seed is the only entry when popped.
    frontier.push(GreedyItem {
        priority: C::ZERO,
        entry: trail.push(start, None),
        sequence,
    });
    let mut expansions = 0u64;

    let (outcome, termination) = loop {
        let Some(item) = frontier.pop() else {
            break (None, TerminationReasonV1::FrontierExhausted);
        };
        let current = trail.value(item.entry).clone();
        match check(&current) {
            SearchStatus::Break => break (None, TerminationReasonV1::SearchBroken),
            SearchStatus::Goal => {
                break (
                    Some(trail.reconstruct(item.entry)),
                    TerminationReasonV1::GoalReached,
                );
            }
            SearchStatus::Continue => {
                expansions += 1;
                neighbors(&current, &mut |neighbor| {
                    sequence += 1;
                    let priority = heuristic(&neighbor);
                    let child = trail.push(neighbor, Some(item.entry));
                    frontier.push(GreedyItem {
                        priority,
                        entry: child,
                        sequence,
                    });
                });
            }
        }
    };

    (outcome, telemetry(expansions, &trail, frontier.high_water(), termination))
}

/// A* search from `start`.
///
/// Each entry accumulates `cost = parent cost + edge_cost(parent, child)`
/// and is extracted by `heuristic(child) + cost`. With non-negative edge
/// costs and an admissible, consistent heuristic the returned route's total
/// cost equals the true shortest-path cost; the winning entry's accumulated
/// cost is returned alongside the path.
pub fn astar_search<N, C, FN, H, E, CK>(
    start: N,
    neighbors: FN,
    heuristic: H,
    edge_cost: E,
    check: CK,
) -> Option<(Path<N>, C)>
where
    N: Clone,
    C: Cost,
    FN: FnMut(&N, &mut dyn FnMut(N)),
    H: FnMut(&N) -> C,
    E: FnMut(&N, &N) -> C,
    CK: FnMut(&N) -> SearchStatus,
{
    astar_search_traced(start, neighbors, heuristic, edge_cost, check).0
}

/// [`astar_search`], also returning the telemetry artifact.
pub fn astar_search_traced<N, C, FN, H, E, CK>(
    start: N,
    mut neighbors: FN,
    mut heuristic: H,
    mut edge_cost: E,
    mut check: CK,
) -> (Option<(Path<N>, C)>, SearchTelemetryV1)
where
    N: Clone,
    C: Cost,
    FN: FnMut(&N, &mut dyn FnMut(N)),
    H: FnMut(&N) -> C,
    E: FnMut(&N, &N) -> C,
    CK: FnMut(&N) -> SearchStatus,
{
    let mut trail = Trail::new();
    let mut frontier: PriorityFrontier<AstarItem<C>> = PriorityFrontier::new();
    let mut sequence = 0u64;
    frontier.push(AstarItem {
        priority: C::ZERO,
        cost: C::ZERO,
        entry: trail.push(start, None),
        sequence,
    });
    let mut expansions = 0u64;

    let (outcome, termination) = loop {
        let Some(item) = frontier.pop() else {
            break (None, TerminationReasonV1::FrontierExhausted);
        };
        let current = trail.value(item.entry).clone();
        match check(&current) {
            SearchStatus::Break => break (None, TerminationReasonV1::SearchBroken),
            SearchStatus::Goal => {
                break (
                    Some((trail.reconstruct(item.entry), item.cost)),
                    TerminationReasonV1::GoalReached,
                );
            }
            SearchStatus::Continue => {
                expansions += 1;
                neighbors(&current, &mut |neighbor| {
                    sequence += 1;
                    let cost = item.cost + edge_cost(&current, &neighbor);
                    let priority = heuristic(&neighbor) + cost;
                    let child = trail.push(neighbor, Some(item.entry));
                    frontier.push(AstarItem {
                        priority,
                        cost,
                        entry: child,
                        sequence,
                    });
                });
            }
        }
    };

    (outcome, telemetry(expansions, &trail, frontier.high_water(), termination))
}

/// [`breadth_first_search`] over a [`Graph`] implementation.
pub fn breadth_first_search_graph<G, CK>(
    start: G::Node,
    graph: &G,
    check: CK,
) -> Option<Path<G::Node>>
where
    G: Graph,
    G::Node: Clone,
    CK: FnMut(&G::Node) -> SearchStatus,
{
    breadth_first_search(start, |node, emit| graph.neighbors(node, emit), check)
}

/// [`dijkstra_search`] over a [`Graph`] implementation.
pub fn dijkstra_search_graph<G, C, H, CK>(
    start: G::Node,
    graph: &G,
    heuristic: H,
    check: CK,
) -> Option<Path<G::Node>>
where
    G: Graph,
    G::Node: Clone,
    C: Cost,
    H: FnMut(&G::Node) -> C,
    CK: FnMut(&G::Node) -> SearchStatus,
{
    dijkstra_search(
        start,
        |node, emit| graph.neighbors(node, emit),
        heuristic,
        check,
    )
}

/// [`astar_search`] over a [`Graph`] implementation.
pub fn astar_search_graph<G, C, H, E, CK>(
    start: G::Node,
    graph: &G,
    heuristic: H,
    edge_cost: E,
    check: CK,
) -> Option<(Path<G::Node>, C)>
where
    G: Graph,
    G::Node: Clone,
    C: Cost,
    H: FnMut(&G::Node) -> C,
    E: FnMut(&G::Node, &G::Node) -> C,
    CK: FnMut(&G::Node) -> SearchStatus,
{
    astar_search(
        start,
        |node, emit| graph.neighbors(node, emit),
        heuristic,
        edge_cost,
        check,
    )
}

fn telemetry<N>(
    expansions: u64,
    trail: &Trail<N>,
    high_water: usize,
    termination: TerminationReasonV1,
) -> SearchTelemetryV1 {
    SearchTelemetryV1 {
        expansions,
        entries_created: trail.len() as u64,
        frontier_high_water: high_water as u64,
        termination,
    }
}
