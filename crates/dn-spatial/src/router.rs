//! Shortest-path trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The provider calls routing through the [`Router`] trait, so an A* or
//! contraction-hierarchy router can replace [`DijkstraRouter`] without
//! touching the matrix builder.
//!
//! # Cost units
//!
//! Edge weight is the physical segment length.  The priority queue keys on
//! whole millimetres (`u64`) so ordering is total and ties are broken by
//! `NodeId`; the reported `length_m` is the exact `f64` sum of the edges on
//! the chosen path.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use dn_core::{EdgeId, NodeId};

use crate::network::RoadNetwork;
use crate::{SpatialError, SpatialResult};

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    /// Nodes visited in order, source first, destination last.
    pub nodes: Vec<NodeId>,
    /// Edges traversed in order; one fewer than `nodes`.
    pub edges: Vec<EdgeId>,
    /// Total physical length in metres.
    pub length_m: f64,
}

impl ShortestPath {
    /// `true` if source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn length_km(&self) -> f64 {
        self.length_m / 1_000.0
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be deterministic for a fixed graph: the same query
/// always yields the same node sequence.
pub trait Router: Send + Sync {
    /// Least-length path from `from` to `to`.
    ///
    /// `from == to` yields a single-node path of length 0.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NodeNotFound`] for ids outside the graph,
    /// [`SpatialError::NoPath`] if `to` is unreachable from `from`.
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
    ) -> SpatialResult<ShortestPath>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Single-source Dijkstra over the CSR graph with `edge_length_m` as cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
    ) -> SpatialResult<ShortestPath> {
        dijkstra(network, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[inline]
fn edge_cost_mm(network: &RoadNetwork, edge: EdgeId) -> u64 {
    (network.edge_length_m[edge.index()].max(0.0) * 1_000.0).round() as u64
}

fn dijkstra(network: &RoadNetwork, from: NodeId, to: NodeId) -> SpatialResult<ShortestPath> {
    for node in [from, to] {
        if !network.contains(node) {
            return Err(SpatialError::NodeNotFound(node));
        }
    }

    if from == to {
        return Ok(ShortestPath { nodes: vec![from], edges: vec![], length_m: 0.0 });
    }

    let n = network.node_count();
    let mut dist      = vec![u64::MAX; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap on (cost, node); NodeId as secondary key keeps ties deterministic.
    let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, &prev_edge, from, to));
        }

        // Stale entry.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost.saturating_add(edge_cost_mm(network, edge));

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(SpatialError::NoPath { from, to })
}

fn reconstruct(network: &RoadNetwork, prev_edge: &[EdgeId], from: NodeId, to: NodeId) -> ShortestPath {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = network.edge_from[e.index()];
    }
    edges.reverse();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(from);
    nodes.extend(edges.iter().map(|e| network.edge_to[e.index()]));

    let length_m = edges.iter().map(|e| network.edge_length_m[e.index()]).sum();

    ShortestPath { nodes, edges, length_m }
}
