// src/graph/mod.rs

//! Directed-graph storage and algorithms.
//!
//! - [`digraph`] holds the graph itself: nodes, payloads, adjacency,
//!   edge weights, and the edge-admission policy.
//! - [`traverse`] contains the lazy depth-first / breadth-first walks.
//! - [`topo`] computes a topological ordering.

pub mod digraph;
pub mod topo;
pub mod traverse;

pub use digraph::{Digraph, EdgeAdmission};
pub use topo::topsort;
pub use traverse::{Adjacency, Bfs, Dfs, bfs, bfs_from, dfs, dfs_from};
