// src/graph/traverse.rs

//! Lazy depth-first and breadth-first walks.
//!
//! The walks are written against [`Adjacency`], the minimal read-only view
//! they actually need, rather than against [`Digraph`] directly. Anything
//! exposing an ordered node list and ordered out-edges can be traversed.
//!
//! Both walks:
//! - never yield the start node, only nodes reachable from it
//! - yield each node at most once (private visited set per walk)
//! - terminate on cyclic graphs
//! - recompute from scratch when invoked again (not restartable in place)
//!
//! The iterators hold a shared borrow of the graph for their whole
//! lifetime, so the borrow checker rules out mutation mid-walk; there is no
//! locking and nothing to clean up when a walk is dropped early.
//!
//! [`Digraph`]: crate::graph::Digraph

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Minimal adjacency-query capability needed by the walk and ordering
/// algorithms.
pub trait Adjacency {
    /// Node identifier type.
    type Node: Eq + Hash + Clone;

    /// All node identifiers in first-insertion order.
    fn nodes(&self) -> &[Self::Node];

    /// Direct successors of `id` in edge-insertion order; empty for an
    /// unknown node.
    fn out_edges(&self, id: &Self::Node) -> &[Self::Node];
}

/// Depth-first walk over everything reachable from the first inserted node.
///
/// Empty walk for an empty graph.
pub fn dfs<G: Adjacency>(graph: &G) -> Dfs<'_, G> {
    match graph.nodes().first() {
        Some(start) => dfs_from(graph, start.clone()),
        None => Dfs {
            graph,
            visited: HashSet::new(),
            stack: Vec::new(),
        },
    }
}

/// Depth-first walk from `start`.
///
/// Pre-order over successors: each not-yet-visited successor is yielded,
/// then fully descended into before its next sibling is considered. The
/// start node itself is marked visited but never yielded. An unknown
/// `start` produces an empty walk.
pub fn dfs_from<G: Adjacency>(graph: &G, start: G::Node) -> Dfs<'_, G> {
    let mut visited = HashSet::new();
    visited.insert(start.clone());
    Dfs {
        graph,
        visited,
        stack: vec![(start, 0)],
    }
}

/// Breadth-first walk over everything reachable from the first inserted
/// node.
///
/// Empty walk for an empty graph.
pub fn bfs<G: Adjacency>(graph: &G) -> Bfs<'_, G> {
    match graph.nodes().first() {
        Some(start) => bfs_from(graph, start.clone()),
        None => Bfs {
            graph,
            visited: HashSet::new(),
            queue: VecDeque::new(),
            suppress_next: false,
        },
    }
}

/// Breadth-first walk from `start`.
///
/// Level order: nodes are yielded in the order they are dequeued, with
/// successors enqueued in adjacency order and marked visited at enqueue
/// time. The start node seeds the queue but is suppressed from the output.
/// An unknown `start` produces an empty walk.
pub fn bfs_from<G: Adjacency>(graph: &G, start: G::Node) -> Bfs<'_, G> {
    let mut visited = HashSet::new();
    visited.insert(start.clone());
    let mut queue = VecDeque::new();
    queue.push_back(start);
    Bfs {
        graph,
        visited,
        queue,
        suppress_next: true,
    }
}

/// Lazy depth-first iterator; see [`dfs_from`].
///
/// The explicit `(node, next-successor-index)` stack keeps memory bounded
/// by the longest simple path instead of the call stack.
pub struct Dfs<'g, G: Adjacency> {
    graph: &'g G,
    visited: HashSet<G::Node>,
    stack: Vec<(G::Node, usize)>,
}

// Not derived: only the reference is copied, so `G: Clone` is not needed.
impl<G: Adjacency> Clone for Dfs<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            visited: self.visited.clone(),
            stack: self.stack.clone(),
        }
    }
}

impl<G: Adjacency> Iterator for Dfs<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<G::Node> {
        loop {
            let candidate = {
                let (node, cursor) = self.stack.last_mut()?;
                let succ = self.graph.out_edges(node);
                if *cursor < succ.len() {
                    let next = succ[*cursor].clone();
                    *cursor += 1;
                    Some(next)
                } else {
                    None
                }
            };

            match candidate {
                Some(next) => {
                    if self.visited.insert(next.clone()) {
                        self.stack.push((next.clone(), 0));
                        return Some(next);
                    }
                    // Already seen via another path: skip, stay on this frame.
                }
                None => {
                    // Frame exhausted, resume its parent.
                    self.stack.pop();
                }
            }
        }
    }
}

/// Lazy breadth-first iterator; see [`bfs_from`].
pub struct Bfs<'g, G: Adjacency> {
    graph: &'g G,
    visited: HashSet<G::Node>,
    queue: VecDeque<G::Node>,
    /// True until the seeded start node has been dequeued and swallowed.
    suppress_next: bool,
}

impl<G: Adjacency> Clone for Bfs<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            visited: self.visited.clone(),
            queue: self.queue.clone(),
            suppress_next: self.suppress_next,
        }
    }
}

impl<G: Adjacency> Iterator for Bfs<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<G::Node> {
        while let Some(node) = self.queue.pop_front() {
            for next in self.graph.out_edges(&node) {
                if self.visited.insert(next.clone()) {
                    self.queue.push_back(next.clone());
                }
            }

            if self.suppress_next {
                self.suppress_next = false;
                continue;
            }
            return Some(node);
        }
        None
    }
}
