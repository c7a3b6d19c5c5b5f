// src/graph/topo.rs

//! Topological ordering via reverse depth-first postorder.

use std::collections::HashSet;

use crate::graph::traverse::Adjacency;

/// Total order over all nodes of `graph`, computed as reverse DFS
/// postorder: roots are taken in first-insertion order, every successor is
/// finished before its parent, and the finish sequence is reversed.
///
/// On an acyclic graph this is a valid topological order: for every edge
/// `u -> v`, `u` comes before `v`. No cycle detection is performed — on a
/// cyclic graph the visited-set DFS still terminates and the result is
/// merely *some* permutation of the nodes, returned without error. Graphs
/// built with [`EdgeAdmission::Acyclic`] cannot reach that state.
///
/// Runs with an explicit stack, so depth is bounded by the longest simple
/// path rather than the call stack.
///
/// [`EdgeAdmission::Acyclic`]: crate::graph::EdgeAdmission
pub fn topsort<G: Adjacency>(graph: &G) -> Vec<G::Node> {
    let mut visited: HashSet<G::Node> = HashSet::new();
    let mut finished: Vec<G::Node> = Vec::with_capacity(graph.nodes().len());

    for root in graph.nodes() {
        if !visited.insert(root.clone()) {
            continue;
        }

        // (node, index of the next successor to look at)
        let mut stack: Vec<(G::Node, usize)> = vec![(root.clone(), 0)];

        loop {
            let candidate = {
                let Some((node, cursor)) = stack.last_mut() else {
                    break;
                };
                let succ = graph.out_edges(node);
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
                    if visited.insert(next.clone()) {
                        stack.push((next, 0));
                    }
                }
                None => {
                    if let Some((node, _)) = stack.pop() {
                        finished.push(node);
                    }
                }
            }
        }
    }

    finished.reverse();
    finished
}
