// src/graph/digraph.rs

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::errors::CycleError;
use crate::graph::topo;
use crate::graph::traverse::{self, Adjacency, Bfs, Dfs};

/// Policy applied to every edge insertion, chosen at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeAdmission {
    /// Accept any edge: self-loops, parallel edges, cycles.
    #[default]
    Unrestricted,
    /// Reject an edge whose insertion would close a directed cycle.
    ///
    /// The check runs *before* anything is mutated, so a rejected call
    /// leaves the graph byte-for-byte as it was: no new nodes, no new
    /// adjacency entry, no weight assignment.
    Acyclic,
}

/// In-memory directed graph keyed by caller-supplied identifiers.
///
/// Three maps, all owned by the graph:
/// - adjacency: per node, outgoing destinations in edge-insertion order
///   (parallel edges keep one entry each)
/// - payloads: optional per-node data (`V`)
/// - weights: optional per-ordered-pair data (`W`)
///
/// Identifiers are never generated here; callers bring their own. Nodes and
/// edges can only be inserted, never removed, and `nodes()` reports
/// identifiers in first-insertion order.
///
/// Whether cycles are allowed is decided by the [`EdgeAdmission`] policy
/// passed at construction; see [`Digraph::acyclic`].
#[derive(Debug, Clone)]
pub struct Digraph<N, V = (), W = ()> {
    admission: EdgeAdmission,
    /// Distinct identifiers in first-insertion order.
    order: Vec<N>,
    /// Outgoing adjacency, destinations in edge-insertion order.
    adj: HashMap<N, Vec<N>>,
    /// Node payloads. No entry means "no payload".
    values: HashMap<N, V>,
    /// Edge weights keyed by ordered pair. No entry means "no weight".
    weights: HashMap<(N, N), W>,
}

impl<N, V, W> Digraph<N, V, W> {
    /// New empty graph that accepts any edge.
    pub fn new() -> Self {
        Self::with_admission(EdgeAdmission::Unrestricted)
    }

    /// New empty graph that rejects cycle-forming edges.
    pub fn acyclic() -> Self {
        Self::with_admission(EdgeAdmission::Acyclic)
    }

    /// New empty graph with an explicit admission policy.
    pub fn with_admission(admission: EdgeAdmission) -> Self {
        Self {
            admission,
            order: Vec::new(),
            adj: HashMap::new(),
            values: HashMap::new(),
            weights: HashMap::new(),
        }
    }

    /// The admission policy this graph was built with.
    pub fn admission(&self) -> EdgeAdmission {
        self.admission
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no node has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All node identifiers in first-insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.order
    }
}

impl<N, V, W> Digraph<N, V, W>
where
    N: Eq + Hash + Clone + Debug,
{
    /// Ensure `id` exists, with no payload.
    ///
    /// A no-op if the node is already present: the adjacency sequence and
    /// any stored payload are kept as they are.
    pub fn add_node(&mut self, id: N) {
        self.ensure_node(id);
    }

    /// Ensure `id` exists and attach `value` as its payload.
    ///
    /// Only takes effect for a previously unknown node. Re-adding an
    /// existing node never overwrites its payload — callers that
    /// re-declare nodes defensively before wiring edges rely on this.
    pub fn add_node_with_value(&mut self, id: N, value: V) {
        if self.contains_node(&id) {
            return;
        }
        self.ensure_node(id.clone());
        self.values.insert(id, value);
    }

    /// Insert a directed edge `u -> v` with no weight.
    ///
    /// Both endpoints are created (payload-less) if unknown. The adjacency
    /// entry is appended even if the same pair was inserted before, so
    /// parallel edges accumulate. Any weight previously stored for the pair
    /// is cleared, mirroring the unconditional weight-slot assignment of a
    /// weighted insert.
    ///
    /// Under [`EdgeAdmission::Unrestricted`] this never fails. Under
    /// [`EdgeAdmission::Acyclic`] it fails with [`CycleError`] when `v`
    /// already reaches `u` (a self-loop trivially does), leaving the graph
    /// unchanged.
    pub fn add_edge(&mut self, u: N, v: N) -> Result<(), CycleError<N>> {
        self.insert_edge(u, v, None)
    }

    /// Insert a directed edge `u -> v` carrying `weight`.
    ///
    /// Same admission rules as [`Digraph::add_edge`]. The weight for the
    /// ordered pair is overwritten; adjacency multiplicity still grows by
    /// one per call.
    pub fn add_edge_weighted(&mut self, u: N, v: N, weight: W) -> Result<(), CycleError<N>> {
        self.insert_edge(u, v, Some(weight))
    }

    /// Payload stored for `id`, or `None` for an unknown or payload-less node.
    pub fn node_value(&self, id: &N) -> Option<&V> {
        self.values.get(id)
    }

    /// Weight stored for the exact ordered pair `(u, v)`, if any.
    pub fn edge_weight(&self, u: &N, v: &N) -> Option<&W> {
        self.weights.get(&(u.clone(), v.clone()))
    }

    /// True if `id` has been inserted (directly or as an edge endpoint).
    pub fn contains_node(&self, id: &N) -> bool {
        self.adj.contains_key(id)
    }

    /// Independent copy of the direct successors of `id`, in edge-insertion
    /// order. Empty for an unknown node. Parallel edges show up once per
    /// insertion.
    pub fn successors(&self, id: &N) -> Vec<N> {
        self.adj.get(id).cloned().unwrap_or_default()
    }

    /// All nodes with at least one edge into `id`, scanning nodes in
    /// first-insertion order. A source appears once no matter how many
    /// parallel edges it contributes.
    pub fn predecessors(&self, id: &N) -> Vec<N> {
        self.order
            .iter()
            .filter(|u| self.adj.get(*u).is_some_and(|succ| succ.contains(id)))
            .cloned()
            .collect()
    }

    /// Topological ordering of all nodes; see [`topo::topsort`].
    pub fn topsort(&self) -> Vec<N> {
        topo::topsort(self)
    }

    /// Depth-first walk from the first inserted node; see [`traverse::dfs`].
    pub fn dfs(&self) -> Dfs<'_, Self> {
        traverse::dfs(self)
    }

    /// Depth-first walk from `start`; see [`traverse::dfs_from`].
    pub fn dfs_from(&self, start: N) -> Dfs<'_, Self> {
        traverse::dfs_from(self, start)
    }

    /// Breadth-first walk from the first inserted node; see [`traverse::bfs`].
    pub fn bfs(&self) -> Bfs<'_, Self> {
        traverse::bfs(self)
    }

    /// Breadth-first walk from `start`; see [`traverse::bfs_from`].
    pub fn bfs_from(&self, start: N) -> Bfs<'_, Self> {
        traverse::bfs_from(self, start)
    }

    /// Create the node if it is new; otherwise leave everything alone.
    fn ensure_node(&mut self, id: N) {
        if !self.adj.contains_key(&id) {
            debug!(node = ?id, "adding node");
            self.order.push(id.clone());
            self.adj.insert(id, Vec::new());
        }
    }

    /// Shared insertion path for weighted and unweighted edges.
    fn insert_edge(&mut self, u: N, v: N, weight: Option<W>) -> Result<(), CycleError<N>> {
        if self.admission == EdgeAdmission::Acyclic && self.reaches(&v, &u) {
            debug!(from = ?u, to = ?v, "edge rejected, would close a cycle");
            return Err(CycleError { u, v });
        }

        self.ensure_node(u.clone());
        self.ensure_node(v.clone());

        debug!(from = ?u, to = ?v, "adding edge");
        self.adj.entry(u.clone()).or_default().push(v.clone());

        match weight {
            Some(w) => {
                self.weights.insert((u, v), w);
            }
            None => {
                self.weights.remove(&(u.clone(), v.clone()));
            }
        }

        Ok(())
    }

    /// Is there a directed path (zero or more edges) from `from` to `target`?
    ///
    /// Iterative depth-first search with a visited set scoped to this call.
    /// Returns `true` as soon as `target` is reached; otherwise exhausts
    /// everything reachable from `from` before answering `false`.
    fn reaches(&self, from: &N, target: &N) -> bool {
        if from == target {
            return true;
        }

        let mut visited: HashSet<N> = HashSet::new();
        visited.insert(from.clone());
        let mut stack = vec![from.clone()];

        while let Some(node) = stack.pop() {
            if let Some(succ) = self.adj.get(&node) {
                for next in succ {
                    if next == target {
                        return true;
                    }
                    if visited.insert(next.clone()) {
                        stack.push(next.clone());
                    }
                }
            }
        }

        false
    }
}

impl<N, V, W> Default for Digraph<N, V, W> {
    fn default() -> Self {
        Self::new()
    }
}

// Not derived: the map fields need `N: Eq + Hash` for `HashMap`'s own
// `PartialEq`, which the derive would not emit.
impl<N, V, W> PartialEq for Digraph<N, V, W>
where
    N: Eq + Hash,
    V: PartialEq,
    W: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.admission == other.admission
            && self.order == other.order
            && self.adj == other.adj
            && self.values == other.values
            && self.weights == other.weights
    }
}

impl<N, V, W> Eq for Digraph<N, V, W>
where
    N: Eq + Hash,
    V: Eq,
    W: Eq,
{
}

impl<N, V, W> Adjacency for Digraph<N, V, W>
where
    N: Eq + Hash + Clone + Debug,
{
    type Node = N;

    fn nodes(&self) -> &[N] {
        &self.order
    }

    fn out_edges(&self, id: &N) -> &[N] {
        self.adj.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
