// tests/traversal.rs

mod common;

use std::error::Error;

use dagwalk::Digraph;
use dagwalk::graph::{bfs_from, dfs_from};

type TestResult = Result<(), Box<dyn Error>>;

/// A -> B, A -> C, B -> D, C -> D.
fn diamond() -> Digraph<&'static str> {
    let mut g = Digraph::new();
    g.add_edge("A", "B").unwrap();
    g.add_edge("A", "C").unwrap();
    g.add_edge("B", "D").unwrap();
    g.add_edge("C", "D").unwrap();
    g
}

#[test]
fn dfs_descends_before_visiting_siblings() {
    common::init_tracing();
    let g = diamond();

    // D is reached through B and must not be revisited through C.
    let order: Vec<_> = g.dfs_from("A").collect();
    assert_eq!(order, ["B", "D", "C"]);
}

#[test]
fn bfs_visits_level_by_level() {
    let g = diamond();

    let order: Vec<_> = g.bfs_from("A").collect();
    assert_eq!(order, ["B", "C", "D"]);
}

#[test]
fn walks_never_yield_the_start_node() {
    let g = diamond();

    assert!(!g.dfs_from("A").any(|n| n == "A"));
    assert!(!g.bfs_from("A").any(|n| n == "A"));
}

#[test]
fn default_start_is_the_first_inserted_node() {
    let g = diamond();

    let via_default: Vec<_> = g.dfs().collect();
    let via_explicit: Vec<_> = g.dfs_from("A").collect();
    assert_eq!(via_default, via_explicit);

    let via_default: Vec<_> = g.bfs().collect();
    let via_explicit: Vec<_> = g.bfs_from("A").collect();
    assert_eq!(via_default, via_explicit);
}

#[test]
fn empty_graph_walks_are_empty() {
    let g: Digraph<&str> = Digraph::new();

    assert_eq!(g.dfs().count(), 0);
    assert_eq!(g.bfs().count(), 0);
}

#[test]
fn unknown_start_walks_are_empty() {
    let g = diamond();

    assert_eq!(g.dfs_from("nope").count(), 0);
    assert_eq!(g.bfs_from("nope").count(), 0);
}

#[test]
fn walks_terminate_on_cycles() -> TestResult {
    let mut g: Digraph<u32> = Digraph::new();
    g.add_edge(1, 2)?;
    g.add_edge(2, 3)?;
    g.add_edge(3, 1)?;
    g.add_edge(3, 4)?;

    let dfs: Vec<_> = g.dfs_from(1).collect();
    assert_eq!(dfs, [2, 3, 4]);

    let bfs: Vec<_> = g.bfs_from(1).collect();
    assert_eq!(bfs, [2, 3, 4]);
    Ok(())
}

#[test]
fn walks_only_cover_the_reachable_component() -> TestResult {
    let mut g: Digraph<&str> = Digraph::new();
    g.add_edge("a", "b")?;
    g.add_edge("island", "reef")?;

    let reachable: Vec<_> = g.dfs_from("a").collect();
    assert_eq!(reachable, ["b"]);

    let reachable: Vec<_> = g.bfs_from("island").collect();
    assert_eq!(reachable, ["reef"]);
    Ok(())
}

#[test]
fn walks_are_lazy_and_restart_from_scratch() {
    let g = diamond();

    // Taking one element and dropping the iterator leaves no state behind;
    // a fresh call recomputes the full order.
    let first = g.dfs_from("A").next();
    assert_eq!(first, Some("B"));

    let order: Vec<_> = g.dfs_from("A").collect();
    assert_eq!(order, ["B", "D", "C"]);
}

#[test]
fn free_functions_match_the_methods() {
    let g = diamond();

    let from_fn: Vec<_> = dfs_from(&g, "A").collect();
    let from_method: Vec<_> = g.dfs_from("A").collect();
    assert_eq!(from_fn, from_method);

    let from_fn: Vec<_> = bfs_from(&g, "A").collect();
    let from_method: Vec<_> = g.bfs_from("A").collect();
    assert_eq!(from_fn, from_method);
}

#[test]
fn walk_iterators_clone_even_when_the_graph_cannot() {
    use dagwalk::Adjacency;

    // Adjacency view with no Clone impl of its own.
    struct Chain {
        order: Vec<u32>,
        hops: Vec<Vec<u32>>,
    }

    impl Adjacency for Chain {
        type Node = u32;

        fn nodes(&self) -> &[u32] {
            &self.order
        }

        fn out_edges(&self, id: &u32) -> &[u32] {
            self.hops
                .get(*id as usize)
                .map(Vec::as_slice)
                .unwrap_or(&[])
        }
    }

    let chain = Chain {
        order: vec![0, 1, 2],
        hops: vec![vec![1], vec![2], vec![]],
    };

    let mut walk = dfs_from(&chain, 0);
    assert_eq!(walk.next(), Some(1));

    // The clone resumes from the same point, independently.
    let mut forked = walk.clone();
    assert_eq!(walk.next(), Some(2));
    assert_eq!(forked.next(), Some(2));
    assert_eq!(forked.next(), None);

    let level_walk = bfs_from(&chain, 0);
    let forked: Vec<_> = level_walk.clone().collect();
    assert_eq!(forked, [1, 2]);
    assert_eq!(level_walk.collect::<Vec<_>>(), [1, 2]);
}

#[test]
fn dfs_follows_adjacency_insertion_order() -> TestResult {
    let mut g: Digraph<&str> = Digraph::new();
    g.add_edge("root", "late")?;
    g.add_edge("root", "early")?;
    g.add_edge("late", "deep")?;

    // "late" was wired first, so the walk dives through it before "early".
    let order: Vec<_> = g.dfs_from("root").collect();
    assert_eq!(order, ["late", "deep", "early"]);
    Ok(())
}
