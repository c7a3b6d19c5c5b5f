// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod logging;

use anyhow::Result;
use tracing::info;

pub use crate::errors::CycleError;
pub use crate::graph::{Adjacency, Bfs, Dfs, Digraph, EdgeAdmission};

use crate::cli::{CliArgs, Demo};

/// High-level entry point used by `main.rs`.
///
/// Builds one of the built-in demonstration graphs and prints its walks
/// and ordering. The library types above are the reusable part; this is
/// just a showcase.
pub fn run(args: CliArgs) -> Result<()> {
    match args.demo {
        Demo::Diamond => demo_diamond(),
        Demo::Dressing => demo_dressing(),
    }
}

/// Diamond-shaped digraph: A feeds B and C, both feed D.
///
/// Shows that DFS descends fully before backtracking (B, D, C — D is not
/// revisited via C) while BFS goes level by level (B, C, D).
fn demo_diamond() -> Result<()> {
    let mut g: Digraph<&str, (), u32> = Digraph::new();
    g.add_edge_weighted("A", "B", 1)?;
    g.add_edge_weighted("A", "C", 2)?;
    g.add_edge("B", "D")?;
    g.add_edge("C", "D")?;

    info!(nodes = g.len(), "diamond graph built");

    println!("diamond digraph");
    println!("  nodes: {:?}", g.nodes());
    println!("  dfs from A: {:?}", g.dfs_from("A").collect::<Vec<_>>());
    println!("  bfs from A: {:?}", g.bfs_from("A").collect::<Vec<_>>());
    println!(
        "  weight A->B: {:?}  weight A->C: {:?}",
        g.edge_weight(&"A", &"B"),
        g.edge_weight(&"A", &"C"),
    );

    Ok(())
}

/// The classic "getting dressed" dependency chain on an acyclic graph,
/// including one deliberately cycle-forming edge that gets rejected.
fn demo_dressing() -> Result<()> {
    let mut dag: Digraph<&str> = Digraph::acyclic();
    dag.add_edge("shirt", "tie")?;
    dag.add_edge("shirt", "belt")?;
    dag.add_edge("tie", "jacket")?;
    dag.add_edge("belt", "jacket")?;
    dag.add_edge("pants", "shoes")?;
    dag.add_edge("pants", "belt")?;
    dag.add_edge("socks", "shoes")?;

    info!(nodes = dag.len(), "dressing graph built");

    println!("getting dressed (acyclic digraph)");
    println!("  order: {:?}", dag.topsort());

    match dag.add_edge("jacket", "shirt") {
        Ok(()) => println!("  unexpected: jacket -> shirt was accepted"),
        Err(err) => println!("  rejected as expected: {err}"),
    }

    // The failed insertion changed nothing; the order still holds.
    println!("  order after rejection: {:?}", dag.topsort());

    Ok(())
}
