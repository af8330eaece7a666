//! Builds the ten-vertex practice graph and runs every query from vertex 3.
//!
//! ```text
//! cargo run --example practice_graph
//! ```

use std::error::Error;

use graphwalk::traversal::{self, LineSink};
use graphwalk::VertexGraph;

fn main() -> Result<(), Box<dyn Error>> {
    VertexGraph::with_capacity(10, |mut graph| -> Result<(), Box<dyn Error>> {
        let v3 = graph.add_vertex(3);
        let v7 = graph.add_vertex(7);
        let v12 = graph.add_vertex(12);
        let v34 = graph.add_vertex(34);
        let v56 = graph.add_vertex(56);
        let v78 = graph.add_vertex(78);
        let v91 = graph.add_vertex(91);
        let v45 = graph.add_vertex(45);
        let v23 = graph.add_vertex(23);
        let v67 = graph.add_vertex(67);

        graph.set_neighbors(v3, [v7, v34]);
        graph.set_neighbors(v7, [v12, v45, v34, v56]);
        graph.set_neighbors(v12, [v7, v56, v78]);
        graph.set_neighbors(v34, [v34, v91]);
        graph.set_neighbors(v56, [v78]);
        graph.set_neighbors(v78, [v91]);
        graph.set_neighbors(v91, [v56]);
        graph.set_neighbors(v45, [v23]);
        graph.set_neighbors(v23, []);
        graph.set_neighbors(v67, [v91]);

        println!("values reachable from 3:");
        let mut sink = LineSink::stdout();
        let printed = traversal::print_vertex_vals(&graph, Some(v3), &mut sink)?;
        sink.into_inner()?;
        println!("({printed} vertices)");

        let reach = traversal::reachable(&graph, Some(v3));
        let mut reach_values: Vec<i32> = reach.iter().map(|id| *graph.value(id)).collect();
        reach_values.sort_unstable();
        println!("reachable: {reach_values:?}");

        println!("max: {}", traversal::max(&graph, Some(v3)));

        let leaves = traversal::leaves(&graph, Some(v3));
        println!("leaves: {:?}", graph.values_of(&leaves));

        for (from, to) in [(v3, v91), (v12, v7), (v45, v56), (v67, v78)] {
            let found = traversal::has_strictly_increasing_path(&graph, Some(from), Some(to))?;
            println!(
                "increasing path {} -> {}: {found}",
                graph.value(from),
                graph.value(to)
            );
        }

        if let Some(path) = traversal::increasing_path(&graph, Some(v3), Some(v91))? {
            let values: Vec<i32> = path.iter().map(|&id| *graph.value(id)).collect();
            println!("witness 3 -> 91: {values:?}");
        }

        Ok(())
    })
}
