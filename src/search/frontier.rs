//! Dijkstra on the [`Graph`] of a Maze, driven by a binary heap

use super::{Element, Search};
use crate::{
    graph::{Graph, NodeIDMap, NodeIDSet},
    Point, PointMap,
};

use std::collections::BinaryHeap;

/// Searches the cheapest Path from `source` to `target` through the Graph.
///
/// The frontier always yields the candidate with the lowest Cost. Candidates of equal Cost
/// are taken in order of their [`NodeID`](crate::graph::NodeID), and since
/// [`Graph::from_maze`] assigns ids in row-major order, ties are broken the same way as in
/// [`dense::dijkstra_search`](super::dense::dijkstra_search).
///
/// If `source` or `target` has no Node (because it is a Wall or outside the Maze), the
/// target is not reachable.
///
/// ## Examples
/// ```
/// # use weighted_maze::{prelude::*, graph::Graph, search::frontier::dijkstra_search};
/// let maze = Maze::parse("S 5 E\n. . .").unwrap();
/// let graph = Graph::from_maze(&maze);
///
/// let search = dijkstra_search(&graph, maze.start(), maze.end());
///
/// assert!(search.is_found());
/// assert_eq!(search.cost(), Some(4));
/// assert_eq!(search.predecessors()[&(0, 2)], (1, 2));
/// ```
pub fn dijkstra_search(graph: &Graph, source: Point, target: Point) -> Search {
    let (start, goal) = match (graph.id_at(source), graph.id_at(target)) {
        (Some(start), Some(goal)) => (start, goal),
        _ => return Search::unreachable(PointMap::default(), 0),
    };

    // best known (cost, predecessor) of every reached Node
    let mut best = NodeIDMap::with_capacity(graph.len());
    let mut visited = NodeIDSet::with_capacity(graph.len());
    let mut next = BinaryHeap::new();
    next.push(Element(start, 0));
    best.insert(start, (0, start));

    let mut reached = None;

    while let Some(Element(current_id, current_cost)) = next.pop() {
        if !visited.insert(current_id) {
            continue;
        }
        let current = &graph[current_id];
        log::trace!("finalized {:?} at cost {}", current.pos, current_cost);

        if current_id == goal {
            reached = Some(current_cost);
            break;
        }

        for edge in current.edges.iter() {
            if visited.contains(&edge.target) {
                continue;
            }
            // cannot overflow, Maze::new rejects grids whose total Cost does not fit
            let other_cost = current_cost + edge.weight;

            let needs_visit = match best.get_mut(&edge.target) {
                Some((prev_cost, prev_id)) => {
                    if *prev_cost > other_cost {
                        *prev_cost = other_cost;
                        *prev_id = current_id;
                        true
                    } else {
                        false
                    }
                }
                None => {
                    best.insert(edge.target, (other_cost, current_id));
                    true
                }
            };

            if needs_visit {
                next.push(Element(edge.target, other_cost));
            }
        }
    }

    let predecessors: PointMap<Point> = best
        .iter()
        .filter(|&(&id, _)| id != start)
        .map(|(&id, &(_, prev))| (graph[id].pos, graph[prev].pos))
        .collect();

    match reached {
        Some(cost) => Search::reached(cost, predecessors, visited.len()),
        None => Search::unreachable(predecessors, visited.len()),
    }
}
