//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{NetworkError, NetworkResult};

use super::SocialGraph;

/// Unweighted shortest path between two people.
///
/// Neighbors are scanned in adjacency order and the search stops as soon as
/// `end` is first discovered. The returned path starts at `start` and ends at
/// `end`; `start == end` yields a single-element path.
pub fn shortest_path(graph: &SocialGraph, start: &str, end: &str) -> NetworkResult<Vec<String>> {
    graph.require(start)?;
    graph.require(end)?;

    if start == end {
        return Ok(vec![start.to_string()]);
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut parent: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    let mut found = false;
    'search: while let Some(current) = queue.pop_front() {
        let neighbors = graph.neighbors(current).unwrap_or(&[]);
        for neighbor in neighbors {
            let neighbor = neighbor.as_str();
            if !visited.insert(neighbor) {
                continue;
            }
            parent.insert(neighbor, current);
            if neighbor == end {
                found = true;
                break 'search;
            }
            queue.push_back(neighbor);
        }
    }

    if !found {
        log::debug!("no path from {} to {}", start, end);
        return Err(NetworkError::NoPath {
            from: start.to_string(),
            to: end.to_string(),
        });
    }

    let mut path = vec![end.to_string()];
    let mut at = end;
    while let Some(&prev) = parent.get(at) {
        path.push(prev.to_string());
        at = prev;
    }
    path.reverse();
    Ok(path)
}
