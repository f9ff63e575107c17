//! Query executor — read-only questions asked of the network.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::traversal;
use crate::graph::SocialGraph;
use crate::types::NetworkResult;

/// Result of a mutual-friends query.
#[derive(Debug, Clone, Serialize)]
pub struct MutualResult {
    /// First person asked about.
    pub first: String,
    /// Second person asked about.
    pub second: String,
    /// Shared neighbors, in the second person's neighbor-list order.
    pub mutual: Vec<String>,
}

/// Result of a friend-suggestion query.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResult {
    /// Person the suggestions are for.
    pub person: String,
    /// Friends-of-friends in discovery order, without duplicates.
    pub suggestions: Vec<String>,
}

/// A person's profile.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    /// Person name.
    pub name: String,
    /// Direct connections exactly as stored (duplicates and self-loops kept).
    pub connections: Vec<String>,
    /// Number of neighbor-list entries.
    pub degree: usize,
    /// When the person was added (Unix epoch microseconds).
    pub added_at: u64,
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    /// Start person.
    pub from: String,
    /// End person.
    pub to: String,
    /// People along the path, both ends included.
    pub path: Vec<String>,
    /// Number of connections crossed.
    pub hops: usize,
}

/// Whole-network statistics.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of people.
    pub people: usize,
    /// Number of undirected connections.
    pub connections: usize,
    /// People with an empty neighbor list.
    pub isolated: usize,
    /// Largest neighbor-list length.
    pub max_degree: usize,
}

/// The query engine executes read-only operations against a graph.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// People connected to both `a` and `b`.
    pub fn mutual_friends(
        &self,
        graph: &SocialGraph,
        a: &str,
        b: &str,
    ) -> NetworkResult<MutualResult> {
        let first = graph.require(a)?;
        let second = graph.require(b)?;

        let of_first: HashSet<&str> = first.connections.iter().map(String::as_str).collect();
        let mut seen: HashSet<&str> = HashSet::new();
        let mutual = second
            .connections
            .iter()
            .map(String::as_str)
            .filter(|name| of_first.contains(name) && seen.insert(*name))
            .map(str::to_string)
            .collect();

        Ok(MutualResult {
            first: a.to_string(),
            second: b.to_string(),
            mutual,
        })
    }

    /// Friends-of-friends who are neither `person` nor already connected to
    /// them. Names that are no longer in the network are skipped; the public
    /// mutators never leave such names behind, so this only guards against
    /// an inconsistent graph.
    pub fn suggest_friends(
        &self,
        graph: &SocialGraph,
        person: &str,
    ) -> NetworkResult<SuggestionResult> {
        let origin = graph.require(person)?;
        let direct: HashSet<&str> = origin.connections.iter().map(String::as_str).collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut suggestions = Vec::new();
        for friend in &origin.connections {
            for candidate in graph.neighbors(friend).unwrap_or(&[]) {
                let candidate = candidate.as_str();
                if candidate == person || direct.contains(candidate) {
                    continue;
                }
                if !graph.contains(candidate) {
                    log::warn!("skipping dangling suggestion {} for {}", candidate, person);
                    continue;
                }
                if seen.insert(candidate) {
                    suggestions.push(candidate.to_string());
                }
            }
        }

        Ok(SuggestionResult {
            person: person.to_string(),
            suggestions,
        })
    }

    /// Profile of a single person.
    pub fn profile(&self, graph: &SocialGraph, person: &str) -> NetworkResult<Profile> {
        let p = graph.require(person)?;
        Ok(Profile {
            name: p.name.clone(),
            connections: p.connections.clone(),
            degree: p.degree(),
            added_at: p.added_at,
        })
    }

    /// Shortest chain of connections from `from` to `to`.
    pub fn shortest_path(
        &self,
        graph: &SocialGraph,
        from: &str,
        to: &str,
    ) -> NetworkResult<PathResult> {
        let path = traversal::shortest_path(graph, from, to)?;
        Ok(PathResult {
            from: from.to_string(),
            to: to.to_string(),
            hops: path.len() - 1,
            path,
        })
    }

    /// Counts over the whole network.
    pub fn stats(&self, graph: &SocialGraph) -> GraphStats {
        GraphStats {
            people: graph.person_count(),
            connections: graph.connection_count(),
            isolated: graph.people().iter().filter(|p| p.degree() == 0).count(),
            max_degree: graph.people().iter().map(|p| p.degree()).max().unwrap_or(0),
        }
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
