//! Fluent API for building SocialGraph instances.

use crate::types::{GraphConfig, NetworkResult};

use super::SocialGraph;

/// Fluent builder for constructing a SocialGraph.
///
/// People and connections are recorded and only applied in `build`, so a
/// connection may name a person added later in the chain.
pub struct GraphBuilder {
    config: GraphConfig,
    people: Vec<String>,
    connections: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            people: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Use the given engine settings.
    pub fn config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a person.
    pub fn person(mut self, name: &str) -> Self {
        self.people.push(name.to_string());
        self
    }

    /// Add several people.
    pub fn people(mut self, names: &[&str]) -> Self {
        self.people.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Connect two people.
    pub fn connect(mut self, a: &str, b: &str) -> Self {
        self.connections.push((a.to_string(), b.to_string()));
        self
    }

    /// Build the final SocialGraph. Fails on the first duplicate person or
    /// connection that names an unknown person.
    pub fn build(self) -> NetworkResult<SocialGraph> {
        let mut graph = SocialGraph::with_config(self.config);
        for name in &self.people {
            graph.add_person(name)?;
        }
        for (a, b) in &self.connections {
            graph.add_connection(a, b)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
