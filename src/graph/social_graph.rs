//! Core graph structure — people + symmetric adjacency lists.

use std::collections::HashMap;

use crate::types::{GraphConfig, NetworkError, NetworkResult, Person};

/// The in-memory undirected graph holding people and their connections.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// All people, in insertion order.
    people: Vec<Person>,
    /// Name index: name -> slot in `people`.
    index: HashMap<String, usize>,
    /// Engine settings.
    config: GraphConfig,
}

impl SocialGraph {
    /// Create a new empty graph with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with the given settings.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active settings.
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Number of people.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of undirected connections. A self-loop counts once, repeated
    /// connections count once per occurrence.
    pub fn connection_count(&self) -> usize {
        let entries: usize = self.people.iter().map(Person::degree).sum();
        entries / 2
    }

    /// Whether a person with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a person by name.
    pub fn get_person(&self, name: &str) -> Option<&Person> {
        self.index.get(name).map(|&slot| &self.people[slot])
    }

    pub(crate) fn get_person_mut(&mut self, name: &str) -> Option<&mut Person> {
        match self.index.get(name) {
            Some(&slot) => Some(&mut self.people[slot]),
            None => None,
        }
    }

    /// Look up a person, failing with `UnknownNode` if absent.
    pub fn require(&self, name: &str) -> NetworkResult<&Person> {
        self.get_person(name)
            .ok_or_else(|| NetworkError::UnknownNode(name.to_string()))
    }

    /// Neighbor list of a person, in insertion order.
    pub fn neighbors(&self, name: &str) -> Option<&[String]> {
        self.get_person(name).map(|p| p.connections.as_slice())
    }

    /// Number of neighbor-list entries for a person.
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.get_person(name).map(Person::degree)
    }

    /// All people (immutable slice, insertion order).
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// All names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.people.iter().map(|p| p.name.as_str())
    }

    /// Add a person with no connections.
    pub fn add_person(&mut self, name: &str) -> NetworkResult<()> {
        if name.is_empty() {
            return Err(NetworkError::InvalidName);
        }
        if self.contains(name) {
            log::debug!("add_person: {} already present", name);
            return Err(NetworkError::AlreadyExists(name.to_string()));
        }

        self.index.insert(name.to_string(), self.people.len());
        self.people.push(Person::new(name));
        log::debug!("added person {}", name);
        Ok(())
    }

    /// Connect two existing people. Returns `false` when dedup is enabled and
    /// the pair was already connected, in which case nothing changes.
    pub fn add_connection(&mut self, a: &str, b: &str) -> NetworkResult<bool> {
        // Validate both sides before touching either list
        let already = self.require(a)?.is_connected_to(b);
        self.require(b)?;

        if already && self.config.dedup_connections {
            log::debug!("add_connection: {} and {} already connected", a, b);
            return Ok(false);
        }

        if let Some(person) = self.get_person_mut(a) {
            person.connections.push(b.to_string());
        }
        if let Some(person) = self.get_person_mut(b) {
            person.connections.push(a.to_string());
        }
        log::debug!("connected {} <-> {}", a, b);
        Ok(true)
    }

    /// Disconnect two existing people, stripping every occurrence on both
    /// sides. Returns the number of entries removed from `a`'s list.
    pub fn remove_connection(&mut self, a: &str, b: &str) -> NetworkResult<usize> {
        self.require(a)?;
        self.require(b)?;

        let removed = self.get_person_mut(a).map(|p| p.strip(b)).unwrap_or(0);
        if a != b {
            if let Some(person) = self.get_person_mut(b) {
                person.strip(a);
            }
        }
        log::debug!("disconnected {} <-> {} ({} entries)", a, b, removed);
        Ok(removed)
    }

    /// Remove a person and every reference to them from other lists.
    pub fn remove_person(&mut self, name: &str) -> NetworkResult<Person> {
        let slot = *self
            .index
            .get(name)
            .ok_or_else(|| NetworkError::UnknownNode(name.to_string()))?;

        let removed = self.people.remove(slot);
        for person in &mut self.people {
            person.strip(name);
        }
        self.rebuild_index();
        log::debug!("removed person {} ({} connections)", name, removed.degree());
        Ok(removed)
    }

    /// Rebuild the name index from the current slot vector.
    fn rebuild_index(&mut self) {
        self.index.clear();
        for (slot, person) in self.people.iter().enumerate() {
            self.index.insert(person.name.clone(), slot);
        }
    }

    /// Check that every neighbor entry is mirrored on the other side with
    /// the same multiplicity. Returns the first offending pair.
    pub fn find_asymmetry(&self) -> Option<(String, String)> {
        for person in &self.people {
            for other in &person.connections {
                if other == &person.name {
                    continue;
                }
                let forward = person.connections.iter().filter(|c| *c == other).count();
                let backward = self
                    .get_person(other)
                    .map(|p| p.connections.iter().filter(|c| **c == person.name).count())
                    .unwrap_or(0);
                if forward != backward {
                    return Some((person.name.clone(), other.clone()));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop_lists_person_twice() {
        let mut g = SocialGraph::new();
        g.add_person("A").unwrap();
        g.add_connection("A", "A").unwrap();
        assert_eq!(g.neighbors("A").unwrap(), &["A".to_string(), "A".to_string()]);
        assert_eq!(g.connection_count(), 1);

        assert_eq!(g.remove_connection("A", "A").unwrap(), 2);
        assert!(g.neighbors("A").unwrap().is_empty());
    }

    #[test]
    fn unknown_side_is_named() {
        let mut g = SocialGraph::new();
        g.add_person("A").unwrap();
        match g.add_connection("A", "B") {
            Err(NetworkError::UnknownNode(name)) => assert_eq!(name, "B"),
            other => panic!("Expected UnknownNode, got {:?}", other),
        }
        match g.add_connection("X", "A") {
            Err(NetworkError::UnknownNode(name)) => assert_eq!(name, "X"),
            other => panic!("Expected UnknownNode, got {:?}", other),
        }
        assert!(g.neighbors("A").unwrap().is_empty());
    }

    #[test]
    fn index_survives_removal() {
        let mut g = SocialGraph::new();
        for name in ["A", "B", "C", "D"] {
            g.add_person(name).unwrap();
        }
        g.add_connection("C", "D").unwrap();
        g.remove_person("A").unwrap();

        assert_eq!(g.names().collect::<Vec<_>>(), vec!["B", "C", "D"]);
        assert_eq!(g.neighbors("D").unwrap(), &["C".to_string()]);
        assert!(g.get_person("A").is_none());
    }

    #[test]
    fn empty_name_rejected() {
        let mut g = SocialGraph::new();
        assert!(matches!(g.add_person(""), Err(NetworkError::InvalidName)));
        assert_eq!(g.person_count(), 0);
    }
}
