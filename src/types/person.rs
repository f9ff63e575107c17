//! The person record stored in each graph slot.

use serde::Serialize;

use super::now_micros;

/// A named participant in the network together with its neighbor list.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    /// Unique name.
    pub name: String,
    /// Neighbor names in insertion order. May hold duplicates and the
    /// person's own name (self-loop).
    pub connections: Vec<String>,
    /// When this person was added (Unix epoch microseconds).
    pub added_at: u64,
}

impl Person {
    /// Create a person with no connections, stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connections: Vec::new(),
            added_at: now_micros(),
        }
    }

    /// Number of entries in the neighbor list.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// Whether `other` appears at least once in the neighbor list.
    pub fn is_connected_to(&self, other: &str) -> bool {
        self.connections.iter().any(|c| c == other)
    }

    /// Remove every occurrence of `other`, returning how many were removed.
    pub(crate) fn strip(&mut self, other: &str) -> usize {
        let before = self.connections.len();
        self.connections.retain(|c| c != other);
        before - self.connections.len()
    }
}
