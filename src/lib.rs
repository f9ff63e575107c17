//! SocialGraph — an in-memory social network.
//!
//! People are nodes of an undirected graph held as symmetric adjacency lists.
//! The query engine answers mutual-friend, friend-suggestion, profile and
//! shortest-path questions; the `cli` module drives it from a numbered menu.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{GraphStats, MutualResult, PathResult, Profile, QueryEngine, SuggestionResult};
pub use graph::{shortest_path, GraphBuilder, SocialGraph};
pub use types::{
    now_micros, CliConfig, CliOverrides, GraphConfig, NetworkError, NetworkResult, OutputFormat,
    Person,
};
