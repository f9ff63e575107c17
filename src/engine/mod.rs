//! High-level operations — the query engine.

pub mod query;

pub use query::{GraphStats, MutualResult, PathResult, Profile, QueryEngine, SuggestionResult};
