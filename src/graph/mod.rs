//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod social_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use social_graph::SocialGraph;
pub use traversal::shortest_path;
