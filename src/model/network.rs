//! Network classification.

use serde::{Deserialize, Serialize};

/// The kind of network a census was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    Directed,
    Undirected,
    Bipartite,
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkType::Directed => write!(f, "directed"),
            NetworkType::Undirected => write!(f, "undirected"),
            NetworkType::Bipartite => write!(f, "bipartite"),
        }
    }
}
