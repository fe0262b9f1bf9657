use std::fmt;

use thiserror::Error;

use crate::core::vertex::VertexKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Dest,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEnd::Source => f.write_str("source"),
            EdgeEnd::Dest => f.write_str("destination"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex '{key}' is already registered")]
    DuplicateVertex { key: VertexKey },
    #[error("edge references unregistered {end} vertex '{key}'")]
    UnregisteredEndpoint { key: VertexKey, end: EdgeEnd },
    #[error("edge from '{from}' to '{to}' already exists")]
    DuplicateEdge { from: VertexKey, to: VertexKey },
    #[error("cycle detected in dependency graph: edge from '{from}' closes back to '{to}'")]
    CycleDetected { from: VertexKey, to: VertexKey },
}

pub type Result<T> = std::result::Result<T, GraphError>;
