use std::collections::HashMap;

use crate::core::vertex::{Vertex, VertexKey};
use crate::error::{EdgeEnd, GraphError, Result};

pub mod builder;
pub mod ops;
pub(crate) mod traverse;

#[derive(Debug)]
pub struct Graph<T> {
    vertices: HashMap<VertexKey, Vertex<T>>,
    // registration order; all whole-graph iteration goes through this
    registered: Vec<VertexKey>,
    adjacency: HashMap<VertexKey, Vec<VertexKey>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            registered: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    pub fn register_vertex(&mut self, key: impl Into<VertexKey>, data: T) -> Result<()> {
        let key = key.into();
        if self.vertices.contains_key(&key) {
            return Err(GraphError::DuplicateVertex { key });
        }
        self.registered.push(key.clone());
        self.adjacency.insert(key.clone(), Vec::new());
        self.vertices.insert(key.clone(), Vertex::new(key, data));
        Ok(())
    }

    pub fn add_edge(&mut self, source: &str, dest: &str) -> Result<()> {
        if !self.vertices.contains_key(source) {
            return Err(GraphError::UnregisteredEndpoint {
                key: VertexKey::new(source),
                end: EdgeEnd::Source,
            });
        }
        let dest_key = match self.vertices.get(dest) {
            Some(vertex) => vertex.key.clone(),
            None => {
                return Err(GraphError::UnregisteredEndpoint {
                    key: VertexKey::new(dest),
                    end: EdgeEnd::Dest,
                });
            }
        };
        let neighbors = match self.adjacency.get_mut(source) {
            Some(neighbors) => neighbors,
            None => {
                return Err(GraphError::UnregisteredEndpoint {
                    key: VertexKey::new(source),
                    end: EdgeEnd::Source,
                });
            }
        };
        if neighbors.iter().any(|key| key.as_str() == dest) {
            return Err(GraphError::DuplicateEdge {
                from: VertexKey::new(source),
                to: dest_key,
            });
        }
        neighbors.push(dest_key);
        Ok(())
    }

    pub fn vertex(&self, key: &str) -> Option<&Vertex<T>> {
        self.vertices.get(key)
    }

    pub fn data(&self, key: &str) -> Option<&T> {
        self.vertices.get(key).map(|vertex| &vertex.data)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &VertexKey> {
        self.registered.iter()
    }

    pub fn neighbors(&self, key: &str) -> &[VertexKey] {
        self.adjacency
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
