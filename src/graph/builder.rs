use crate::core::vertex::VertexKey;
use crate::error::Result;
use crate::graph::Graph;

#[derive(Debug, Clone)]
pub struct VertexDecl<T> {
    pub key: VertexKey,
    pub data: T,
    pub depends_on: Vec<VertexKey>,
}

impl<T> VertexDecl<T> {
    pub fn new(key: impl Into<VertexKey>, data: T, depends_on: Vec<VertexKey>) -> Self {
        Self {
            key: key.into(),
            data,
            depends_on,
        }
    }
}

// Two passes: every declared vertex is registered before any edge is added.
pub fn build_graph<T>(decls: Vec<VertexDecl<T>>) -> Result<Graph<T>> {
    let mut graph = Graph::new();
    let mut edges: Vec<(VertexKey, VertexKey)> = Vec::new();

    for decl in decls {
        for dep in &decl.depends_on {
            edges.push((decl.key.clone(), dep.clone()));
        }
        graph.register_vertex(decl.key, decl.data)?;
    }

    for (source, dest) in edges {
        graph.add_edge(source.as_str(), dest.as_str())?;
    }

    Ok(graph)
}
