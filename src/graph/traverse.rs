use std::collections::HashMap;

use crate::core::vertex::VertexKey;
use crate::error::{GraphError, Result};
use crate::graph::Graph;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitState {
    Visiting,
    Visited,
}

// One sort invocation's worth of traversal state; absent keys are unvisited.
pub(crate) struct Traversal<'g> {
    state: HashMap<&'g VertexKey, VisitState>,
    finished: Vec<&'g VertexKey>,
}

impl<'g> Traversal<'g> {
    pub(crate) fn new() -> Self {
        Self {
            state: HashMap::new(),
            finished: Vec::new(),
        }
    }

    pub(crate) fn discovered(&self, key: &VertexKey) -> bool {
        self.state.contains_key(key)
    }

    pub(crate) fn visit<T>(&mut self, graph: &'g Graph<T>, key: &'g VertexKey) -> Result<()> {
        self.state.insert(key, VisitState::Visiting);
        for neighbor in graph.neighbors(key.as_str()) {
            match self.state.get(neighbor) {
                // a Visiting neighbor is still on the active path: this edge closes a cycle
                Some(VisitState::Visiting) => {
                    return Err(GraphError::CycleDetected {
                        from: key.clone(),
                        to: neighbor.clone(),
                    });
                }
                Some(VisitState::Visited) => {}
                None => self.visit(graph, neighbor)?,
            }
        }
        self.state.insert(key, VisitState::Visited);
        self.finished.push(key);
        Ok(())
    }

    pub(crate) fn into_finish_order(self) -> Vec<&'g VertexKey> {
        self.finished
    }
}
