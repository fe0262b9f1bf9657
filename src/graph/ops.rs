use std::collections::{HashMap, HashSet};

use crate::core::vertex::{Vertex, VertexKey};
use crate::error::Result;
use crate::graph::traverse::{Traversal, VisitState};
use crate::graph::Graph;

#[derive(Debug)]
pub struct TopologicalOrder<'g, T> {
    entries: Vec<&'g Vertex<T>>,
}

impl<'g, T> TopologicalOrder<'g, T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<&'g VertexKey> {
        self.entries.iter().map(|vertex| &vertex.key).collect()
    }

    pub fn data(&self) -> Vec<&'g T> {
        self.entries.iter().map(|vertex| &vertex.data).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'g Vertex<T>> + '_ {
        self.entries.iter().copied()
    }
}

pub fn topological_order<T>(graph: &Graph<T>) -> Result<TopologicalOrder<'_, T>> {
    let mut traversal = Traversal::new();
    for key in graph.vertices() {
        if traversal.discovered(key) {
            continue;
        }
        traversal.visit(graph, key)?;
    }

    let mut entries = Vec::with_capacity(graph.len());
    for key in traversal.into_finish_order() {
        if let Some(vertex) = graph.vertex(key.as_str()) {
            entries.push(vertex);
        }
    }
    Ok(TopologicalOrder { entries })
}

pub fn dependents_of<T>(graph: &Graph<T>, key: &str) -> Vec<VertexKey> {
    graph
        .vertices()
        .filter(|candidate| {
            graph
                .neighbors(candidate.as_str())
                .iter()
                .any(|dep| dep.as_str() == key)
        })
        .cloned()
        .collect()
}

pub fn transitive_dependencies<T>(graph: &Graph<T>, key: &str) -> Vec<VertexKey> {
    let mut seen = HashSet::new();
    let mut stack: Vec<&VertexKey> = graph.neighbors(key).iter().collect();
    while let Some(current) = stack.pop() {
        if !seen.insert(current) {
            continue;
        }
        for next in graph.neighbors(current.as_str()) {
            stack.push(next);
        }
    }
    let mut out: Vec<VertexKey> = seen.into_iter().cloned().collect();
    out.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    out
}

pub fn transitive_dependents<T>(graph: &Graph<T>, key: &str) -> Vec<VertexKey> {
    let mut reverse: HashMap<&VertexKey, Vec<&VertexKey>> = HashMap::new();
    for from in graph.vertices() {
        for dep in graph.neighbors(from.as_str()) {
            reverse.entry(dep).or_default().push(from);
        }
    }

    let target = match graph.vertex(key) {
        Some(vertex) => &vertex.key,
        None => return Vec::new(),
    };
    let mut seen = HashSet::new();
    let mut stack: Vec<&VertexKey> = reverse.get(target).cloned().unwrap_or_default();
    while let Some(current) = stack.pop() {
        if !seen.insert(current) {
            continue;
        }
        if let Some(next) = reverse.get(current) {
            for dep in next {
                stack.push(*dep);
            }
        }
    }
    let mut out: Vec<VertexKey> = seen.into_iter().cloned().collect();
    out.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    out
}

pub fn find_cycles<T>(graph: &Graph<T>) -> Vec<Vec<VertexKey>> {
    let mut state: HashMap<&VertexKey, VisitState> = HashMap::new();
    let mut stack: Vec<&VertexKey> = Vec::new();
    let mut cycles = Vec::new();

    for key in graph.vertices() {
        if state.contains_key(key) {
            continue;
        }
        collect_cycles(key, graph, &mut state, &mut stack, &mut cycles);
    }

    cycles
}

pub fn is_cyclic<T>(graph: &Graph<T>) -> bool {
    !find_cycles(graph).is_empty()
}

fn collect_cycles<'g, T>(
    key: &'g VertexKey,
    graph: &'g Graph<T>,
    state: &mut HashMap<&'g VertexKey, VisitState>,
    stack: &mut Vec<&'g VertexKey>,
    cycles: &mut Vec<Vec<VertexKey>>,
) {
    if let Some(existing) = state.get(key) {
        if *existing == VisitState::Visiting {
            if let Some(pos) = stack.iter().position(|entry| *entry == key) {
                cycles.push(stack[pos..].iter().map(|entry| (*entry).clone()).collect());
            }
        }
        return;
    }

    state.insert(key, VisitState::Visiting);
    stack.push(key);
    for neighbor in graph.neighbors(key.as_str()) {
        collect_cycles(neighbor, graph, state, stack, cycles);
    }
    stack.pop();
    state.insert(key, VisitState::Visited);
}
