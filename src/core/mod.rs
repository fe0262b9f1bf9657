pub mod vertex;

pub use vertex::{Vertex, VertexKey};
