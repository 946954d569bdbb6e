mod api;
mod config;
mod divide;
mod insert;
mod node;
mod query;

pub use config::{Config, MAX_OBJECTS_BEFORE_SUBDIVIDE};
pub use node::QuadNode;

/// Owns the root node and the configuration every node below it is built
/// with. Root-level calls are bounds-checked; recursion below the root is not.
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    root: QuadNode<T>,
    config: Config,
}
