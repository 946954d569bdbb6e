/// Objects a leaf holds before its first subdivision.
pub const MAX_OBJECTS_BEFORE_SUBDIVIDE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub node_capacity: usize,
    pub max_depth: usize,
    /// Smallest width or height a child quadrant may have.
    pub min_size: i32,
}

impl Config {
    /// Clamps `node_capacity` and `min_size` to at least one. A zero
    /// `min_size` would let zero-sized nodes keep splitting into copies of
    /// themselves.
    pub fn sanitized(self) -> Self {
        Config {
            node_capacity: self.node_capacity.max(1),
            min_size: self.min_size.max(1),
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: MAX_OBJECTS_BEFORE_SUBDIVIDE,
            max_depth: 16,
            min_size: 1,
        }
    }
}
