use common::shapes::Rectangle;

/// One quadrant of the tree.
///
/// A node is either a leaf or owns exactly four children, ordered top-left,
/// top-right, bottom-left, bottom-right. Objects stay at a node when they
/// arrived before the first subdivision and nothing pushed them down, or when
/// no single child fully contains them.
#[derive(Debug, Clone)]
pub struct QuadNode<T> {
    pub(super) bounds: Rectangle,
    pub(super) objects: Vec<T>,
    pub(super) children: Option<Box<[QuadNode<T>; 4]>>,
    pub(super) depth: usize,
}

impl<T> QuadNode<T> {
    /// Creates an empty leaf that acts as a root.
    pub fn new(bounds: Rectangle) -> Self {
        Self::with_depth(bounds, 0)
    }

    pub(super) fn with_depth(bounds: Rectangle, depth: usize) -> Self {
        Self {
            bounds,
            objects: Vec::new(),
            children: None,
            depth,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Objects stored directly at this node, in insertion order.
    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    pub fn children(&self) -> Option<&[QuadNode<T>; 4]> {
        self.children.as_deref()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Bounds of every node in this subtree, pre-order.
    pub fn get_all_rectangles(&self) -> Vec<Rectangle> {
        let mut rects = Vec::new();
        self.all_node_bounding_boxes(&mut rects);
        rects
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.push(self.bounds);
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.all_node_bounding_boxes(bounding_boxes);
            }
        }
    }

    /// Every stored object in this subtree, pre-order. An object that sits on
    /// a split line may show up once per child holding it.
    pub fn all_objects<'a>(&'a self, objects: &mut Vec<&'a T>) {
        objects.extend(self.objects.iter());
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.all_objects(objects);
            }
        }
    }

    pub fn object_count(&self) -> usize {
        let below: usize = self
            .children
            .as_deref()
            .map_or(0, |children| children.iter().map(QuadNode::object_count).sum());
        self.objects.len() + below
    }

    pub fn node_count(&self) -> usize {
        let below: usize = self
            .children
            .as_deref()
            .map_or(0, |children| children.iter().map(QuadNode::node_count).sum());
        1 + below
    }

    /// Depth of the deepest node in this subtree.
    pub fn max_depth_reached(&self) -> usize {
        self.children.as_deref().map_or(self.depth, |children| {
            children
                .iter()
                .map(QuadNode::max_depth_reached)
                .max()
                .unwrap_or(self.depth)
        })
    }
}
