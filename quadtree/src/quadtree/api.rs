use super::{Config, QuadNode, QuadTree};
use crate::error::{validate_rect_dims, QuadtreeError, QuadtreeResult};
use common::shapes::{Located, Rectangle};

impl<T: Located + Clone> QuadTree<T> {
    pub fn new(bounds: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn new_with_config(bounds: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_rect_dims(&bounds)?;
        Ok(Self {
            root: QuadNode::new(bounds),
            config: config.sanitized(),
        })
    }

    /// Fails with [`QuadtreeError::OutOfBounds`] when the object does not
    /// lie entirely inside the root.
    pub fn insert(&mut self, object: T) -> QuadtreeResult<()> {
        self.root.add_object(object, &self.config)
    }

    /// Inserts in order and stops at the first rejected object. Everything
    /// before it stays inserted.
    pub fn insert_batch<I>(&mut self, objects: I) -> QuadtreeResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        for object in objects {
            self.insert(object)?;
        }
        Ok(())
    }

    /// Subdivides the root ahead of any insertion pressure.
    pub fn divide(&mut self) -> QuadtreeResult<()> {
        self.root.divide(&self.config)
    }

    /// Subdivides the smallest node that contains `rect`.
    pub fn divide_containing(&mut self, rect: &Rectangle) -> QuadtreeResult<()> {
        validate_rect_dims(rect)?;
        let config = self.config;
        let bounds = self.root.bounds;
        let node = self
            .root
            .get_containing_quad_mut(rect)
            .ok_or(QuadtreeError::OutOfBounds { rect: *rect, bounds })?;
        node.divide(&config)
    }

    /// Drops every node and object, keeping the root bounds and config.
    pub fn clear(&mut self) {
        self.root = QuadNode::new(self.root.bounds);
    }
}

impl<T> QuadTree<T> {
    pub fn root(&self) -> &QuadNode<T> {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bounds(&self) -> Rectangle {
        self.root.bounds
    }

    /// Number of stored object handles, counting each copy of an object held
    /// by more than one node.
    pub fn len(&self) -> usize {
        self.root.object_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_containing_quad(&self, rect: &Rectangle) -> QuadtreeResult<&QuadNode<T>> {
        validate_rect_dims(rect)?;
        let bounds = self.root.bounds;
        self.root
            .get_containing_quad(rect)
            .ok_or(QuadtreeError::OutOfBounds { rect: *rect, bounds })
    }

    pub fn get_containing_quad_mut(
        &mut self,
        rect: &Rectangle,
    ) -> QuadtreeResult<&mut QuadNode<T>> {
        validate_rect_dims(rect)?;
        let bounds = self.root.bounds;
        self.root
            .get_containing_quad_mut(rect)
            .ok_or(QuadtreeError::OutOfBounds { rect: *rect, bounds })
    }

    pub fn get_all_rectangles(&self) -> Vec<Rectangle> {
        self.root.get_all_rectangles()
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.root.all_node_bounding_boxes(bounding_boxes);
    }

    pub fn all_objects<'a>(&'a self, objects: &mut Vec<&'a T>) {
        self.root.all_objects(objects);
    }
}
