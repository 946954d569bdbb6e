use super::{Config, QuadNode};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Located;
use log::debug;
use smallvec::SmallVec;

impl<T: Located + Clone> QuadNode<T> {
    /// Splits this leaf into four quadrants and pushes down every held object
    /// that fits entirely inside a child.
    ///
    /// Calling this on a node that is already subdivided does nothing. A node
    /// that is at `max_depth`, or whose quadrants would be smaller than
    /// `min_size`, is left untouched and reported as degenerate.
    pub fn divide(&mut self, config: &Config) -> QuadtreeResult<()> {
        if !self.is_leaf() {
            return Ok(());
        }
        if !self.can_divide(config) {
            return Err(QuadtreeError::DegenerateSubdivision {
                bounds: self.bounds,
                depth: self.depth,
            });
        }
        self.split(config);
        Ok(())
    }

    pub(super) fn can_divide(&self, config: &Config) -> bool {
        let min_size = config.min_size.max(1);
        self.depth < config.max_depth
            && self.bounds.checked_far_edges().is_some()
            && self.bounds.width / 2 >= min_size
            && self.bounds.height / 2 >= min_size
    }

    pub(super) fn split(&mut self, config: &Config) {
        debug_assert!(self.is_leaf());
        let depth = self.depth + 1;
        let [top_left, top_right, bottom_left, bottom_right] = self.bounds.quadrants();
        self.children = Some(Box::new([
            QuadNode::with_depth(top_left, depth),
            QuadNode::with_depth(top_right, depth),
            QuadNode::with_depth(bottom_left, depth),
            QuadNode::with_depth(bottom_right, depth),
        ]));
        debug!(
            "subdivided node {:?} at depth {} holding {} objects",
            self.bounds,
            self.depth,
            self.objects.len()
        );
        self.redistribute(config);
    }

    // Removal waits until every object has been offered to every child.
    fn redistribute(&mut self, config: &Config) {
        let Some(children) = self.children.as_deref_mut() else {
            return;
        };
        let mut moved: SmallVec<[usize; 8]> = SmallVec::new();
        for (index, object) in self.objects.iter().enumerate() {
            let rect = object.bounding_box();
            let mut placed = false;
            for child in children.iter_mut() {
                if child.bounds.contains(&rect) {
                    child.insert_unchecked(object.clone(), rect, config);
                    placed = true;
                }
            }
            if placed {
                moved.push(index);
            }
        }
        for index in moved.into_iter().rev() {
            self.objects.remove(index);
        }
    }
}
