use super::QuadNode;
use common::shapes::Rectangle;

impl<T> QuadNode<T> {
    /// Smallest node of this subtree whose bounds fully contain `rect`, or
    /// `None` when this node itself does not.
    ///
    /// Every child is checked; when more than one contains `rect` (possible
    /// only for zero-extent rectangles on a split line) the last one wins.
    pub fn get_containing_quad(&self, rect: &Rectangle) -> Option<&QuadNode<T>> {
        if !self.bounds.contains(rect) {
            return None;
        }
        let mut candidate = self;
        if let Some(children) = self.children.as_deref() {
            for child in children {
                if child.bounds.contains(rect) {
                    if let Some(found) = child.get_containing_quad(rect) {
                        candidate = found;
                    }
                }
            }
        }
        Some(candidate)
    }

    /// Mutable form of [`QuadNode::get_containing_quad`], e.g. to pre-divide
    /// the node that covers a region before filling it.
    pub fn get_containing_quad_mut(&mut self, rect: &Rectangle) -> Option<&mut QuadNode<T>> {
        if !self.bounds.contains(rect) {
            return None;
        }
        let last = self
            .children
            .as_deref()
            .and_then(|children| children.iter().rposition(|child| child.bounds.contains(rect)));
        let Some(index) = last else {
            return Some(self);
        };
        self.children
            .as_deref_mut()
            .and_then(|children| children[index].get_containing_quad_mut(rect))
    }
}
