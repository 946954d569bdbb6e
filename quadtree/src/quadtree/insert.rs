use super::{Config, QuadNode};
use crate::error::{validate_rect_dims, QuadtreeError, QuadtreeResult};
use common::shapes::{Located, Rectangle};
use log::{trace, warn};

impl<T: Located + Clone> QuadNode<T> {
    /// Stores `object` at the most specific node of this subtree that fully
    /// contains it.
    ///
    /// The object must fit inside this node's bounds. Below this call site
    /// nothing is re-checked and nothing is ever dropped: objects straddling
    /// a split line stay at the deepest node that holds them whole.
    pub fn add_object(&mut self, object: T, config: &Config) -> QuadtreeResult<()> {
        let rect = object.bounding_box();
        validate_rect_dims(&rect)?;
        if !self.bounds.contains(&rect) {
            return Err(QuadtreeError::OutOfBounds {
                rect,
                bounds: self.bounds,
            });
        }
        self.insert_unchecked(object, rect, config);
        Ok(())
    }

    pub(super) fn insert_unchecked(&mut self, object: T, rect: Rectangle, config: &Config) {
        if self.is_leaf() {
            if self.objects.len() < config.node_capacity {
                self.objects.push(object);
                return;
            }
            if !self.can_divide(config) {
                if self.objects.len() == config.node_capacity {
                    warn!(
                        "node {:?} at depth {} is full and cannot subdivide, storing past capacity",
                        self.bounds, self.depth
                    );
                }
                self.objects.push(object);
                return;
            }
            self.split(config);
        }

        if !self.insert_into_children(&object, rect, config) {
            trace!(
                "object {:?} straddles children of {:?}, kept at depth {}",
                rect,
                self.bounds,
                self.depth
            );
            self.objects.push(object);
        }
    }

    /// Offers `object` to every child that fully contains it. Containment is
    /// not exclusive: a zero-extent object on a split line goes to each side.
    fn insert_into_children(
        &mut self,
        object: &T,
        rect: Rectangle,
        config: &Config,
    ) -> bool {
        let Some(children) = self.children.as_deref_mut() else {
            return false;
        };
        let mut placed = false;
        for child in children.iter_mut() {
            if child.bounds.contains(&rect) {
                child.insert_unchecked(object.clone(), rect, config);
                placed = true;
            }
        }
        placed
    }
}
