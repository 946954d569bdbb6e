use common::shapes::Rectangle;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuadtreeError {
    #[error("rectangle width/height must be non-negative (width: {width}, height: {height})")]
    InvalidRectangleDims { width: i32, height: i32 },

    #[error("rectangle {rect:?} extends past the i32 coordinate range")]
    InvalidRectExtent { rect: Rectangle },

    #[error("rectangle {rect:?} is not contained in node bounds {bounds:?}")]
    OutOfBounds { rect: Rectangle, bounds: Rectangle },

    #[error("node {bounds:?} at depth {depth} cannot be subdivided further")]
    DegenerateSubdivision { bounds: Rectangle, depth: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

pub(crate) fn validate_rect_dims(rect: &Rectangle) -> QuadtreeResult<()> {
    if !rect.is_valid() {
        return Err(QuadtreeError::InvalidRectangleDims {
            width: rect.width,
            height: rect.height,
        });
    }
    if rect.checked_far_edges().is_none() {
        return Err(QuadtreeError::InvalidRectExtent { rect: *rect });
    }
    Ok(())
}
