use rand::Rng;
use std::rc::Rc;
use std::sync::Arc;

/// Anything the tree can index. Only the axis-aligned bounding rectangle is
/// ever looked at; the tree never mutates it.
pub trait Located {
    fn bounding_box(&self) -> Rectangle;
}

/// Axis-aligned integer rectangle anchored at its top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Right and bottom edges, or `None` when either overflows `i32`.
    pub fn checked_far_edges(&self) -> Option<(i32, i32)> {
        Some((
            self.x.checked_add(self.width)?,
            self.y.checked_add(self.height)?,
        ))
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Width and height are both non-negative.
    pub fn is_valid(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    // Edges are inclusive, so a rectangle contains itself.
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.left() <= other.left()
            && other.right() <= self.right()
            && self.top() <= other.top()
            && other.bottom() <= self.bottom()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rectangle::new(left, top, right - left, bottom - top))
    }

    /// Splits into top-left, top-right, bottom-left and bottom-right quadrants
    /// using floor division. On odd dimensions the right column and bottom
    /// row of width/height one are not covered by any quadrant.
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let sub_width = self.width / 2;
        let sub_height = self.height / 2;
        let mid_x = self.x + sub_width;
        let mid_y = self.y + sub_height;
        [
            Rectangle::new(self.x, self.y, sub_width, sub_height),
            Rectangle::new(mid_x, self.y, sub_width, sub_height),
            Rectangle::new(self.x, mid_y, sub_width, sub_height),
            Rectangle::new(mid_x, mid_y, sub_width, sub_height),
        ]
    }

    /// Picks a `width` x `height` rectangle that lies inside `self`. When it
    /// cannot fit, the result is pinned to the top-left corner.
    pub fn random_inside<R: Rng>(&self, width: i32, height: i32, rng: &mut R) -> Rectangle {
        Rectangle::new(
            self._safe_randi32(rng, self.left(), self.right() - width),
            self._safe_randi32(rng, self.top(), self.bottom() - height),
            width,
            height,
        )
    }

    fn _safe_randi32<R: Rng>(&self, rng: &mut R, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Located for Rectangle {
    fn bounding_box(&self) -> Rectangle {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn bounding_box(&self) -> Rectangle {
        (**self).bounding_box()
    }
}

impl<T: Located + ?Sized> Located for Box<T> {
    fn bounding_box(&self) -> Rectangle {
        (**self).bounding_box()
    }
}

impl<T: Located + ?Sized> Located for Rc<T> {
    fn bounding_box(&self) -> Rectangle {
        (**self).bounding_box()
    }
}

impl<T: Located + ?Sized> Located for Arc<T> {
    fn bounding_box(&self) -> Rectangle {
        (**self).bounding_box()
    }
}
