use cgmath::Vector2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with its origin at the top-left corner.
///
/// Point-like entities use a zero width and height.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(position: Vector2<f32>, width: f32, height: f32) -> Self {
        Rect::new(position.x, position.y, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn translated(&self, delta: Vector2<f32>) -> Self {
        Rect::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }
}

/// Overlap test with strict inequalities on every edge: rectangles that only touch do not
/// intersect.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.right() > b.left() && a.left() < b.right() && a.bottom() > b.top() && a.top() < b.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right_neighbour = Rect::new(10.0, 0.0, 10.0, 10.0);
        let lower_neighbour = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!intersects(&a, &right_neighbour));
        assert!(!intersects(&a, &lower_neighbour));
    }

    #[test]
    fn contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(intersects(&outer, &inner));
    }

    #[test]
    fn translated_keeps_size() {
        let moved = Rect::new(1.0, 2.0, 3.0, 4.0).translated(Vector2::new(-1.0, 5.0));
        assert_eq!(moved, Rect::new(0.0, 7.0, 3.0, 4.0));
    }

    fn rect() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a in rect(), b in rect()) {
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn zero_sized_rect_never_intersects_itself(x in -500.0f32..500.0, y in -500.0f32..500.0) {
            let point = Rect::new(x, y, 0.0, 0.0);
            prop_assert!(!intersects(&point, &point));
        }
    }
}
