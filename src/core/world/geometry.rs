//=========================================================================
// Geometry
//=========================================================================
//
// Integer axis-aligned rectangles in screen space (pixels, top-left
// origin, y grows downward).
//
// Intersection is strict: rectangles that only share an edge do not
// intersect. A body resting exactly on a platform top therefore does not
// collide with it until gravity pushes it at least one pixel further.
//
//=========================================================================

//=== Rect ================================================================

/// Axis-aligned box with integer position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    //--- Construction -----------------------------------------------------

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    //--- Edges ------------------------------------------------------------

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn mid_bottom(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.bottom())
    }

    //--- Edge Assignment --------------------------------------------------
    //
    // Moves the rect so the named edge lands on `value`; size is kept.
    //

    pub fn set_left(&mut self, value: i32) {
        self.x = value;
    }

    pub fn set_right(&mut self, value: i32) {
        self.x = value - self.w;
    }

    pub fn set_top(&mut self, value: i32) {
        self.y = value;
    }

    pub fn set_bottom(&mut self, value: i32) {
        self.y = value - self.h;
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` when both rectangles share interior area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns `true` when the point lies inside (right/bottom exclusive).
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x as f32
            && px < self.right() as f32
            && py >= self.y as f32
            && py < self.bottom() as f32
    }

    /// Returns `true` when width and height are strictly positive.
    pub fn has_area(&self) -> bool {
        self.w > 0 && self.h > 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn edge_setters_preserve_size() {
        let mut r = Rect::new(0, 0, 40, 54);
        r.set_bottom(500);
        assert_eq!(r.y, 446);
        r.set_right(100);
        assert_eq!(r.x, 60);
        assert_eq!((r.w, r.h), (40, 54));
    }

    #[test]
    fn anchors() {
        let r = Rect::new(10, 20, 40, 54);
        assert_eq!(r.center(), (30, 47));
        assert_eq!(r.mid_bottom(), (30, 74));
    }

    #[test]
    fn contains_point_is_right_bottom_exclusive() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains_point(0.0, 0.0));
        assert!(r.contains_point(9.5, 9.5));
        assert!(!r.contains_point(10.0, 5.0));
        assert!(!r.contains_point(5.0, 10.0));
    }

    #[test]
    fn zero_sized_rect_has_no_area() {
        assert!(!Rect::new(0, 0, 0, 10).has_area());
        assert!(Rect::new(0, 0, 1, 1).has_area());
    }
}
