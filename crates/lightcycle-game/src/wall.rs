use serde::{Deserialize, Serialize};

use crate::{Color, Point};

/// Half the drawn size of a cycle. A point within this distance of a wall's
/// axis (and inside its span) touches the wall.
pub const COLLISION_TOLERANCE: i32 = 5;

/// Handle to a wall owned by an [`Arena`](crate::arena::Arena).
///
/// Ids come from a per-arena counter and are never reused, so a handle to a
/// removed temporary wall can never alias a newer wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An axis-aligned wall segment.
///
/// `span` runs along the free axis (x for horizontal, y for vertical) and is
/// always stored low-to-high. `fixed` is the coordinate on the other axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    id: WallId,
    orientation: Orientation,
    span: (i32, i32),
    fixed: i32,
    color: Color,
}

impl Wall {
    pub fn new(
        id: WallId,
        orientation: Orientation,
        span: (i32, i32),
        fixed: i32,
        color: Color,
    ) -> Self {
        let (a, b) = span;
        Self {
            id,
            orientation,
            span: (a.min(b), a.max(b)),
            fixed,
            color,
        }
    }

    /// Horizontal wall from `x1` to `x2` at height `y`.
    pub fn horizontal(id: WallId, x1: i32, x2: i32, y: i32, color: Color) -> Self {
        Self::new(id, Orientation::Horizontal, (x1, x2), y, color)
    }

    /// Vertical wall at `x` from `y1` to `y2`.
    pub fn vertical(id: WallId, x: i32, y1: i32, y2: i32, color: Color) -> Self {
        Self::new(id, Orientation::Vertical, (y1, y2), x, color)
    }

    /// Trail segment from a turn anchor to the cycle's current position.
    ///
    /// The segment is horizontal when both points share a y coordinate,
    /// otherwise vertical. Returns `None` when the points coincide.
    pub fn between(id: WallId, anchor: Point, position: Point, color: Color) -> Option<Self> {
        if anchor == position {
            return None;
        }
        let wall = if anchor.y == position.y {
            Self::horizontal(id, anchor.x, position.x, position.y, color)
        } else {
            Self::vertical(id, anchor.x, anchor.y, position.y, color)
        };
        Some(wall)
    }

    pub fn id(&self) -> WallId {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn span(&self) -> (i32, i32) {
        self.span
    }

    pub fn fixed(&self) -> i32 {
        self.fixed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Both ends of the segment in canvas coordinates, low end first.
    pub fn endpoints(&self) -> (Point, Point) {
        let (lo, hi) = self.span;
        match self.orientation {
            Orientation::Horizontal => (Point::new(lo, self.fixed), Point::new(hi, self.fixed)),
            Orientation::Vertical => (Point::new(self.fixed, lo), Point::new(self.fixed, hi)),
        }
    }

    /// Whether `point` touches this wall.
    pub fn check_collision(&self, point: Point) -> bool {
        let (along, across) = match self.orientation {
            Orientation::Horizontal => (point.x, point.y),
            Orientation::Vertical => (point.y, point.x),
        };
        let (lo, hi) = self.span;
        (lo..=hi).contains(&along)
            && (self.fixed - COLLISION_TOLERANCE..=self.fixed + COLLISION_TOLERANCE)
                .contains(&across)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: WallId = WallId(7);

    #[test]
    fn horizontal_collision_inside_tolerance() {
        let wall = Wall::horizontal(ID, 100, 150, 350, Color::Blue);
        assert!(wall.check_collision(Point::new(100, 350)));
        assert!(wall.check_collision(Point::new(150, 355)));
        assert!(wall.check_collision(Point::new(125, 345)));
    }

    #[test]
    fn horizontal_collision_outside_tolerance() {
        let wall = Wall::horizontal(ID, 100, 150, 350, Color::Blue);
        assert!(!wall.check_collision(Point::new(125, 356)));
        assert!(!wall.check_collision(Point::new(125, 344)));
        assert!(!wall.check_collision(Point::new(99, 350)));
        assert!(!wall.check_collision(Point::new(151, 350)));
    }

    #[test]
    fn vertical_collision_swaps_axes() {
        let wall = Wall::vertical(ID, 0, 0, 720, Color::Black);
        assert!(wall.check_collision(Point::new(5, 360)));
        assert!(wall.check_collision(Point::new(-5, 0)));
        assert!(!wall.check_collision(Point::new(6, 360)));
        assert!(!wall.check_collision(Point::new(0, 721)));
    }

    #[test]
    fn span_is_normalized_low_to_high() {
        let wall = Wall::vertical(ID, 40, 300, 200, Color::Red);
        assert_eq!(wall.span(), (200, 300));
        assert!(wall.check_collision(Point::new(40, 250)));

        let wall = Wall::horizontal(ID, 90, 10, 5, Color::Red);
        assert_eq!(wall.span(), (10, 90));
    }

    #[test]
    fn between_infers_horizontal_from_shared_y() {
        let wall = Wall::between(ID, Point::new(100, 350), Point::new(150, 350), Color::Blue)
            .expect("segment has length");
        assert_eq!(wall.orientation(), Orientation::Horizontal);
        assert_eq!(wall.span(), (100, 150));
        assert_eq!(wall.fixed(), 350);
    }

    #[test]
    fn between_infers_vertical_and_normalizes_upward_travel() {
        // Cycle moved north: current y is above the anchor.
        let wall = Wall::between(ID, Point::new(150, 350), Point::new(150, 300), Color::Blue)
            .expect("segment has length");
        assert_eq!(wall.orientation(), Orientation::Vertical);
        assert_eq!(wall.span(), (300, 350));
        assert_eq!(wall.fixed(), 150);
        assert!(wall.check_collision(Point::new(150, 320)));
    }

    #[test]
    fn between_rejects_zero_length() {
        let p = Point::new(100, 350);
        assert!(Wall::between(ID, p, p, Color::Blue).is_none());
    }

    #[test]
    fn endpoints_follow_orientation() {
        let h = Wall::horizontal(ID, 0, 1280, 707, Color::Black);
        assert_eq!(h.endpoints(), (Point::new(0, 707), Point::new(1280, 707)));
        let v = Wall::vertical(ID, 1280, 0, 720, Color::Black);
        assert_eq!(v.endpoints(), (Point::new(1280, 0), Point::new(1280, 720)));
    }
}
