use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D point. The Y axis points up, as in the blackboard coordinate
/// convention the lesson scripts are written in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Linear interpolation between two points.
    pub fn lerp(&self, other: &Point2D, t: f64) -> Point2D {
        Point2D {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Midpoint between two points.
    pub fn midpoint(&self, other: &Point2D) -> Point2D {
        self.lerp(other, 0.5)
    }

    // --- Direction constants ---
    //
    // Unit vectors used for literal coordinate arithmetic in scene scripts
    // (e.g. `corner + UP * side`). Diagonals are the sum of their axes.

    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };
    pub const UP: Point2D = Point2D { x: 0.0, y: 1.0 };
    pub const DOWN: Point2D = Point2D { x: 0.0, y: -1.0 };
    pub const LEFT: Point2D = Point2D { x: -1.0, y: 0.0 };
    pub const RIGHT: Point2D = Point2D { x: 1.0, y: 0.0 };
    pub const UL: Point2D = Point2D { x: -1.0, y: 1.0 };
    pub const UR: Point2D = Point2D { x: 1.0, y: 1.0 };
    pub const DL: Point2D = Point2D { x: -1.0, y: -1.0 };
    pub const DR: Point2D = Point2D { x: 1.0, y: -1.0 };
}

impl Default for Point2D {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;
    fn mul(self, rhs: f64) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point2D {
    type Output = Point2D;
    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f64,
    pub height: f64,
}

impl Size2D {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area of the size (width × height).
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One of the four corners of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    BottomLeft,
    BottomRight,
    TopRight,
    TopLeft,
}

/// An axis-aligned rectangle given by its center and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2D {
    pub center: Point2D,
    pub size: Size2D,
}

impl Rect2D {
    pub fn new(center: Point2D, size: Size2D) -> Self {
        Self { center, size }
    }

    /// Get one of the four corner points.
    pub fn corner(&self, corner: Corner) -> Point2D {
        let hw = self.size.width / 2.0;
        let hh = self.size.height / 2.0;
        match corner {
            Corner::BottomLeft => Point2D::new(self.center.x - hw, self.center.y - hh),
            Corner::BottomRight => Point2D::new(self.center.x + hw, self.center.y - hh),
            Corner::TopRight => Point2D::new(self.center.x + hw, self.center.y + hh),
            Corner::TopLeft => Point2D::new(self.center.x - hw, self.center.y + hh),
        }
    }

    /// Midpoint of the edge in the given axis direction
    /// (UP = top edge center, LEFT = left edge center, ...).
    pub fn edge_midpoint(&self, direction: Point2D) -> Point2D {
        Point2D::new(
            self.center.x + direction.x * self.size.width / 2.0,
            self.center.y + direction.y * self.size.height / 2.0,
        )
    }

    /// Whether a point lies inside the rectangle (inclusive).
    pub fn contains(&self, p: Point2D) -> bool {
        let hw = self.size.width / 2.0;
        let hh = self.size.height / 2.0;
        (p.x - self.center.x).abs() <= hw && (p.y - self.center.y).abs() <= hh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_lerp() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(10.0, 20.0);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.x - 5.0).abs() < 0.001);
        assert!((mid.y - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_point_arithmetic() {
        let p = Point2D::ORIGIN + Point2D::RIGHT * 2.0 + Point2D::UP * 1.5;
        assert!((p.x - 2.0).abs() < 0.001);
        assert!((p.y - 1.5).abs() < 0.001);
        let q = p - Point2D::RIGHT * 2.0;
        assert!((q.x).abs() < 0.001);
    }

    #[test]
    fn test_diagonal_constants() {
        assert_eq!(Point2D::UL, Point2D::UP + Point2D::LEFT);
        assert_eq!(Point2D::DR, Point2D::DOWN + Point2D::RIGHT);
    }

    #[test]
    fn test_size_area() {
        let s = Size2D::new(3.0, 0.5);
        assert!((s.area() - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_rect_corners() {
        let r = Rect2D::new(Point2D::zero(), Size2D::new(2.0, 4.0));
        assert_eq!(r.corner(Corner::BottomLeft), Point2D::new(-1.0, -2.0));
        assert_eq!(r.corner(Corner::TopRight), Point2D::new(1.0, 2.0));
    }

    #[test]
    fn test_rect_edge_midpoint() {
        let r = Rect2D::new(Point2D::zero(), Size2D::new(2.0, 4.0));
        assert_eq!(r.edge_midpoint(Point2D::UP), Point2D::new(0.0, 2.0));
        assert_eq!(r.edge_midpoint(Point2D::LEFT), Point2D::new(-1.0, 0.0));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect2D::new(Point2D::new(1.0, 1.0), Size2D::new(2.0, 2.0));
        assert!(r.contains(Point2D::new(1.5, 0.5)));
        assert!(r.contains(Point2D::new(2.0, 2.0)));
        assert!(!r.contains(Point2D::new(2.1, 1.0)));
    }
}
