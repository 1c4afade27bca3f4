use std::fmt;
use std::ops::{Add, Div, Mul};
use voronator::delaunator;

#[derive(Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn origin() -> Self {
        Point::new(0.0, 0.0)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let xs = self.x - other.x;
        let ys = self.y - other.y;
        ((xs * xs) + (ys * ys)).sqrt()
    }

    pub fn norm(&self) -> f64 {
        self.distance(&Point::origin())
    }

    /// Mirrors the point between cartesian (y up) and screen (y down) space for a canvas of the
    /// given height. Applying it twice yields the original point.
    pub fn flip(&self, height: f64) -> Self {
        Point::new(self.x, height - self.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Point::new(self.x * scale, self.y * scale)
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Point::new(self.x / divisor, self.y / divisor)
    }
}

impl From<&delaunator::Point> for Point {
    fn from(p: &delaunator::Point) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for delaunator::Point {
    fn from(p: Point) -> Self {
        delaunator::Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_involutive() {
        let p = Point::new(13.0, -42.0);

        assert_eq!(p.flip(100.0), Point::new(13.0, 142.0));
        assert_eq!(p.flip(100.0).flip(100.0), p);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(3.0, 0.0).distance(&Point::new(0.0, 4.0)), 5.0);
        assert_eq!(Point::new(-3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn delaunator_conversions() {
        let p = Point::new(1.5, -2.0);
        let q = delaunator::Point::from(p);

        assert_eq!((q.x, q.y), (1.5, -2.0));
        assert_eq!(Point::from(&q), p);
    }
}
