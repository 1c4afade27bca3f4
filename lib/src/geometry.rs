use crate::error::{Error, Result};
use crate::point::Point;
use log::debug;
use voronator::delaunator;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    pub fn centroid(&self) -> Point {
        centroid(&self.0)
    }

    /// Screen space polygon for a canvas of the given height.
    pub fn to_screen(&self, height: u32) -> Polygon {
        Polygon(self.0.iter().map(|p| p.flip(height as f64)).collect())
    }
}

/// Vertices of a filled shape in screen space.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon(pub Vec<Point>);

impl Polygon {
    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    pub fn centroid(&self) -> Point {
        centroid(&self.0)
    }

    pub fn scale(&self, factor: f64) -> Polygon {
        Polygon(self.0.iter().map(|p| *p * factor).collect())
    }
}

/// Arithmetic mean of the vertices.
pub fn centroid(points: &[Point]) -> Point {
    let sum = points.iter().fold(Point::origin(), |acc, p| acc + *p);
    sum / points.len().max(1) as f64
}

pub trait Triangulator {
    /// Partitions the convex hull of `points` into triangles. Fails with
    /// [`Error::Triangulation`] if no partition exists.
    fn triangulate(&self, points: &[Point]) -> Result<Vec<Triangle>>;
}

/// Delaunay triangulation backed by voronator.
#[derive(Copy, Clone, Debug, Default)]
pub struct Delaunay;

impl Triangulator for Delaunay {
    fn triangulate(&self, points: &[Point]) -> Result<Vec<Triangle>> {
        let failed = || Error::Triangulation {
            points: points.len(),
        };

        if points.len() < 3 {
            return Err(failed());
        }

        let vertices = points
            .iter()
            .filter(|p| !p.x.is_nan() && !p.y.is_nan())
            .map(|p| delaunator::Point::from(*p))
            .collect::<Vec<_>>();

        let triangulation = delaunator::triangulate(&vertices).ok_or_else(failed)?;

        let triangles = triangulation
            .triangles
            .chunks_exact(3)
            .map(|t| {
                Triangle([
                    Point::from(&vertices[t[0]]),
                    Point::from(&vertices[t[1]]),
                    Point::from(&vertices[t[2]]),
                ])
            })
            .collect::<Vec<_>>();

        if triangles.is_empty() {
            return Err(failed());
        }

        debug!(
            "Triangulated {} points into {} triangles",
            vertices.len(),
            triangles.len()
        );

        Ok(triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_is_mean() {
        let t = Triangle([
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(0.0, 3.0),
        ]);

        assert_eq!(t.centroid(), Point::new(2.0, 1.0));
    }

    #[test]
    fn screen_polygon() {
        let t = Triangle([
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(0.0, 3.0),
        ]);
        let polygon = t.to_screen(10);

        assert_eq!(
            polygon.vertices(),
            &[
                Point::new(0.0, 10.0),
                Point::new(6.0, 10.0),
                Point::new(0.0, 7.0)
            ]
        );
        assert_eq!(polygon.centroid(), t.centroid().flip(10.0));
        assert_eq!(polygon.scale(4.0).vertices()[2], Point::new(0.0, 28.0));
    }

    #[test]
    fn square_splits_into_two_triangles() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let triangles = Delaunay.triangulate(&square).unwrap();

        assert_eq!(triangles.len(), 2);

        for t in &triangles {
            assert!(t.vertices().iter().all(|v| square.contains(v)));
        }
    }

    #[test]
    fn collinear_points_fail() {
        let line = (0..5)
            .map(|i| Point::new(i as f64, i as f64))
            .collect::<Vec<_>>();

        assert!(matches!(
            Delaunay.triangulate(&line),
            Err(Error::Triangulation { points: 5 })
        ));
        assert!(matches!(
            Delaunay.triangulate(&line[..2]),
            Err(Error::Triangulation { points: 2 })
        ));
    }
}
