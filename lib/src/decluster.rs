//! Evens out the density of a random point cloud by dropping the points that sit closest to one
//! of their neighbors.

use crate::point::Point;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Nearest neighbor lookup over a fixed point set.
pub trait NearestNeighbor {
    /// Index of and distance to the point closest to `points[index]`, not counting the point
    /// itself. Among equally close neighbors the one with the lowest index is returned. `None` if
    /// there is no other point.
    fn nearest(&self, index: usize) -> Option<(usize, f64)>;
}

fn closer(candidate: (usize, f64), best: Option<(usize, f64)>) -> bool {
    match best {
        None => true,
        Some((index, distance)) => match candidate.1.total_cmp(&distance) {
            Ordering::Less => true,
            Ordering::Equal => candidate.0 < index,
            Ordering::Greater => false,
        },
    }
}

/// Scans all points for every query.
pub struct BruteForce<'a> {
    points: &'a [Point],
}

impl<'a> BruteForce<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        BruteForce { points }
    }
}

impl NearestNeighbor for BruteForce<'_> {
    fn nearest(&self, index: usize) -> Option<(usize, f64)> {
        let p = &self.points[index];
        let mut best = None;

        for (other, q) in self.points.iter().enumerate() {
            if other == index {
                continue;
            }

            let candidate = (other, p.distance(q));

            if closer(candidate, best) {
                best = Some(candidate);
            }
        }

        best
    }
}

/// Buckets points into square cells and searches rings of cells around the query point.
pub struct GridIndex<'a> {
    points: &'a [Point],
    min: Point,
    cell_size: f64,
    columns: i64,
    rows: i64,
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl<'a> GridIndex<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        let (min, max) = points.iter().fold(
            (
                Point::new(f64::INFINITY, f64::INFINITY),
                Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            ),
            |(min, max), p| {
                (
                    Point::new(min.x.min(p.x), min.y.min(p.y)),
                    Point::new(max.x.max(p.x), max.y.max(p.y)),
                )
            },
        );

        let (width, height) = if points.is_empty() {
            (0.0, 0.0)
        } else {
            (max.x - min.x, max.y - min.y)
        };

        // Aim for roughly one point per cell.
        let cell_size = ((width * height) / points.len().max(1) as f64)
            .sqrt()
            .max(width.max(height) / points.len().max(1) as f64)
            .max(1.0);

        let mut index = GridIndex {
            points,
            min,
            cell_size,
            columns: (width / cell_size) as i64 + 1,
            rows: (height / cell_size) as i64 + 1,
            cells: HashMap::new(),
        };

        for (i, p) in points.iter().enumerate() {
            let cell = index.cell(p);
            index.cells.entry(cell).or_default().push(i);
        }

        index
    }

    fn cell(&self, p: &Point) -> (i64, i64) {
        (
            ((p.x - self.min.x) / self.cell_size) as i64,
            ((p.y - self.min.y) / self.cell_size) as i64,
        )
    }
}

impl NearestNeighbor for GridIndex<'_> {
    fn nearest(&self, index: usize) -> Option<(usize, f64)> {
        let p = &self.points[index];
        let (cx, cy) = self.cell(p);
        let mut best = None;

        for ring in 0..=self.columns.max(self.rows) {
            for dy in -ring..=ring {
                for dx in -ring..=ring {
                    if dx.abs() != ring && dy.abs() != ring {
                        continue;
                    }

                    let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) else {
                        continue;
                    };

                    for &other in bucket {
                        if other == index {
                            continue;
                        }

                        let candidate = (other, p.distance(&self.points[other]));

                        if closer(candidate, best) {
                            best = Some(candidate);
                        }
                    }
                }
            }

            // Points in rings further out are at least `ring * cell_size` away.
            if let Some((_, distance)) = best {
                if distance < ring as f64 * self.cell_size {
                    break;
                }
            }
        }

        best
    }
}

/// Keeps the `target` points with the largest nearest neighbor distance, ordered by ascending
/// distance. Points with equal distance keep their relative input order. If `points` holds no
/// more than `target` points they are returned as they are.
pub fn filter<N: NearestNeighbor>(points: &[Point], target: usize, index: &N) -> Vec<Point> {
    if points.len() <= target {
        return points.to_vec();
    }

    let mut ranked = (0..points.len())
        .filter_map(|i| index.nearest(i).map(|(_, distance)| (distance, i)))
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let excess = points.len() - target;

    ranked
        .into_iter()
        .skip(excess)
        .map(|(_, i)| points[i])
        .collect()
}
