use crate::decluster::{self, GridIndex};
use crate::point::Point;
use log::debug;
use rand::Rng;

/// Number of candidates generated per requested point when declustering.
const OVERSAMPLING: usize = 2;

/// Random point cloud over a canvas, extended by `scale` on all sides.
#[derive(Clone, Debug)]
pub struct PointSampler {
    pub num_points: usize,
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub decluster: bool,
}

fn axis_range(extent: u32, scale: f64) -> (i64, i64) {
    let offset = ((1.0 - scale) / 2.0 * extent as f64) as i64;
    let span = ((extent as f64 * scale) as i64).max(1);
    (offset, span)
}

impl PointSampler {
    pub fn num_candidates(&self) -> usize {
        if self.decluster {
            OVERSAMPLING * self.num_points
        } else {
            self.num_points
        }
    }

    /// Uniformly distributed integer candidates, before declustering.
    pub fn candidates<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        let (x_offset, x_span) = axis_range(self.width, self.scale);
        let (y_offset, y_span) = axis_range(self.height, self.scale);

        (0..self.num_candidates())
            .map(|_| {
                let x = x_offset + rng.gen_range(0..x_span);
                let y = y_offset + rng.gen_range(0..y_span);
                Point::new(x as f64, y as f64)
            })
            .collect()
    }

    /// Four points beyond the corners of the canvas which make the triangulation cover its edges.
    pub fn sentinels(&self) -> [Point; 4] {
        let w = self.width as f64;
        let h = self.height as f64;

        [
            Point::new(-300.0, -10.0),
            Point::new(w + 10.0, -300.0),
            Point::new(w + 300.0, h + 10.0),
            Point::new(-100.0, h + 300.0),
        ]
    }

    /// Raw candidates followed by the sentinels.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        let mut points = self.candidates(rng);
        points.extend(self.sentinels());
        points
    }

    /// Candidates, declustered if enabled, followed by the sentinels. Always yields exactly
    /// `num_points + 4` points.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        let mut points = self.candidates(rng);

        if self.decluster {
            let index = GridIndex::new(&points);
            points = decluster::filter(&points, self.num_points, &index);
            debug!("Declustered to {} points", points.len());
        }

        points.extend(self.sentinels());
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn sampler(decluster: bool) -> PointSampler {
        PointSampler {
            num_points: 50,
            width: 200,
            height: 100,
            scale: 1.25,
            decluster,
        }
    }

    fn inside_canvas(p: &Point, sampler: &PointSampler) -> bool {
        p.x >= 0.0 && p.x < sampler.width as f64 && p.y >= 0.0 && p.y < sampler.height as f64
    }

    #[test]
    fn generate_counts() {
        let mut rng = Pcg64::seed_from_u64(1);

        assert_eq!(sampler(false).generate(&mut rng).len(), 54);
        assert_eq!(sampler(true).generate(&mut rng).len(), 104);
        assert_eq!(sampler(false).sample(&mut rng).len(), 54);
        assert_eq!(sampler(true).sample(&mut rng).len(), 54);
    }

    #[test]
    fn sentinels_are_outside_and_last() {
        let mut rng = Pcg64::seed_from_u64(2);

        for decluster in [false, true] {
            let sampler = sampler(decluster);
            let points = sampler.sample(&mut rng);
            let tail = &points[points.len() - 4..];

            assert_eq!(tail, &sampler.sentinels()[..]);
            assert!(tail.iter().all(|p| !inside_canvas(p, &sampler)));
        }
    }

    #[test]
    fn candidates_stay_in_scaled_region() {
        let mut rng = Pcg64::seed_from_u64(3);
        let sampler = sampler(true);

        // (1 - 1.25) / 2 * 200 = -25, 200 * 1.25 = 250
        for p in sampler.candidates(&mut rng) {
            assert!(p.x >= -25.0 && p.x < 225.0, "{:?}", p);
            assert!(p.y >= -12.0 && p.y < 113.0, "{:?}", p);
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y.fract(), 0.0);
        }
    }

    #[test]
    fn same_seed_same_points() {
        let a = sampler(true).sample(&mut Pcg64::seed_from_u64(4));
        let b = sampler(true).sample(&mut Pcg64::seed_from_u64(4));
        let c = sampler(true).sample(&mut Pcg64::seed_from_u64(5));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
