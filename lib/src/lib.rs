pub mod color;
pub mod config;
pub mod decluster;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod paint;
pub mod point;
pub mod raster;
pub mod sample;

pub use config::Config;
pub use error::{ConfigError, Error, Result};

use geometry::{Delaunay, Polygon, Triangulator};
use image::RgbImage;
use log::{debug, info};
use rand::Rng;
use raster::Rasterizer;
use sample::PointSampler;

/// Renders a low-poly image using Delaunay triangulation.
pub fn render<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<RgbImage> {
    render_with(config, &Delaunay, rng)
}

pub fn render_with<T, R>(config: &Config, triangulator: &T, rng: &mut R) -> Result<RgbImage>
where
    T: Triangulator + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;

    let (width, height) = config.canvas_size();

    let sampler = PointSampler {
        num_points: config.num_points,
        width,
        height,
        scale: config.scale,
        decluster: config.decluster,
    };

    info!("Sample points");
    let points = sampler.sample(rng);

    info!("Triangulate {} points", points.len());
    let triangles = triangulator.triangulate(&points)?;

    info!("Color {} triangles", triangles.len());
    let mut colors = config.source.colors(&triangles, width, height);

    if let Some(amount) = config.darken {
        debug!("Darken by up to {}", amount);
        paint::darken_all(&mut colors, amount, rng);
    }

    let polygons = triangles
        .iter()
        .map(|t| t.to_screen(height))
        .collect::<Vec<Polygon>>();

    info!("Draw {}x{}", width, height);
    let rasterizer = Rasterizer {
        antialias: config.antialias,
        outline: config.outline,
    };

    Ok(rasterizer.render(&polygons, &colors, width, height))
}
