use crate::color::{self, Color, Gradient};
use crate::error::{ConfigError, Error, Result};
use crate::geometry::Triangle;
use crate::gradient::Gradients;
use image::RgbImage;
use log::warn;
use rand::Rng;
use rayon::prelude::*;
use std::path;

/// Where triangle colors come from.
#[derive(Clone, Debug)]
pub enum ColorSource {
    /// Ramp keyed by the distance of the centroid from the origin.
    Gradient(Gradient),
    /// Reference picture sampled at the centroid. Its dimensions define the canvas.
    Image(RgbImage),
}

impl ColorSource {
    /// Picks the coloring mode from the user's choices. A reference image supersedes a gradient.
    pub fn resolve(
        gradients: &Gradients,
        gradient: Option<&str>,
        image: Option<RgbImage>,
    ) -> Result<Self> {
        match (gradient, image) {
            (None, None) => Err(ConfigError::MissingColorSource.into()),
            (Some(_), Some(image)) => {
                warn!("Image supersedes gradient; gradient selection ignored");
                Ok(ColorSource::Image(image))
            }
            (None, Some(image)) => Ok(ColorSource::Image(image)),
            (Some(name), None) => Ok(ColorSource::Gradient(gradients.get(name)?)),
        }
    }

    /// Canvas size implied by the source, if any.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            ColorSource::Gradient(_) => None,
            ColorSource::Image(image) => Some(image.dimensions()),
        }
    }

    /// One color per triangle. `triangles` are in cartesian coordinates of a canvas with the
    /// given dimensions.
    pub fn colors(&self, triangles: &[Triangle], width: u32, height: u32) -> Vec<Color> {
        match self {
            ColorSource::Gradient(gradient) => {
                let diagonal = ((width as f64).powi(2) + (height as f64).powi(2)).sqrt();

                triangles
                    .par_iter()
                    .map(|t| color::interpolate(gradient, t.centroid().norm() / diagonal))
                    .collect()
            }
            ColorSource::Image(image) => {
                let (width, height) = image.dimensions();

                triangles
                    .par_iter()
                    .map(|t| {
                        let c = t.to_screen(height).centroid();
                        let x = c.x.clamp(0.0, width.saturating_sub(1) as f64) as u32;
                        let y = c.y.clamp(0.0, height.saturating_sub(1) as f64) as u32;
                        Color::from(*image.get_pixel(x, y))
                    })
                    .collect()
            }
        }
    }
}

pub fn load_image(filename: &path::Path) -> Result<RgbImage> {
    let img = image::open(filename).map_err(|source| Error::Resource {
        path: filename.to_path_buf(),
        source,
    })?;

    Ok(img.to_rgb8())
}

/// Darkens every color by its own random amount below `amount`, in order.
pub fn darken_all<R: Rng + ?Sized>(colors: &mut [Color], amount: u32, rng: &mut R) {
    for c in colors.iter_mut() {
        *c = color::darken(*c, amount, rng);
    }
}
