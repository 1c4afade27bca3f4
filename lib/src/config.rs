use crate::color::Color;
use crate::error::{ConfigError, Result};
use crate::paint::ColorSource;
use crate::raster::SUPERSAMPLING;

/// Default extension of the sampling region beyond the canvas.
pub const DEFAULT_SCALE: f64 = 1.25;

/// Resolved parameters of a single render.
#[derive(Clone, Debug)]
pub struct Config {
    pub num_points: usize,
    /// Canvas size, ignored when coloring from an image.
    pub width: u32,
    pub height: u32,
    pub source: ColorSource,
    /// Exclusive upper bound of the random per-triangle darkening.
    pub darken: Option<u32>,
    pub antialias: bool,
    pub outline: Option<Color>,
    pub decluster: bool,
    pub scale: f64,
}

impl Config {
    pub fn new(source: ColorSource, width: u32, height: u32) -> Self {
        Config {
            num_points: 100,
            width,
            height,
            source,
            darken: None,
            antialias: false,
            outline: None,
            decluster: false,
            scale: DEFAULT_SCALE,
        }
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.source
            .dimensions()
            .unwrap_or((self.width, self.height))
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.canvas_size();

        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidSize { width, height }.into());
        }

        // The supersampled canvas must still be addressable.
        if self.antialias
            && (width.checked_mul(SUPERSAMPLING).is_none()
                || height.checked_mul(SUPERSAMPLING).is_none())
        {
            return Err(ConfigError::InvalidSize { width, height }.into());
        }

        if self.num_points == 0 {
            return Err(ConfigError::InvalidPointCount.into());
        }

        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Gradient;
    use crate::error::Error;
    use image::RgbImage;

    fn gradient() -> ColorSource {
        ColorSource::Gradient(Gradient::new(Color::new(0, 0, 0), Color::WHITE))
    }

    #[test]
    fn image_overrides_size() {
        let config = Config::new(ColorSource::Image(RgbImage::new(7, 3)), 640, 480);

        assert_eq!(config.canvas_size(), (7, 3));
        assert_eq!(Config::new(gradient(), 640, 480).canvas_size(), (640, 480));
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Config::new(gradient(), 10, 10).validate().is_ok());

        assert!(matches!(
            Config::new(gradient(), 0, 10).validate(),
            Err(Error::Config(ConfigError::InvalidSize {
                width: 0,
                height: 10
            }))
        ));
        assert!(matches!(
            Config::new(ColorSource::Image(RgbImage::new(0, 0)), 10, 10).validate(),
            Err(Error::Config(ConfigError::InvalidSize { .. }))
        ));

        let mut config = Config::new(gradient(), 10, 10);
        config.num_points = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidPointCount))
        ));

        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut config = Config::new(gradient(), 10, 10);
            config.scale = scale;
            assert!(matches!(
                config.validate(),
                Err(Error::Config(ConfigError::InvalidScale(_)))
            ));
        }
    }

    #[test]
    fn rejects_oversized_supersampled_canvas() {
        let mut config = Config::new(gradient(), u32::MAX / 2, 10);
        assert!(config.validate().is_ok());

        config.antialias = true;
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidSize { height: 10, .. }))
        ));

        let mut config = Config::new(gradient(), 10, u32::MAX / SUPERSAMPLING);
        config.antialias = true;
        assert!(config.validate().is_ok());
    }
}
