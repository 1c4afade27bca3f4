use std::path::PathBuf;
use thiserror::Error;

/// Problems with the resolved render parameters, detected before any geometry work.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("must select either a gradient or a reference image")]
    MissingColorSource,

    #[error("invalid gradient name `{0}`")]
    UnknownGradient(String),

    #[error("width and height must be greater than zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("number of points must be greater than zero")]
    InvalidPointCount,

    #[error("sampling scale must be positive and finite, got {0}")]
    InvalidScale(f64),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to find a triangulation of {points} points")]
    Triangulation { points: usize },

    #[error("failed to read reference image {path}")]
    Resource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to load gradient table {path}")]
    GradientTable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
