use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use lowpoly::color::Color;
use lowpoly::gradient::Gradients;
use lowpoly::paint::{self, ColorSource};
use lowpoly::Config;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Render low-poly images from random Delaunay triangulations")]
pub struct Options {
    /// The filename to write the image to. The format is derived from the extension.
    #[arg(long, short, default_value = "triangles.png")]
    output: PathBuf,

    /// The number of points to use when generating the triangulation.
    #[arg(long, short, default_value = "100")]
    num_points: usize,

    /// The width of the image.
    #[arg(long, short = 'x')]
    width: Option<u32>,

    /// The height of the image.
    #[arg(long, short = 'y')]
    height: Option<u32>,

    /// The name of the gradient to use.
    #[arg(long, short)]
    gradient: Option<String>,

    /// An image file to use when calculating triangle colors. Its dimensions override width and
    /// height.
    #[arg(long, short)]
    image: Option<PathBuf>,

    /// Darken random triangles by up to the given amount.
    #[arg(long, short = 'k')]
    darken: Option<u32>,

    /// Draw the image at 4x resolution and downsample to reduce aliasing.
    #[arg(long, short)]
    antialias: bool,

    /// Draw lines along the triangle edges.
    #[arg(long, short = 'l')]
    lines: bool,

    /// Color of the triangle edges as `r,g,b`.
    #[arg(long, default_value_t = Color::WHITE)]
    outline_color: Color,

    /// Avoid clusters of points. Significantly slows down point generation.
    #[arg(long, short)]
    decluster: bool,

    /// Extent of the sampled region relative to the canvas.
    #[arg(long, default_value_t = lowpoly::config::DEFAULT_SCALE)]
    scale: f64,

    /// Seed of the random number generator.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with additional gradients mapping names to `[[r, g, b], [r, g, b]]`.
    #[arg(long)]
    gradients: Option<PathBuf>,

    /// Print the names of all available gradients and exit.
    #[arg(long)]
    list_gradients: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Options::parse();

    let mut gradients = Gradients::default();

    if let Some(filename) = &opt.gradients {
        gradients.extend_from_file(filename)?;
    }

    if opt.list_gradients {
        for name in gradients.names() {
            println!("{}", name);
        }

        return Ok(());
    }

    let reference = match &opt.image {
        Some(filename) => {
            if opt.width.is_some() || opt.height.is_some() {
                warn!("Image dimensions supersede specified width and height");
            }

            Some(paint::load_image(filename)?)
        }
        None => None,
    };

    let source = ColorSource::resolve(&gradients, opt.gradient.as_deref(), reference)?;

    let mut config = Config::new(
        source,
        opt.width.unwrap_or_default(),
        opt.height.unwrap_or_default(),
    );
    config.num_points = opt.num_points;
    config.darken = opt.darken;
    config.antialias = opt.antialias;
    config.outline = opt.lines.then_some(opt.outline_color);
    config.decluster = opt.decluster;
    config.scale = opt.scale;

    let seed = opt.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);
    let mut rng = Pcg64::seed_from_u64(seed);

    let image = lowpoly::render(&config, &mut rng)?;

    image
        .save(&opt.output)
        .with_context(|| format!("Failed to write {}", opt.output.display()))?;

    println!("Image saved to {}", opt.output.display());

    Ok(())
}
