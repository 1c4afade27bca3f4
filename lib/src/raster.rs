use crate::color::Color;
use crate::geometry::Polygon;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point as PixelPoint;
use log::debug;

/// Factor by which both canvas dimensions grow when supersampling.
pub const SUPERSAMPLING: u32 = 4;

#[derive(Copy, Clone, Debug, Default)]
pub struct Rasterizer {
    pub antialias: bool,
    /// Stroke polygon edges with this color.
    pub outline: Option<Color>,
}

fn to_pixels(polygon: &Polygon) -> Vec<PixelPoint<i32>> {
    let mut pixels: Vec<PixelPoint<i32>> = Vec::with_capacity(polygon.vertices().len());

    for p in polygon.vertices() {
        let pixel = PixelPoint::new(p.x.round() as i32, p.y.round() as i32);

        if pixels.last() != Some(&pixel) {
            pixels.push(pixel);
        }
    }

    while pixels.len() > 1 && pixels.first() == pixels.last() {
        pixels.pop();
    }

    pixels
}

fn stroke(canvas: &mut RgbImage, polygon: &Polygon, color: Rgb<u8>) {
    let vertices = polygon.vertices();

    for (i, from) in vertices.iter().enumerate() {
        let to = &vertices[(i + 1) % vertices.len()];
        draw_line_segment_mut(
            canvas,
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            color,
        );
    }
}

impl Rasterizer {
    /// Paints `polygons` in order onto a white canvas of `width` x `height`, each filled with its
    /// paired color. Polygons are in screen coordinates of the requested canvas.
    pub fn render(
        &self,
        polygons: &[Polygon],
        colors: &[Color],
        width: u32,
        height: u32,
    ) -> RgbImage {
        let factor = if self.antialias { SUPERSAMPLING } else { 1 };
        let mut canvas = RgbImage::from_pixel(
            width * factor,
            height * factor,
            Rgb::from(Color::WHITE),
        );

        for (polygon, color) in polygons.iter().zip(colors) {
            let polygon = polygon.scale(factor as f64);
            let pixels = to_pixels(&polygon);

            if pixels.len() < 3 {
                debug!("Skipping degenerate polygon {:?}", polygon);
                continue;
            }

            draw_polygon_mut(&mut canvas, &pixels, Rgb::from(*color));

            if let Some(outline) = self.outline {
                stroke(&mut canvas, &polygon, Rgb::from(outline));
            }
        }

        if self.antialias {
            debug!(
                "Downsampling {}x{} to {}x{}",
                canvas.width(),
                canvas.height(),
                width,
                height
            );
            canvas = imageops::resize(&canvas, width, height, FilterType::Lanczos3);
        }

        canvas
    }
}
