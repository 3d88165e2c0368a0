//! Raster canvas - square RGB pixel buffer with stroke primitives.
//!
//! Strokes are painted by scanning the primitive's bounding box and
//! coloring every pixel whose center lies within half the stroke width of
//! the path. All coordinates are screen coordinates: the origin is the
//! top-left corner and y grows downward, so angles sweep clockwise.

use glam::Vec2;
use image::{Rgb, RgbImage};
use sigil_core::Color;

/// Point on the circle of `radius` around `center` at `angle_deg` degrees.
pub fn radial_point(center: Vec2, radius: f32, angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    center + radius * Vec2::new(rad.cos(), rad.sin())
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + t * ab)
}

/// A square RGB drawing surface.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Create a `side x side` canvas filled with `background`.
    pub fn new(side: u32, background: Color) -> Self {
        let img = RgbImage::from_pixel(side, side, Rgb([background.r, background.g, background.b]));
        Self { img }
    }

    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        self.img.width()
    }

    /// Canvas midpoint.
    pub fn center(&self) -> Vec2 {
        Vec2::splat((self.side() / 2) as f32)
    }

    /// Color of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let Rgb([r, g, b]) = *self.img.get_pixel(x, y);
        Color::rgb(r, g, b)
    }

    /// Consume the canvas, yielding the underlying image buffer.
    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// Paint every pixel within `width / 2` of the segment `a`-`b`.
    pub fn stroke_line(&mut self, a: Vec2, b: Vec2, width: u32, color: Color) {
        let half = width as f32 * 0.5;
        let pad = Vec2::splat(half + 1.0);
        let Some((x0, y0, x1, y1)) = self.clamp_box(a.min(b) - pad, a.max(b) + pad) else {
            return;
        };
        let rgb = Rgb([color.r, color.g, color.b]);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if segment_distance(p, a, b) <= half {
                    self.img.put_pixel(x, y, rgb);
                }
            }
        }
    }

    /// Paint the outline ring of a circle. Non-positive radii are skipped.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: u32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let half = width as f32 * 0.5;
        let pad = Vec2::splat(radius + half + 1.0);
        let Some((x0, y0, x1, y1)) = self.clamp_box(center - pad, center + pad) else {
            return;
        };
        let rgb = Rgb([color.r, color.g, color.b]);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if (p.distance(center) - radius).abs() <= half {
                    self.img.put_pixel(x, y, rgb);
                }
            }
        }
    }

    /// Paint a circular arc starting at `start_deg` and sweeping
    /// `sweep_deg` clockwise, approximated as a chain of short chords.
    pub fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        width: u32,
        color: Color,
    ) {
        if radius <= 0.0 {
            return;
        }
        // One chord per ~4 degrees keeps the sagitta well under a pixel.
        let steps = (sweep_deg.abs() / 4.0).ceil().max(1.0) as u32;
        let mut prev = radial_point(center, radius, start_deg);
        for i in 1..=steps {
            let angle = start_deg + sweep_deg * (i as f32 / steps as f32);
            let next = radial_point(center, radius, angle);
            self.stroke_line(prev, next, width, color);
            prev = next;
        }
    }

    /// Paint the closed outline of a polygon.
    pub fn stroke_polygon(&mut self, points: &[Vec2], width: u32, color: Color) {
        if points.len() < 2 {
            return;
        }
        for i in 0..points.len() {
            let next = points[(i + 1) % points.len()];
            self.stroke_line(points[i], next, width, color);
        }
    }

    /// Clamp a bounding box to the canvas, in whole pixels.
    fn clamp_box(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        let side = i64::from(self.side());
        let x0 = (min.x.floor() as i64).max(0);
        let y0 = (min.y.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(side - 1);
        let y1 = (max.y.ceil() as i64).min(side - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}
