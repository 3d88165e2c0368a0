//! Per-chakra sigil geometry.
//!
//! Each chakra draws concentric layers plus radiating elements in its own
//! shape grammar: squares for root, circles for sacral, triangles for
//! solar plexus. Chakras without a dedicated grammar fall back to a
//! concentric-ring mandala.

use glam::Vec2;
use sigil_core::{Chakra, Palette, SigilParams};

use crate::canvas::{radial_point, Canvas};

/// Draw the sigil geometry for `chakra`, centered on `center`.
///
/// `base_size` is the base figure radius (one third of the canvas side).
pub fn draw(
    canvas: &mut Canvas,
    chakra: Chakra,
    palette: &Palette,
    params: &SigilParams,
    center: Vec2,
    base_size: f32,
) {
    match chakra {
        Chakra::Root => draw_root(canvas, palette, params, center, base_size),
        Chakra::Sacral => draw_sacral(canvas, palette, params, center, base_size),
        Chakra::SolarPlexus => draw_solar_plexus(canvas, palette, params, center, base_size),
        _ => draw_mandala(canvas, palette, params, center, base_size),
    }
}

/// Corner points of a regular polygon, first corner at `angle_offset_deg`.
fn polygon_points(center: Vec2, radius: f32, sides: u32, angle_offset_deg: f32) -> Vec<Vec2> {
    let step = 360.0 / sides as f32;
    (0..sides)
        .map(|j| radial_point(center, radius, angle_offset_deg + j as f32 * step))
        .collect()
}

/// Root: concentric rotated squares with grounding rays.
fn draw_root(canvas: &mut Canvas, palette: &Palette, params: &SigilParams, center: Vec2, base_size: f32) {
    let scale = base_size * params.scale_factor;
    let rotation = params.rotation_offset;

    for i in 0..params.layer_count {
        let layer_size = scale * (1.0 - i as f32 * 0.2);
        let points = polygon_points(center, layer_size, 4, rotation + i as f32 * 15.0);
        canvas.stroke_polygon(&points, params.line_weight, palette.layer_color(i));
    }

    for i in 0..params.ray_count {
        let angle = rotation + (360.0 / params.ray_count as f32) * i as f32;
        let end = radial_point(center, scale * 1.3, angle);
        canvas.stroke_line(center, end, params.line_weight, palette.accent);
    }
}

/// Sacral: concentric circles with crescent arcs orbiting them.
fn draw_sacral(canvas: &mut Canvas, palette: &Palette, params: &SigilParams, center: Vec2, base_size: f32) {
    let scale = base_size * params.scale_factor;
    let rotation = params.rotation_offset;

    for i in 0..params.layer_count {
        let radius = scale * (1.0 - i as f32 * 0.18);
        canvas.stroke_circle(center, radius, params.line_weight, palette.layer_color(i));
    }

    for i in 0..params.ray_count {
        let angle = rotation + (360.0 / params.ray_count as f32) * i as f32;
        let arc_center = radial_point(center, scale * 0.8, angle);
        canvas.stroke_arc(
            arc_center,
            scale * 0.3,
            angle,
            180.0,
            params.line_weight,
            palette.accent,
        );
    }
}

/// Solar plexus: concentric rotated triangles with a sunburst of
/// alternating long primary and short accent rays.
fn draw_solar_plexus(
    canvas: &mut Canvas,
    palette: &Palette,
    params: &SigilParams,
    center: Vec2,
    base_size: f32,
) {
    let scale = base_size * params.scale_factor;
    let rotation = params.rotation_offset;

    for i in 0..params.layer_count {
        let layer_size = scale * (1.0 - i as f32 * 0.2);
        let points = polygon_points(center, layer_size, 3, rotation + i as f32 * 20.0);
        canvas.stroke_polygon(&points, params.line_weight, palette.layer_color(i));
    }

    let ray_total = params.ray_count * 2;
    for i in 0..ray_total {
        let angle = rotation + (360.0 / ray_total as f32) * i as f32;
        let (length, color) = if i % 2 == 0 {
            (scale * 1.4, palette.primary)
        } else {
            (scale * 1.1, palette.accent)
        };
        canvas.stroke_line(
            center,
            radial_point(center, length, angle),
            params.line_weight,
            color,
        );
    }
}

/// Fallback mandala: plain concentric rings at the base figure size,
/// alternating primary and secondary. The scale factor does not apply.
fn draw_mandala(canvas: &mut Canvas, palette: &Palette, params: &SigilParams, center: Vec2, base_size: f32) {
    for i in 0..params.layer_count {
        let radius = base_size * (1.0 - i as f32 * 0.2);
        let color = if i % 2 == 0 { palette.primary } else { palette.secondary };
        canvas.stroke_circle(center, radius, params.line_weight, color);
    }
}
