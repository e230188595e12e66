//! Soft-edged tile images
//!
//! A grayscale mask is painted as four triangles meeting at the center: the
//! top and bottom ones carry a vertical gradient, the left and right ones a
//! horizontal gradient. Both gradients are dark at the ends and nearly white in
//! the middle band. The mask then replaces the alpha channel of the resampled
//! tile.

use crate::geometry::Point;
use crate::io::error::{Result, invalid_parameter};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, RgbaImage};

/// Gradient stop positions along the painted axis
pub const BLEND_POSITIONS: [f32; 7] = [0.0, 0.15, 0.2, 0.5, 0.8, 0.85, 1.0];

/// Black-to-white blend factors at each stop
pub const BLEND_FACTORS: [f32; 7] = [0.0, 0.1, 0.9, 1.0, 0.9, 0.1, 0.0];

/// Width of the pen stroking the triangle outlines
pub const SEAM_PEN_WIDTH: f32 = 10.0;

/// Piecewise-linear blend factor at relative position `t` along an axis
///
/// Positions outside `[0, 1]` are clamped.
pub fn blend_factor(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    for (positions, factors) in BLEND_POSITIONS.windows(2).zip(BLEND_FACTORS.windows(2)) {
        let (&[p0, p1], &[f0, f1]) = (positions, factors) else {
            continue;
        };
        if t <= p1 {
            let span = p1 - p0;
            if span <= 0.0 {
                return f1;
            }
            return f0 + (f1 - f0) * (t - p0) / span;
        }
    }

    BLEND_FACTORS.last().copied().unwrap_or(0.0)
}

fn intensity(t: f32) -> u8 {
    (blend_factor(t) * 255.0).round().clamp(0.0, 255.0) as u8
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let length_squared = abx * abx + aby * aby;
    let t = if length_squared > 0.0 {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / length_squared).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (p.x - (a.x + t * abx), p.y - (a.y + t * aby));
    (dx * dx + dy * dy).sqrt()
}

/// Build the feathering mask for a `width` x `height` tile
///
/// Pixels are sampled at their centers. Pixels within half a pen width of the
/// top or bottom triangle outlines take the vertical gradient, which hides the
/// seams along the diagonals.
pub fn build_mask(width: u32, height: u32) -> GrayImage {
    let mut mask = GrayImage::from_pixel(width, height, Luma([u8::MAX]));
    if width == 0 || height == 0 {
        return mask;
    }

    let (w, h) = (width as f32, height as f32);
    let top_left = Point::new(0.0, 0.0);
    let top_right = Point::new(w, 0.0);
    let bottom_left = Point::new(0.0, h);
    let bottom_right = Point::new(w, h);
    let centre = Point::new(w / 2.0, h / 2.0);

    let outline = [
        (top_left, top_right),
        (top_right, centre),
        (centre, top_left),
        (bottom_left, bottom_right),
        (bottom_right, centre),
        (centre, bottom_left),
    ];
    let half_pen = SEAM_PEN_WIDTH / 2.0;

    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
        let u = p.x / w;
        let v = p.y / h;

        let in_top = v <= u && v <= 1.0 - u;
        let in_bottom = v >= u && v >= 1.0 - u;
        let on_seam = outline
            .iter()
            .any(|&(a, b)| distance_to_segment(p, a, b) <= half_pen);

        *pixel = if in_top || in_bottom || on_seam {
            Luma([intensity(v)])
        } else {
            Luma([intensity(u)])
        };
    }

    mask
}

/// Copy the mask channel into the alpha channel of `destination`
///
/// # Errors
///
/// Returns an error if the two images differ in size
pub fn transfer_alpha(mask: &GrayImage, destination: &mut RgbaImage) -> Result<()> {
    if mask.dimensions() != destination.dimensions() {
        return Err(invalid_parameter(
            "mask",
            &format!("{}x{}", mask.width(), mask.height()),
            &format!(
                "must match destination size {}x{}",
                destination.width(),
                destination.height()
            ),
        ));
    }

    let buffer: &mut [u8] = destination;
    for (rgba, &value) in buffer.chunks_exact_mut(4).zip(mask.as_raw()) {
        if let Some(alpha) = rgba.get_mut(3) {
            *alpha = value;
        }
    }

    Ok(())
}

/// Resample `source` to `width` x `height` and feather its edges
///
/// The source alpha is replaced, not multiplied.
///
/// # Errors
///
/// Returns an error if the target size has no area
pub fn make_soft_edge_image(source: &DynamicImage, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "target_size",
            &format!("{width}x{height}"),
            &"soft edges need a non-empty target",
        ));
    }

    let mut feathered = imageops::resize(source, width, height, FilterType::Triangle);
    let mask = build_mask(width, height);
    transfer_alpha(&mask, &mut feathered)?;
    Ok(feathered)
}
