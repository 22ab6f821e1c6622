//! Sharpen stage.
//!
//! ## Alpha Handling
//!
//! For RGBA images, transparent neighbors (alpha=0) are treated like image boundaries:
//! their RGB values are replaced with the center pixel's RGB, so undefined colors in
//! transparent pixels never bleed into the result.

use ndarray::{Array3, ArrayView3};

use super::core::color_channels;

/// Alpha threshold below which a pixel is considered transparent.
const ALPHA_THRESHOLD: f32 = 0.001;

/// Apply a 3x3 sharpening kernel.
///
/// ```text
///  0  -s   0
/// -s 1+4s -s
///  0  -s   0
/// ```
///
/// Border rows and columns are copied unchanged.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels), values 0.0-1.0
/// * `sharpness` - Sharpening strength (0.0 = no change)
///
/// # Returns
/// Sharpened image with same channel count
pub fn sharpen_f32(input: ArrayView3<f32>, sharpness: f32) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let mut output = input.to_owned();

    let center_weight = 1.0 + 4.0 * sharpness;
    let edge_weight = -sharpness;

    let color_channels = color_channels(channels);
    let has_alpha = channels == 4;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if has_alpha && input[[y, x, 3]] < ALPHA_THRESHOLD {
                continue;
            }

            let neighbors = [(y - 1, x), (y + 1, x), (y, x - 1), (y, x + 1)];

            for c in 0..color_channels {
                let v_center = input[[y, x, c]];
                let mut sum = v_center * center_weight;

                for &(ny, nx) in &neighbors {
                    let opaque = !has_alpha || input[[ny, nx, 3]] >= ALPHA_THRESHOLD;
                    let v = if opaque { input[[ny, nx, c]] } else { v_center };
                    sum += v * edge_weight;
                }

                output[[y, x, c]] = sum.clamp(0.0, 1.0);
            }
        }
    }

    output
}
