//! Color adjustment stages: Brightness, Contrast, Saturation.
//!
//! These are pixel-wise operations that don't require spatial context.
//! All stages work on normalized f32 images (0.0-1.0).
//!
//! ## Supported Formats
//!
//! - **RGB**: (height, width, 3) - red, green, blue
//! - **RGBA**: (height, width, 4) - red, green, blue, alpha
//!
//! Alpha channel (if present) is always preserved unchanged.

use ndarray::{Array3, ArrayView3};

use super::core::{color_channels, luminance};

// ============================================================================
// Brightness
// ============================================================================

/// Adjust image brightness.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels), values 0.0-1.0
/// * `amount` - Offset added to each color channel: -1.0 (black) to 1.0 (white), 0.0 = no change
///
/// # Returns
/// Brightness-adjusted image with same channel count
pub fn brightness_f32(input: ArrayView3<f32>, amount: f32) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<f32>::zeros((height, width, channels));

    let color_channels = color_channels(channels);

    for y in 0..height {
        for x in 0..width {
            for c in 0..color_channels {
                output[[y, x, c]] = (input[[y, x, c]] + amount).clamp(0.0, 1.0);
            }
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }
    output
}

// ============================================================================
// Contrast
// ============================================================================

/// Adjust image contrast around mid-gray.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels), values 0.0-1.0
/// * `multiplier` - Contrast multiplier: 0.0 (flat gray) to 4.0, 1.0 = no change
///
/// # Returns
/// Contrast-adjusted image with same channel count
pub fn contrast_f32(input: ArrayView3<f32>, multiplier: f32) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<f32>::zeros((height, width, channels));

    let color_channels = color_channels(channels);

    for y in 0..height {
        for x in 0..width {
            for c in 0..color_channels {
                let v = input[[y, x, c]];
                let adjusted = (v - 0.5) * multiplier + 0.5;
                output[[y, x, c]] = adjusted.clamp(0.0, 1.0);
            }
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }
    output
}

// ============================================================================
// Saturation
// ============================================================================

/// Adjust image saturation by scaling each channel's distance from luminance.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels), values 0.0-1.0
/// * `multiplier` - Saturation multiplier: 0.0 (grayscale) to 2.0 (vivid), 1.0 = no change
///
/// # Returns
/// Saturation-adjusted image with same channel count
pub fn saturation_f32(input: ArrayView3<f32>, multiplier: f32) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<f32>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]];
            let g = input[[y, x, 1]];
            let b = input[[y, x, 2]];

            let gray = luminance(r, g, b);

            output[[y, x, 0]] = (gray + (r - gray) * multiplier).clamp(0.0, 1.0);
            output[[y, x, 1]] = (gray + (g - gray) * multiplier).clamp(0.0, 1.0);
            output[[y, x, 2]] = (gray + (b - gray) * multiplier).clamp(0.0, 1.0);

            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }
    output
}
