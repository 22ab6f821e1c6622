//! Grayscale stage and bit depth conversion.
//!
//! Uses the same luminance weights as the saturation stage, so a saturation
//! multiplier of 0.0 and the grayscale stage agree.
//!
//! ## Bit Depth Support
//!
//! - **u8 (8-bit)**: Values 0-255, the decoded/encoded form
//! - **f32 (float)**: Values 0.0-1.0, the form every stage runs in

use ndarray::{Array3, ArrayView3};

use super::core::luminance;

/// Convert an RGB or RGBA f32 image to grayscale (luminosity method).
///
/// Output keeps the channel count with R=G=B=luminosity, alpha preserved.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 3 or 4), values 0.0-1.0
///
/// # Returns
/// New array with grayscale values in RGB channels
pub fn grayscale_f32(input: ArrayView3<f32>) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<f32>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let gray = luminance(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
                .clamp(0.0, 1.0);

            output[[y, x, 0]] = gray;
            output[[y, x, 1]] = gray;
            output[[y, x, 2]] = gray;
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }

    output
}

// ============================================================================
// Conversion Utilities
// ============================================================================

/// Convert u8 image (0-255) to f32 (0.0-1.0)
pub fn u8_to_f32(input: ArrayView3<u8>) -> Array3<f32> {
    input.mapv(|v| v as f32 / 255.0)
}

/// Convert f32 image (0.0-1.0) to u8 (0-255), rounding to nearest
pub fn f32_to_u8(input: ArrayView3<f32>) -> Array3<u8> {
    input.mapv(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}
