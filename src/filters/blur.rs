//! Gaussian blur stage.
//!
//! Separable 2-pass convolution with clamped edge sampling. Only the color
//! channels are blurred; alpha is carried through unchanged.

use ndarray::{Array3, ArrayView3};

use super::core::{color_channels, gaussian_kernel_1d};

/// Gaussian sigma, in pixels, of a blur with radius 1.0.
pub const SIGMA_PER_RADIUS: f32 = 2.0;

/// Apply Gaussian blur to an RGB or RGBA f32 image.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels), values 0.0-1.0
/// * `radius` - Blur size; the kernel sigma is `radius * SIGMA_PER_RADIUS` pixels
///
/// # Returns
/// Blurred image with same dimensions
pub fn gaussian_blur_f32(input: ArrayView3<f32>, radius: f32) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let sigma = radius * SIGMA_PER_RADIUS;

    if sigma <= 0.0 {
        return input.to_owned();
    }

    let kernel = gaussian_kernel_1d(sigma);
    let half = kernel.len() / 2;
    let color_channels = color_channels(channels);

    let mut temp = Array3::<f32>::zeros((height, width, color_channels));
    let mut result = Array3::<f32>::zeros((height, width, channels));

    // Horizontal pass
    for y in 0..height {
        for x in 0..width {
            for c in 0..color_channels {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sx = (x as isize + ki as isize - half as isize)
                        .clamp(0, width as isize - 1) as usize;
                    sum += input[[y, sx, c]] * kv;
                }
                temp[[y, x, c]] = sum;
            }
        }
    }

    // Vertical pass
    for y in 0..height {
        for x in 0..width {
            for c in 0..color_channels {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sy = (y as isize + ki as isize - half as isize)
                        .clamp(0, height as isize - 1) as usize;
                    sum += temp[[sy, x, c]] * kv;
                }
                result[[y, x, c]] = sum.clamp(0.0, 1.0);
            }
            if channels == 4 {
                result[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }

    result
}
