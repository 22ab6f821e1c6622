//! Vignette stage.
//!
//! Darkens the edges of the image toward a vignette color with a smoothstep
//! falloff. Distances are measured in texture coordinates (0.0-1.0 on both
//! axes), so non-square images get an elliptical vignette.

use ndarray::{Array3, ArrayView3};

use super::core::{color_channels, mix, smoothstep};

/// Vignette parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VignetteParams {
    /// Center in texture coordinates.
    pub center: [f32; 2],
    /// Color the edges fade to.
    pub color: [f32; 3],
    /// Distance from center where darkening begins.
    pub start: f32,
    /// Distance from center where the vignette color is fully reached.
    pub end: f32,
}

impl Default for VignetteParams {
    fn default() -> Self {
        Self {
            center: [0.5, 0.5],
            color: [0.0, 0.0, 0.0],
            start: 0.3,
            end: 0.75,
        }
    }
}

/// Apply a vignette to an RGB or RGBA f32 image.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels), values 0.0-1.0
/// * `params` - Center, color and falloff range
///
/// # Returns
/// Vignetted image with same channel count
pub fn vignette_f32(input: ArrayView3<f32>, params: &VignetteParams) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<f32>::zeros((height, width, channels));
    let color_channels = color_channels(channels);

    for y in 0..height {
        let v = (y as f32 + 0.5) / height as f32;
        for x in 0..width {
            let u = (x as f32 + 0.5) / width as f32;
            let du = u - params.center[0];
            let dv = v - params.center[1];
            let dist = (du * du + dv * dv).sqrt();
            let percent = smoothstep(params.start, params.end, dist);

            for c in 0..color_channels {
                output[[y, x, c]] = mix(input[[y, x, c]], params.color[c], percent).clamp(0.0, 1.0);
            }
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_unchanged_corners_darkened() {
        let img = Array3::<f32>::from_elem((21, 21, 4), 1.0);

        let result = vignette_f32(img.view(), &VignetteParams::default());

        assert!((result[[10, 10, 0]] - 1.0).abs() < 1e-6);
        assert!(result[[0, 0, 0]] < 0.5);
        assert_eq!(result[[0, 0, 3]], 1.0);
    }

    #[test]
    fn test_falloff_is_monotonic_along_row() {
        let img = Array3::<f32>::from_elem((1, 41, 3), 0.8);

        let result = vignette_f32(img.view(), &VignetteParams::default());

        for x in 0..20 {
            assert!(result[[0, x, 0]] <= result[[0, x + 1, 0]] + 1e-6);
        }
    }
}
