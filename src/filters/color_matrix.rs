//! 4x5 color matrix transform.
//!
//! Row `i` of the matrix produces output channel `i` (R, G, B, A):
//!
//! ```text
//! out[i] = m[i][0]*R + m[i][1]*G + m[i][2]*B + m[i][3]*A + m[i][4]
//! ```
//!
//! All values are normalized (0.0-1.0); the translation column is in the
//! same units. RGB images are treated as fully opaque and the alpha row is
//! ignored for them.

use ndarray::{Array3, ArrayView3};

/// A 4x5 color matrix, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    rows: [[f32; 5]; 4],
}

impl ColorMatrix {
    /// The matrix that leaves every pixel unchanged.
    pub const IDENTITY: ColorMatrix = ColorMatrix::new([
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
    ]);

    /// Sepia tone.
    pub const SEPIA: ColorMatrix = ColorMatrix::new([
        [0.3588, 0.7044, 0.1368, 0.0, 0.0],
        [0.2990, 0.5870, 0.1140, 0.0, 0.0],
        [0.2392, 0.4696, 0.0912, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
    ]);

    pub const fn new(rows: [[f32; 5]; 4]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[f32; 5]; 4] {
        &self.rows
    }

    /// Interpolate the 4x4 part toward identity.
    ///
    /// `coeff' = coeff * intensity + identity * (1 - intensity)`. The
    /// translation column is copied as-is.
    pub fn blend_toward_identity(&self, intensity: f32) -> ColorMatrix {
        let mut rows = self.rows;
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, coeff) in row.iter_mut().take(4).enumerate() {
                let identity = if i == j { 1.0 } else { 0.0 };
                *coeff = *coeff * intensity + identity * (1.0 - intensity);
            }
        }
        ColorMatrix { rows }
    }

    /// Transform one RGBA pixel. Output is not clamped.
    #[inline]
    pub fn transform(&self, px: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for (o, row) in out.iter_mut().zip(self.rows.iter()) {
            *o = row[0] * px[0] + row[1] * px[1] + row[2] * px[2] + row[3] * px[3] + row[4];
        }
        out
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Apply a color matrix to an RGB or RGBA f32 image.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels), values 0.0-1.0
/// * `matrix` - The 4x5 matrix to apply
///
/// # Returns
/// Transformed image with same channel count, values clamped to 0.0-1.0
pub fn color_matrix_f32(input: ArrayView3<f32>, matrix: &ColorMatrix) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<f32>::zeros((height, width, channels));
    let has_alpha = channels == 4;

    for y in 0..height {
        for x in 0..width {
            let a = if has_alpha { input[[y, x, 3]] } else { 1.0 };
            let px = [input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]], a];
            let out = matrix.transform(px);

            for c in 0..channels {
                output[[y, x, c]] = out[c].clamp(0.0, 1.0);
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_leaves_pixels_unchanged() {
        let mut img = Array3::<f32>::zeros((1, 2, 4));
        img[[0, 0, 0]] = 0.25;
        img[[0, 0, 1]] = 0.5;
        img[[0, 0, 2]] = 0.75;
        img[[0, 0, 3]] = 1.0;
        img[[0, 1, 3]] = 0.5;

        let result = color_matrix_f32(img.view(), &ColorMatrix::IDENTITY);

        assert_eq!(result, img);
    }

    #[test]
    fn test_blend_zero_is_identity_except_translation() {
        let m = ColorMatrix::new([
            [1.5, 0.0, 0.5, 0.0, 0.1],
            [0.0, 0.8, 1.2, 0.0, 0.0],
            [0.5, 0.0, 1.5, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
        ]);

        let blended = m.blend_toward_identity(0.0);

        assert_eq!(blended.rows()[0], [1.0, 0.0, 0.0, 0.0, 0.1]);
        assert_eq!(blended.rows()[1], [0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(blended.rows()[2], [0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_blend_one_keeps_coefficients() {
        let blended = ColorMatrix::SEPIA.blend_toward_identity(1.0);
        assert_eq!(blended, ColorMatrix::SEPIA);
    }

    #[test]
    fn test_blend_half() {
        let m = ColorMatrix::new([
            [1.2, 0.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.8, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
        ]);
        let blended = m.blend_toward_identity(0.5);
        assert!((blended.rows()[0][0] - 1.1).abs() < 1e-6);
        assert!((blended.rows()[2][2] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_image_keeps_three_channels() {
        let img = Array3::<f32>::from_elem((2, 2, 3), 0.5);
        let result = color_matrix_f32(img.view(), &ColorMatrix::SEPIA);
        assert_eq!(result.dim(), (2, 2, 3));
    }

    #[test]
    fn test_output_clamped() {
        let img = Array3::<f32>::from_elem((1, 1, 4), 1.0);
        let boost = ColorMatrix::new([
            [2.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, -2.0],
            [0.0, 0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
        ]);
        let result = color_matrix_f32(img.view(), &boost);
        assert_eq!(result[[0, 0, 0]], 1.0);
        assert_eq!(result[[0, 0, 1]], 0.0);
    }
}
