//! Pipeline stages and their intensity policies.

use ndarray::{Array3, ArrayView3};

use crate::filters::blur::gaussian_blur_f32;
use crate::filters::color_adjust::{brightness_f32, contrast_f32, saturation_f32};
use crate::filters::color_matrix::{color_matrix_f32, ColorMatrix};
use crate::filters::grayscale::grayscale_f32;
use crate::filters::sharpen::sharpen_f32;
use crate::filters::vignette::{vignette_f32, VignetteParams};

/// Scalar adjustment selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustKind {
    /// Additive offset, 0.0 = no change.
    Brightness,
    /// Multiplier around mid-gray, 1.0 = no change.
    Contrast,
    /// Multiplier of chroma, 1.0 = no change.
    Saturation,
}

/// How a stage reacts to the filter intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityPolicy {
    /// The stage mixes its unprocessed and processed output with `mix = intensity`.
    Mix,
    /// The 4x4 part of the matrix is interpolated toward identity.
    MatrixBlend,
    /// Full strength regardless of intensity.
    Fixed,
}

/// One atomic image transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    ColorMatrix(ColorMatrix),
    Adjust { kind: AdjustKind, amount: f32 },
    Blur { radius: f32 },
    Sharpen { amount: f32 },
    Grayscale,
    Vignette,
}

impl Stage {
    pub const fn brightness(amount: f32) -> Self {
        Stage::Adjust {
            kind: AdjustKind::Brightness,
            amount,
        }
    }

    pub const fn contrast(amount: f32) -> Self {
        Stage::Adjust {
            kind: AdjustKind::Contrast,
            amount,
        }
    }

    pub const fn saturation(amount: f32) -> Self {
        Stage::Adjust {
            kind: AdjustKind::Saturation,
            amount,
        }
    }

    pub fn intensity_policy(&self) -> IntensityPolicy {
        match self {
            Stage::ColorMatrix(_) => IntensityPolicy::MatrixBlend,
            Stage::Sharpen { .. } => IntensityPolicy::Mix,
            Stage::Adjust { .. } | Stage::Blur { .. } | Stage::Grayscale | Stage::Vignette => {
                IntensityPolicy::Fixed
            }
        }
    }

    /// Run the stage on `input`. `intensity` must already be clamped to 0.0-1.0.
    pub fn apply(&self, input: ArrayView3<f32>, intensity: f32) -> Array3<f32> {
        match *self {
            Stage::ColorMatrix(matrix) => {
                color_matrix_f32(input, &matrix.blend_toward_identity(intensity))
            }
            Stage::Adjust { kind, amount } => match kind {
                AdjustKind::Brightness => brightness_f32(input, amount),
                AdjustKind::Contrast => contrast_f32(input, amount),
                AdjustKind::Saturation => saturation_f32(input, amount),
            },
            Stage::Blur { radius } => gaussian_blur_f32(input, radius),
            // The kernel is linear in sharpness, so scaling it is the same
            // as mixing unsharpened and sharpened output.
            Stage::Sharpen { amount } => sharpen_f32(input, amount * intensity),
            Stage::Grayscale => grayscale_f32(input),
            Stage::Vignette => vignette_f32(input, &VignetteParams::default()),
        }
    }
}
