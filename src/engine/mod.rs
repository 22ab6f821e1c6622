//! Filter Engine: applies a named filter to an image.
//!
//! `apply(image, filter, intensity) -> image'` looks up the filter's static
//! stage list and folds the image through it. Every call is independent:
//! no state is kept between calls and the input view is never modified, so
//! the same original can be re-filtered at a different intensity.
//!
//! ## Intensity
//!
//! Intensity is clamped to 0.0-1.0 (NaN counts as 0.0) and handed to every
//! stage; each stage decides what to do with it based on its
//! [`IntensityPolicy`]. Stages without an intensity-sensitive parameter
//! (adjustments, blur, grayscale, vignette) always run at full strength.

pub mod catalog;
pub mod stage;

use ndarray::{Array3, ArrayView3};

use crate::error::FilterError;
use crate::filters::grayscale::{f32_to_u8, u8_to_f32};

pub use catalog::{FilterDefinition, FilterId, CATALOG};
pub use stage::{AdjustKind, IntensityPolicy, Stage};

/// Clamp an intensity to 0.0-1.0.
pub fn clamp_intensity(intensity: f32) -> f32 {
    if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    }
}

fn validate(height: usize, width: usize, channels: usize) -> Result<(), FilterError> {
    if height == 0 || width == 0 {
        return Err(FilterError::EmptyImage { width, height });
    }
    if channels != 3 && channels != 4 {
        return Err(FilterError::UnsupportedChannels(channels));
    }
    Ok(())
}

/// Apply a filter to an f32 image.
///
/// # Arguments
/// * `image` - RGB or RGBA image (height, width, channels), values 0.0-1.0
/// * `filter` - Which palette entry to apply
/// * `intensity` - Blend factor, clamped to 0.0-1.0
///
/// # Returns
/// A new image with the same dimensions
pub fn apply_filter_f32(
    image: ArrayView3<f32>,
    filter: FilterId,
    intensity: f32,
) -> Result<Array3<f32>, FilterError> {
    let (height, width, channels) = image.dim();
    validate(height, width, channels)?;
    Ok(run_stages(image, filter, intensity))
}

/// Apply a filter to a u8 image (0-255), running the stages in f32.
pub fn apply_filter_u8(
    image: ArrayView3<u8>,
    filter: FilterId,
    intensity: f32,
) -> Result<Array3<u8>, FilterError> {
    let (height, width, channels) = image.dim();
    validate(height, width, channels)?;

    let output = run_stages(u8_to_f32(image).view(), filter, intensity);
    Ok(f32_to_u8(output.view()))
}

/// Fold an already validated image through the filter's stages.
fn run_stages(image: ArrayView3<f32>, filter: FilterId, intensity: f32) -> Array3<f32> {
    let (height, width, channels) = image.dim();
    let intensity = clamp_intensity(intensity);
    log::debug!(
        "applying {} to {}x{}x{} at intensity {:.2}",
        filter,
        width,
        height,
        channels,
        intensity
    );

    filter
        .stages()
        .iter()
        .fold(image.to_owned(), |current, stage| stage.apply(current.view(), intensity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_u8(h: usize, w: usize, rgba: [u8; 4]) -> Array3<u8> {
        Array3::<u8>::from_shape_fn((h, w, 4), |(_, _, c)| rgba[c])
    }

    #[test]
    fn test_warm_sunset_on_solid_red() {
        let img = solid_u8(2, 2, [255, 0, 0, 255]);

        let result = apply_filter_u8(img.view(), FilterId::WarmSunset, 1.0).unwrap();

        assert_eq!(result.dim(), (2, 2, 4));
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(result[[y, x, 0]], 255);
                assert_eq!(result[[y, x, 1]], 0);
                assert_eq!(result[[y, x, 2]], 0);
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }

    #[test]
    fn test_warm_sunset_matrix_stage_scales_channels() {
        let img = Array3::<f32>::from_shape_fn((2, 2, 4), |(_, _, c)| [0.5, 0.5, 0.5, 1.0][c]);

        let matrix_stage = FilterId::WarmSunset.stages()[0];
        let result = matrix_stage.apply(img.view(), 1.0);

        assert!((result[[0, 0, 0]] - 0.6).abs() < 1e-6);
        assert!((result[[0, 0, 1]] - 0.5).abs() < 1e-6);
        assert!((result[[0, 0, 2]] - 0.4).abs() < 1e-6);
        assert_eq!(result[[0, 0, 3]], 1.0);
    }

    #[test]
    fn test_input_not_modified() {
        let img = solid_u8(3, 3, [10, 200, 30, 128]);
        let copy = img.clone();

        for id in FilterId::ALL {
            let _ = apply_filter_u8(img.view(), id, 0.7).unwrap();
        }

        assert_eq!(img, copy);
    }

    #[test]
    fn test_sepia_fade_zero_intensity_is_identity() {
        let img = Array3::<u8>::from_shape_fn((4, 4, 4), |(y, x, c)| (y * 60 + x * 13 + c * 7) as u8);

        let result = apply_filter_u8(img.view(), FilterId::SepiaFade, 0.0).unwrap();

        assert_eq!(result, img);
    }

    #[test]
    fn test_intensity_clamped() {
        let img = solid_u8(2, 2, [120, 80, 200, 255]);

        let over = apply_filter_u8(img.view(), FilterId::CyberpunkNeon, 3.0).unwrap();
        let full = apply_filter_u8(img.view(), FilterId::CyberpunkNeon, 1.0).unwrap();
        let under = apply_filter_u8(img.view(), FilterId::SepiaFade, -2.0).unwrap();
        let nan = apply_filter_u8(img.view(), FilterId::SepiaFade, f32::NAN).unwrap();

        assert_eq!(over, full);
        assert_eq!(under, img);
        assert_eq!(nan, img);
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = Array3::<u8>::zeros((0, 4, 4));

        let err = apply_filter_u8(img.view(), FilterId::Vintage, 1.0).unwrap_err();

        assert!(matches!(err, FilterError::EmptyImage { width: 4, height: 0 }));
    }

    #[test]
    fn test_single_channel_rejected() {
        let img = Array3::<f32>::zeros((2, 2, 1));

        let err = apply_filter_f32(img.view(), FilterId::Vintage, 1.0).unwrap_err();

        assert!(matches!(err, FilterError::UnsupportedChannels(1)));
    }

    #[test]
    fn test_u8_rejects_malformed_before_conversion() {
        let img = Array3::<u8>::zeros((3, 3, 2));

        let err = apply_filter_u8(img.view(), FilterId::HdrPop, 1.0).unwrap_err();

        assert!(matches!(err, FilterError::UnsupportedChannels(2)));
    }

    #[test]
    fn test_u8_path_matches_f32_path() {
        let img = Array3::<u8>::from_shape_fn((5, 5, 4), |(y, x, c)| (y * 40 + x * 9 + c * 17) as u8);

        let via_u8 = apply_filter_u8(img.view(), FilterId::PastelDream, 0.8).unwrap();
        let via_f32 = apply_filter_f32(u8_to_f32(img.view()).view(), FilterId::PastelDream, 0.8).unwrap();

        assert_eq!(via_u8, f32_to_u8(via_f32.view()));
    }

    #[test]
    fn test_rgb_input_supported() {
        let img = Array3::<f32>::from_elem((3, 5, 3), 0.3);

        for id in FilterId::ALL {
            let result = apply_filter_f32(img.view(), id, 1.0).unwrap();
            assert_eq!(result.dim(), (3, 5, 3));
        }
    }

    #[test]
    fn test_vintage_not_idempotent() {
        let img = Array3::<u8>::from_shape_fn((8, 8, 4), |(y, x, c)| {
            if c == 3 { 255 } else { (y * 30 + x * 5 + c * 40) as u8 }
        });

        let once = apply_filter_u8(img.view(), FilterId::Vintage, 1.0).unwrap();
        let twice = apply_filter_u8(once.view(), FilterId::Vintage, 1.0).unwrap();

        assert_ne!(once, twice);
    }
}
