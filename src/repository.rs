//! Filter repository: the boundary between the UI layer and the engine.
//!
//! Takes intensities as UI percentages (0-100), turns any panic raised
//! inside a stage into [`FilterError::Internal`], and logs timing. The
//! engine itself never retries; neither does this layer.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::engine::{apply_filter_u8, FilterId};
use crate::error::FilterError;

/// Default UI intensity, in percent.
pub const DEFAULT_INTENSITY_PERCENT: f32 = 100.0;

/// Convert a UI percentage to an engine intensity.
pub fn percent_to_intensity(percent: f32) -> f32 {
    percent / 100.0
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FilterRepository;

impl FilterRepository {
    pub fn new() -> Self {
        Self
    }

    /// Apply `filter` at `intensity_percent` (0-100).
    pub fn apply_filter(
        &self,
        image: ArrayView3<u8>,
        filter: FilterId,
        intensity_percent: f32,
    ) -> Result<Array3<u8>, FilterError> {
        let (height, width, _) = image.dim();
        let started = Instant::now();

        let result = guarded(filter, || {
            apply_filter_u8(image, filter, percent_to_intensity(intensity_percent))
        });

        match &result {
            Ok(_) => log::info!(
                "applied {} to {}x{} at {:.0}% in {:?}",
                filter,
                width,
                height,
                intensity_percent,
                started.elapsed()
            ),
            Err(e) => log::warn!("failed to apply {}: {}", filter, e),
        }

        result
    }

    /// Apply the filter at palette position `index`.
    pub fn apply_filter_by_index(
        &self,
        image: ArrayView3<u8>,
        index: usize,
        intensity_percent: f32,
    ) -> Result<Array3<u8>, FilterError> {
        let filter = FilterId::from_index(index)?;
        self.apply_filter(image, filter, intensity_percent)
    }

    /// Render every filter for a thumbnail strip, in palette order.
    ///
    /// Each filter is an independent engine call and they run on the rayon
    /// pool; a failure in one does not affect the others.
    pub fn render_previews(
        &self,
        image: ArrayView3<u8>,
        intensity_percent: f32,
    ) -> Vec<(FilterId, Result<Array3<u8>, FilterError>)> {
        FilterId::ALL
            .par_iter()
            .map(|&id| (id, self.apply_filter(image, id, intensity_percent)))
            .collect()
    }
}

/// Run `f`, turning a panic into [`FilterError::Internal`].
fn guarded<F>(filter: FilterId, f: F) -> Result<Array3<u8>, FilterError>
where
    F: FnOnce() -> Result<Array3<u8>, FilterError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            log::error!("{} panicked: {}", filter, message);
            Err(FilterError::Internal(message))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Array3<u8> {
        Array3::<u8>::from_shape_fn((6, 6, 4), |(y, x, c)| {
            if c == 3 {
                255
            } else {
                (y * 40 + x * 7 + c * 20) as u8
            }
        })
    }

    #[test]
    fn test_percent_conversion() {
        assert_eq!(percent_to_intensity(100.0), 1.0);
        assert_eq!(percent_to_intensity(50.0), 0.5);
        assert_eq!(percent_to_intensity(0.0), 0.0);
    }

    #[test]
    fn test_apply_matches_engine() {
        let img = sample();
        let repo = FilterRepository::new();

        let via_repo = repo.apply_filter(img.view(), FilterId::RetroFilm, 40.0).unwrap();
        let direct = apply_filter_u8(img.view(), FilterId::RetroFilm, 0.4).unwrap();

        assert_eq!(via_repo, direct);
    }

    #[test]
    fn test_unknown_index() {
        let img = sample();

        let err = FilterRepository::new()
            .apply_filter_by_index(img.view(), 42, 100.0)
            .unwrap_err();

        assert!(matches!(err, FilterError::UnknownFilter(42)));
    }

    #[test]
    fn test_previews_cover_palette_in_order() {
        let img = sample();

        let previews = FilterRepository::new().render_previews(img.view(), DEFAULT_INTENSITY_PERCENT);

        assert_eq!(previews.len(), 12);
        for ((id, result), expected) in previews.iter().zip(FilterId::ALL) {
            assert_eq!(*id, expected);
            assert_eq!(result.as_ref().unwrap().dim(), (6, 6, 4));
        }
    }

    #[test]
    fn test_malformed_input_is_failure_result() {
        let img = Array3::<u8>::zeros((4, 4, 2));

        let err = FilterRepository::new()
            .apply_filter(img.view(), FilterId::Vintage, 100.0)
            .unwrap_err();

        assert!(matches!(err, FilterError::UnsupportedChannels(2)));
    }

    #[test]
    fn test_panicking_stage_becomes_internal_error() {
        let result = guarded(FilterId::HdrPop, || panic!("stage exploded"));

        match result {
            Err(FilterError::Internal(msg)) => assert!(msg.contains("stage exploded")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_guarded_passes_through_results() {
        let img = sample();

        let ok = guarded(FilterId::Vintage, || Ok(img.clone())).unwrap();
        let err = guarded(FilterId::Vintage, || Err(FilterError::UnknownFilter(13))).unwrap_err();

        assert_eq!(ok, img);
        assert!(matches!(err, FilterError::UnknownFilter(13)));
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
    }
}
