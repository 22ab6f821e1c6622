//! photofilter
//!
//! A fixed palette of 12 photo filters, each a short linear pipeline of
//! image-processing stages, plus the bookkeeping around an editing session:
//! loading and saving images, and a capped list of recent edits.
//!
//! ## Image Format
//! Images are `ndarray` arrays shaped (height, width, channels):
//! - **RGB**: (height, width, 3)
//! - **RGBA**: (height, width, 4) - alpha is preserved by every stage
//!
//! Both bit depths are supported at the engine boundary:
//! - `u8`: 8-bit per channel (0-255)
//! - `f32`: Float per channel (0.0-1.0)
//!
//! ## Layout
//! - [`filters`] - the individual stages (color matrix, adjustments, blur, ...)
//! - [`engine`] - filter catalog and `apply`
//! - [`repository`] - UI boundary: percent intensities, panic isolation, previews
//! - [`store`], [`preferences`], [`editor`] - persistence and the editing workflow

pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod filters;
pub mod preferences;
pub mod repository;
pub mod store;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::AppConfig;
pub use editor::{EditorSession, EditorState};
pub use engine::{apply_filter_f32, apply_filter_u8, FilterId, Stage};
pub use error::{EditorError, FilterError, PreferencesError, StoreError};
pub use preferences::{PreferencesStore, RecentEdit};
pub use repository::FilterRepository;
pub use store::{FileImageStore, ImageSink, ImageSource};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::engine::{apply_filter_f32 as apply_f32, apply_filter_u8 as apply_u8, FilterId};
    use crate::error::FilterError;

    fn to_py_err(e: FilterError) -> PyErr {
        PyValueError::new_err(e.to_string())
    }

    /// Apply a palette filter to an RGB/RGBA u8 image.
    ///
    /// # Arguments
    /// * `image` - (height, width, 3 or 4) u8 array
    /// * `filter_index` - Palette position, 0-11
    /// * `intensity` - Blend factor, 0.0-1.0
    #[pyfunction]
    #[pyo3(signature = (image, filter_index, intensity=1.0))]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        filter_index: usize,
        intensity: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let filter = FilterId::from_index(filter_index).map_err(to_py_err)?;
        let result = apply_u8(image.as_array(), filter, intensity).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// Apply a palette filter to an RGB/RGBA f32 image (values 0.0-1.0).
    #[pyfunction]
    #[pyo3(signature = (image, filter_index, intensity=1.0))]
    pub fn apply_filter_f32<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        filter_index: usize,
        intensity: f32,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let filter = FilterId::from_index(filter_index).map_err(to_py_err)?;
        let result = apply_f32(image.as_array(), filter, intensity).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// Display names in palette order.
    #[pyfunction]
    pub fn filter_names() -> Vec<&'static str> {
        FilterId::ALL.iter().map(|id| id.display_name()).collect()
    }

    #[pymodule]
    pub fn photofilter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(apply_filter_f32, m)?)?;
        m.add_function(wrap_pyfunction!(filter_names, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::photofilter;
