//! WebAssembly exports.
//!
//! Images cross the boundary as flat RGBA buffers
//! (length = width * height * 4). Both bit depths are exposed.

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::engine::{apply_filter_f32, apply_filter_u8, FilterId};

fn to_js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Apply a palette filter to a flat RGBA u8 buffer.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `filter_index` - Palette position, 0-11
/// * `intensity` - Blend factor, 0.0-1.0
///
/// # Returns
/// Flat array of filtered RGBA bytes
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    filter_index: usize,
    intensity: f32,
) -> Result<Vec<u8>, JsValue> {
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec()).map_err(to_js_err)?;
    let filter = FilterId::from_index(filter_index).map_err(to_js_err)?;

    let result = apply_filter_u8(input.view(), filter, intensity).map_err(to_js_err)?;
    Ok(result.into_raw_vec_and_offset().0)
}

/// Apply a palette filter to a flat RGBA f32 buffer (values 0.0-1.0).
#[wasm_bindgen]
pub fn apply_filter_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    filter_index: usize,
    intensity: f32,
) -> Result<Vec<f32>, JsValue> {
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec()).map_err(to_js_err)?;
    let filter = FilterId::from_index(filter_index).map_err(to_js_err)?;

    let result = apply_filter_f32(input.view(), filter, intensity).map_err(to_js_err)?;
    Ok(result.into_raw_vec_and_offset().0)
}

/// Display names in palette order.
#[wasm_bindgen]
pub fn filter_names_wasm() -> Vec<String> {
    FilterId::ALL
        .iter()
        .map(|id| id.display_name().to_string())
        .collect()
}
