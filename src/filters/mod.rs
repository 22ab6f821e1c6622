//! Stage implementations used by the filter catalog.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGB float | (H, W, 3) | f32 | Red, green, blue, 0.0-1.0 |
//! | RGBA float | (H, W, 4) | f32 | RGB + alpha, 0.0-1.0 |
//!
//! 8-bit images are converted at the engine boundary with
//! [`grayscale::u8_to_f32`] and [`grayscale::f32_to_u8`].
//!
//! ## Architecture
//!
//! All stages follow these principles:
//! - **Pure** - Input view is never modified, a new array is returned
//! - **Dimension preserving** - Output shape equals input shape
//! - **Alpha preservation** - Alpha channel (if present) is always preserved
//! - **Clamped** - Every output value lies in 0.0-1.0

pub mod core;
pub mod color_matrix;
pub mod color_adjust;
pub mod grayscale;
pub mod blur;
pub mod sharpen;
pub mod vignette;
