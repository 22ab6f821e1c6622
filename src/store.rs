//! Image source and sink.
//!
//! The engine only sees `Array3<u8>` pixel buffers shaped
//! `(height, width, 4)`. This module is the file-system edge: it decodes
//! whatever the `image` crate can read into that layout and encodes
//! results back to JPEG.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage, RgbaImage};
use ndarray::{Array3, ArrayView3};

use crate::config::AppConfig;
use crate::error::StoreError;

const FILE_URI_PREFIX: &str = "file://";
const SHARED_IMAGES_DIR: &str = "shared_images";

/// Supplies a decoded pixel buffer from a location.
pub trait ImageSource {
    fn load(&self, location: &str) -> Result<Array3<u8>, StoreError>;
}

/// Persists a pixel buffer and returns the location it was written to.
pub trait ImageSink {
    fn save(&self, image: ArrayView3<u8>) -> Result<String, StoreError>;
}

/// Reads from any path, writes JPEGs into an output directory.
#[derive(Debug, Clone)]
pub struct FileImageStore {
    output_dir: PathBuf,
    cache_dir: PathBuf,
    jpeg_quality: u8,
}

impl FileImageStore {
    pub fn new(output_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>, jpeg_quality: u8) -> Self {
        Self {
            output_dir: output_dir.into(),
            cache_dir: cache_dir.into(),
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.output_dir, &config.cache_dir, config.jpeg_quality)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write a temporary JPEG copy for handing to another application.
    pub fn export_for_sharing(&self, image: ArrayView3<u8>) -> Result<PathBuf, StoreError> {
        let dir = self.cache_dir.join(SHARED_IMAGES_DIR);
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("shared_image_{}.jpg", Utc::now().timestamp_millis()));
        write_jpeg(&path, image, self.jpeg_quality)?;
        log::info!("exported share copy to {}", path.display());
        Ok(path)
    }

    fn next_output_path(&self) -> PathBuf {
        let stem = Local::now().format("IMG_%Y%m%d_%H%M%S_%3f").to_string();
        let mut path = self.output_dir.join(format!("{stem}.jpg"));
        let mut n = 1;
        while path.exists() {
            path = self.output_dir.join(format!("{stem}_{n}.jpg"));
            n += 1;
        }
        path
    }
}

impl ImageSource for FileImageStore {
    fn load(&self, location: &str) -> Result<Array3<u8>, StoreError> {
        let path = Path::new(location.strip_prefix(FILE_URI_PREFIX).unwrap_or(location));
        if !path.exists() {
            return Err(StoreError::NotFound(location.to_string()));
        }

        let decoded = image::open(path)?.to_rgba8();
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        rgba_image_to_array(decoded)
    }
}

impl ImageSink for FileImageStore {
    fn save(&self, image: ArrayView3<u8>) -> Result<String, StoreError> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.next_output_path();
        write_jpeg(&path, image, self.jpeg_quality)?;
        log::info!("saved edit to {}", path.display());
        Ok(path.to_string_lossy().into_owned())
    }
}

/// Convert a decoded RGBA image to a `(height, width, 4)` array.
pub fn rgba_image_to_array(image: RgbaImage) -> Result<Array3<u8>, StoreError> {
    let (width, height) = image.dimensions();
    Array3::from_shape_vec((height as usize, width as usize, 4), image.into_raw())
        .map_err(|e| StoreError::InvalidBuffer(e.to_string()))
}

/// Convert an RGB or RGBA array to an RGB image, dropping alpha.
pub fn array_to_rgb_image(image: ArrayView3<u8>) -> Result<RgbImage, StoreError> {
    let (height, width, channels) = image.dim();
    if channels != 3 && channels != 4 {
        return Err(StoreError::InvalidBuffer(format!(
            "expected 3 or 4 channels, got {channels}"
        )));
    }
    if height == 0 || width == 0 {
        return Err(StoreError::InvalidBuffer(format!("empty image {width}x{height}")));
    }

    Ok(RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let (x, y) = (x as usize, y as usize);
        Rgb([image[[y, x, 0]], image[[y, x, 1]], image[[y, x, 2]]])
    }))
}

fn write_jpeg(path: &Path, image: ArrayView3<u8>, quality: u8) -> Result<(), StoreError> {
    let rgb = array_to_rgb_image(image)?;
    let mut writer = BufWriter::new(File::create(path)?);
    JpegEncoder::new_with_quality(&mut writer, quality).encode_image(&rgb)?;
    writer.flush()?;
    Ok(())
}
