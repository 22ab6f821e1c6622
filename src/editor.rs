//! Editing workflow.
//!
//! An [`EditorSession`] holds one original image and the current filtered
//! version of it. Filters are always applied to the original, so changing
//! the intensity or switching filters never compounds earlier edits.

use std::path::PathBuf;

use ndarray::Array3;

use crate::engine::FilterId;
use crate::error::EditorError;
use crate::preferences::{PreferencesStore, RecentEdit};
use crate::repository::{FilterRepository, DEFAULT_INTENSITY_PERCENT};
use crate::store::{ImageSink, ImageSource};

/// Snapshot of the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub original: Option<Array3<u8>>,
    pub current: Option<Array3<u8>>,
    pub selected_filter: Option<FilterId>,
    /// Percent, 0-100.
    pub intensity: f32,
    pub saved_location: Option<String>,
    /// Last user-visible failure.
    pub error: Option<String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            original: None,
            current: None,
            selected_filter: None,
            intensity: DEFAULT_INTENSITY_PERCENT,
            saved_location: None,
            error: None,
        }
    }
}

#[derive(Debug)]
pub struct EditorSession<S> {
    store: S,
    repository: FilterRepository,
    default_intensity: f32,
    state: EditorState,
}

impl<S: ImageSource + ImageSink> EditorSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_default_intensity(store, DEFAULT_INTENSITY_PERCENT)
    }

    pub fn with_default_intensity(store: S, default_intensity: f32) -> Self {
        let default_intensity = default_intensity.clamp(0.0, 100.0);
        Self {
            store,
            repository: FilterRepository::new(),
            default_intensity,
            state: EditorState {
                intensity: default_intensity,
                ..EditorState::default()
            },
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_image(&mut self, location: &str) -> Result<(), EditorError> {
        match self.store.load(location) {
            Ok(image) => {
                self.state.original = Some(image.clone());
                self.state.current = Some(image);
                self.state.saved_location = None;
                self.state.error = None;
                Ok(())
            }
            Err(e) => Err(self.record(e.into())),
        }
    }

    /// Select the filter at palette position `index` and render it.
    pub fn apply_filter(&mut self, index: usize) -> Result<(), EditorError> {
        let filter = FilterId::from_index(index).map_err(|e| self.record(e.into()))?;
        let filtered = self.render(filter)?;
        self.state.selected_filter = Some(filter);
        self.state.current = Some(filtered);
        Ok(())
    }

    /// Change the intensity (percent, clamped to 0-100) and re-render the selected filter.
    pub fn update_intensity(&mut self, percent: f32) -> Result<(), EditorError> {
        self.state.intensity = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        if let Some(filter) = self.state.selected_filter {
            let filtered = self.render(filter)?;
            self.state.current = Some(filtered);
        }
        Ok(())
    }

    pub fn reset_to_original(&mut self) {
        self.state.current = self.state.original.clone();
        self.state.selected_filter = None;
        self.state.intensity = self.default_intensity;
    }

    /// Save the current image. If a filter is selected the save is recorded
    /// as a recent edit.
    pub fn save(&mut self, preferences: &PreferencesStore) -> Result<String, EditorError> {
        let Some(current) = self.state.current.as_ref() else {
            return Err(self.record(EditorError::NothingToSave));
        };

        let saved = self.store.save(current.view());
        let location = match saved {
            Ok(location) => location,
            Err(e) => return Err(self.record(e.into())),
        };
        self.state.saved_location = Some(location.clone());

        if let Some(filter) = self.state.selected_filter {
            preferences
                .save_recent_edit(RecentEdit::new(location.clone(), filter))
                .map_err(|e| self.record(e.into()))?;
        }

        Ok(location)
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// Filter the original image. Session state is left untouched.
    fn render(&mut self, filter: FilterId) -> Result<Array3<u8>, EditorError> {
        let Some(original) = self.state.original.as_ref() else {
            return Err(self.record(EditorError::NoImage));
        };

        let result = self
            .repository
            .apply_filter(original.view(), filter, self.state.intensity);
        result.map_err(|e| self.record(e.into()))
    }

    fn record(&mut self, error: EditorError) -> EditorError {
        log::warn!("editor: {}", error);
        self.state.error = Some(error.to_string());
        error
    }
}

impl EditorSession<crate::store::FileImageStore> {
    /// Write the current image to the share cache.
    pub fn prepare_for_sharing(&mut self) -> Result<PathBuf, EditorError> {
        let Some(current) = self.state.current.as_ref() else {
            return Err(self.record(EditorError::NothingToSave));
        };
        let exported = self.store.export_for_sharing(current.view());
        match exported {
            Ok(path) => Ok(path),
            Err(e) => Err(self.record(e.into())),
        }
    }
}
