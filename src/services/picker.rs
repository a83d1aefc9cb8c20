//! Path-based image picker.
//!
//! The CLI stand-in for a platform media picker: candidate paths arrive
//! up front (command-line arguments), and `pick` validates and expands
//! them. Directories are walked recursively and filtered to extensions
//! the codec can decode, sorted by name for deterministic ordering.
//! Explicit file arguments keep their argument order.

use super::{PickError, Picker, Selection};
use crate::services::jpeg_codec::is_supported_input;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct PathPicker {
    candidates: Vec<PathBuf>,
}

impl PathPicker {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    fn expand_directory(dir: &Path) -> Result<Vec<PathBuf>, PickError> {
        let mut images = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| PickError::Io(e.into()))?;
            if entry.file_type().is_file() && is_supported_input(entry.path()) {
                images.push(entry.path().to_path_buf());
            }
        }
        if images.is_empty() {
            return Err(PickError::EmptyDirectory(dir.to_path_buf()));
        }
        Ok(images)
    }
}

impl Picker for PathPicker {
    fn pick(&self, multiple: bool) -> Result<Selection, PickError> {
        let mut picked = Vec::new();
        for candidate in &self.candidates {
            if !candidate.exists() {
                return Err(PickError::NotFound(candidate.clone()));
            }
            if candidate.is_dir() {
                picked.extend(Self::expand_directory(candidate)?);
            } else if is_supported_input(candidate) {
                picked.push(candidate.clone());
            } else {
                return Err(PickError::Unsupported(candidate.clone()));
            }
        }

        if picked.is_empty() {
            return Ok(Selection::Cancelled);
        }
        if !multiple {
            picked.truncate(1);
        }
        Ok(Selection::Picked(picked))
    }
}
