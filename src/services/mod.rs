//! External service traits consumed by the workflow.
//!
//! The workflow core never touches pixels, the filesystem, or the export
//! destination directly. It talks to four narrow capabilities:
//!
//! | Trait | Contract |
//! |---|---|
//! | [`Picker`] | `pick(multiple)` → image paths, or user cancellation |
//! | [`FileSizer`] | `size_of(path)` → non-negative byte count |
//! | [`Codec`] | `transform(request)` → path of the newly encoded image |
//! | [`Exporter`] | `is_available()` + `export(path)` → destination path |
//!
//! Production implementations live in the submodules; workflow tests use
//! the recording mocks in this module's test support so state-machine
//! logic can be exercised without decoding a single image.

pub mod fs;
pub mod jpeg_codec;
pub mod picker;

pub use fs::{DirExporter, FsSizer};
pub use jpeg_codec::JpegCodec;
pub use picker::PathPicker;

use crate::presets::Quality;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no such file: {0}")]
    NotFound(PathBuf),
    #[error("not a supported image: {0}")]
    Unsupported(PathBuf),
    #[error("no images found under {0}")]
    EmptyDirectory(PathBuf),
}

#[derive(Error, Debug)]
pub enum SizeError {
    #[error("could not stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export destination rejected {0}")]
    Rejected(PathBuf),
}

/// Outcome of a pick request. Cancellation is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Picked(Vec<PathBuf>),
    Cancelled,
}

/// One codec invocation: optional resize, then lossy encode.
///
/// `resize` is the target box as (width, height); the codec fits the
/// image inside it preserving aspect ratio. `None` keeps original
/// dimensions. Output format is fixed JPEG.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest {
    pub source: PathBuf,
    pub resize: Option<(u32, u32)>,
    pub quality: Quality,
}

/// Image selection service.
pub trait Picker {
    /// Request one image, or many when `multiple` is set.
    fn pick(&self, multiple: bool) -> Result<Selection, PickError>;
}

/// File-size query service.
pub trait FileSizer {
    fn size_of(&self, path: &Path) -> Result<u64, SizeError>;
}

/// Image transform service: resize + lossy encode.
pub trait Codec {
    /// Execute the transform and return the path of the new image.
    fn transform(&self, request: &TransformRequest) -> Result<PathBuf, CodecError>;
}

/// Share/save service for compressed results.
pub trait Exporter {
    /// Whether the export destination can currently accept files.
    fn is_available(&self) -> bool;

    /// Export the file and return where it landed.
    fn export(&self, path: &Path) -> Result<PathBuf, ExportError>;
}
