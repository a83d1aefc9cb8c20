//! The compression workflow state machine.
//!
//! One [`CompressionWorkflow`] owns the whole select → compress → export
//! session. All I/O goes through the service traits in [`crate::services`],
//! so the state machine itself is plain synchronous logic:
//!
//! ```text
//! Idle --select(success)--> Selected
//! Selected --select(success)--> Selected (replaces sources, clears compressed)
//! Selected --compress(start)--> Compressing
//! Compressing --compress(success)--> Compressed
//! Compressing --compress(failure)--> Selected
//! Compressed --select(success)--> Selected
//! Compressed --export--> Compressed (no transition)
//! ```
//!
//! No state is terminal; a workflow instance is reusable for the whole
//! session. Commits are all-or-nothing on both sides: a selection is only
//! replaced once every picked image has been sized, and a compress run
//! that fails at any index discards all partial outputs.

use crate::presets::{CompressionLevel, SocialPreset};
use crate::services::{
    Codec, CodecError, Exporter, ExportError, FileSizer, PickError, Picker, Selection, SizeError,
    TransformRequest,
};
use crate::stats::Savings;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Cause of a failed selection: the picker itself or a size query.
#[derive(Error, Debug)]
pub enum SelectionFailure {
    #[error(transparent)]
    Pick(#[from] PickError),
    #[error(transparent)]
    Size(#[from] SizeError),
}

/// Cause of a failed per-image compression step.
#[derive(Error, Debug)]
pub enum CompressionFailure {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Size(#[from] SizeError),
}

#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Batch selection requested without the batch unlock.
    #[error("selecting multiple images requires batch mode to be unlocked")]
    PermissionDenied,
    #[error("failed to select images: {0}")]
    SelectionFailed(#[source] SelectionFailure),
    #[error("no image selected yet")]
    NoSourceSelected,
    /// Carries the 0-based index of the image that failed.
    #[error("failed to compress image {index}: {source}")]
    CompressionFailed {
        index: usize,
        #[source]
        source: CompressionFailure,
    },
    #[error("nothing to export yet, compress an image first")]
    NothingToExport,
    #[error("failed to export: {0}")]
    ExportFailed(#[from] ExportError),
}

/// Workflow stage. Ordered: `Idle → Selected → Compressing → Compressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowState {
    Idle,
    Selected,
    Compressing,
    Compressed,
}

/// A picked image with its measured size. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub path: PathBuf,
    pub bytes: u64,
}

/// A compressed output with its measured size. Derived data, recomputed
/// on every compress run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Result of a select operation. Cancellation is a success, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Cancelled,
    Selected { count: usize, total_bytes: u64 },
}

/// Result of an export. `Unavailable` is a success: the compressed
/// artifact exists and is valid, there is just nowhere to send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported { destination: PathBuf },
    Unavailable,
}

/// Per-image before/after entry in a [`CompressionReport`].
#[derive(Debug, Clone, Serialize)]
pub struct ImageResult {
    pub source: PathBuf,
    pub output: PathBuf,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    pub savings: Savings,
}

/// Summary of a successful compress run.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionReport {
    pub images: Vec<ImageResult>,
    pub original_total: u64,
    pub compressed_total: u64,
    pub savings: Savings,
}

/// The selection/compression state machine.
///
/// Owns the session state; every method treats itself as atomic with
/// respect to that state. The [`WorkflowState::Compressing`] stage exists
/// to make "no second compress while one is in flight" explicit — callers
/// disable the trigger, the workflow never queues.
pub struct CompressionWorkflow {
    state: WorkflowState,
    sources: Vec<SourceImage>,
    source_total: Option<u64>,
    compressed: Vec<CompressedImage>,
    compressed_total: Option<u64>,
    level: CompressionLevel,
    social: Option<SocialPreset>,
    batch_unlocked: bool,
}

impl CompressionWorkflow {
    pub fn new(batch_unlocked: bool) -> Self {
        Self {
            state: WorkflowState::Idle,
            sources: Vec::new(),
            source_total: None,
            compressed: Vec::new(),
            compressed_total: None,
            level: CompressionLevel::default(),
            social: None,
            batch_unlocked,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn sources(&self) -> &[SourceImage] {
        &self.sources
    }

    pub fn compressed(&self) -> &[CompressedImage] {
        &self.compressed
    }

    /// The active compression level. Exactly one is always active.
    pub fn level(&self) -> CompressionLevel {
        self.level
    }

    /// The active social preset, or `None` for original dimensions.
    pub fn social(&self) -> Option<SocialPreset> {
        self.social
    }

    pub fn source_total(&self) -> Option<u64> {
        self.source_total
    }

    pub fn compressed_total(&self) -> Option<u64> {
        self.compressed_total
    }

    /// Current savings, `"0"`-placeholder until both totals are known.
    pub fn savings(&self) -> Savings {
        Savings::compute(self.source_total, self.compressed_total)
    }

    /// Select images via the picker and record their sizes.
    ///
    /// All-or-nothing: every picked image is sized before the selection
    /// replaces the previous one, so a failure leaves prior state intact.
    /// Replacing a selection clears any compressed results.
    pub fn select_images(
        &mut self,
        picker: &impl Picker,
        sizer: &impl FileSizer,
        multiple: bool,
    ) -> Result<SelectOutcome, WorkflowError> {
        if multiple && !self.batch_unlocked {
            return Err(WorkflowError::PermissionDenied);
        }

        let paths = match picker
            .pick(multiple)
            .map_err(|e| WorkflowError::SelectionFailed(e.into()))?
        {
            Selection::Cancelled => return Ok(SelectOutcome::Cancelled),
            Selection::Picked(paths) => paths,
        };

        let mut sources = Vec::with_capacity(paths.len());
        let mut total: u64 = 0;
        for path in paths {
            let bytes = sizer
                .size_of(&path)
                .map_err(|e| WorkflowError::SelectionFailed(e.into()))?;
            total += bytes;
            sources.push(SourceImage { path, bytes });
        }

        self.sources = sources;
        self.source_total = Some(total);
        self.compressed.clear();
        self.compressed_total = None;
        self.state = WorkflowState::Selected;

        Ok(SelectOutcome::Selected {
            count: self.sources.len(),
            total_bytes: total,
        })
    }

    /// Compress every selected image with the given presets, in selection
    /// order.
    ///
    /// All-or-nothing across the batch: a failure at any index discards
    /// partial outputs, returns the workflow to `Selected`, and reports
    /// which index failed.
    pub fn compress(
        &mut self,
        codec: &impl Codec,
        sizer: &impl FileSizer,
        level: CompressionLevel,
        social: Option<SocialPreset>,
    ) -> Result<CompressionReport, WorkflowError> {
        if self.sources.is_empty() {
            return Err(WorkflowError::NoSourceSelected);
        }

        self.level = level;
        self.social = social;
        self.state = WorkflowState::Compressing;

        match self.run_compress(codec, sizer) {
            Ok(report) => {
                self.state = WorkflowState::Compressed;
                Ok(report)
            }
            Err(e) => {
                self.compressed.clear();
                self.compressed_total = None;
                self.state = WorkflowState::Selected;
                Err(e)
            }
        }
    }

    /// One-tap variant: balanced quality, original dimensions.
    pub fn auto_shrink(
        &mut self,
        codec: &impl Codec,
        sizer: &impl FileSizer,
    ) -> Result<CompressionReport, WorkflowError> {
        self.compress(codec, sizer, CompressionLevel::Balanced, None)
    }

    fn run_compress(
        &mut self,
        codec: &impl Codec,
        sizer: &impl FileSizer,
    ) -> Result<CompressionReport, WorkflowError> {
        let quality = self.level.preset().quality;
        let resize = self.social.map(SocialPreset::dimensions);

        let mut compressed = Vec::with_capacity(self.sources.len());
        let mut total: u64 = 0;
        for (index, source) in self.sources.iter().enumerate() {
            let request = TransformRequest {
                source: source.path.clone(),
                resize,
                quality,
            };
            let output = codec
                .transform(&request)
                .map_err(|e| WorkflowError::CompressionFailed {
                    index,
                    source: e.into(),
                })?;
            let bytes = sizer
                .size_of(&output)
                .map_err(|e| WorkflowError::CompressionFailed {
                    index,
                    source: e.into(),
                })?;
            total += bytes;
            compressed.push(CompressedImage {
                path: output,
                bytes,
            });
        }

        self.compressed = compressed;
        self.compressed_total = Some(total);
        Ok(self.report())
    }

    /// Build the per-image report from the committed selection and outputs.
    fn report(&self) -> CompressionReport {
        let images = self
            .sources
            .iter()
            .zip(&self.compressed)
            .map(|(source, output)| ImageResult {
                source: source.path.clone(),
                output: output.path.clone(),
                original_bytes: source.bytes,
                compressed_bytes: output.bytes,
                savings: Savings::compute(Some(source.bytes), Some(output.bytes)),
            })
            .collect();

        CompressionReport {
            images,
            original_total: self.source_total.unwrap_or(0),
            compressed_total: self.compressed_total.unwrap_or(0),
            savings: self.savings(),
        }
    }

    /// Export the compressed image at `index` (0 = first).
    ///
    /// Only valid in `Compressed`; the exporter being unavailable is a
    /// non-fatal outcome. No state transition either way.
    pub fn export_result(
        &mut self,
        exporter: &impl Exporter,
        index: usize,
    ) -> Result<ExportOutcome, WorkflowError> {
        if self.state != WorkflowState::Compressed {
            return Err(WorkflowError::NothingToExport);
        }
        let image = self
            .compressed
            .get(index)
            .ok_or(WorkflowError::NothingToExport)?;

        if !exporter.is_available() {
            return Ok(ExportOutcome::Unavailable);
        }

        let destination = exporter.export(&image.path)?;
        Ok(ExportOutcome::Exported { destination })
    }
}
