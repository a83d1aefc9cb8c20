//! Filesystem-backed services: size queries and directory export.

use super::{ExportError, Exporter, FileSizer, SizeError};
use std::path::{Path, PathBuf};

/// Size query via `std::fs::metadata`.
pub struct FsSizer;

impl FileSizer for FsSizer {
    fn size_of(&self, path: &Path) -> Result<u64, SizeError> {
        std::fs::metadata(path)
            .map(|meta| meta.len())
            .map_err(|source| SizeError::Stat {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Exporter that copies compressed results into a destination directory.
///
/// The CLI stand-in for the platform share sheet: "export" means the file
/// lands somewhere the user asked for.
pub struct DirExporter {
    destination: PathBuf,
}

impl DirExporter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

impl Exporter for DirExporter {
    fn is_available(&self) -> bool {
        // A file squatting on the destination path makes it unusable;
        // a missing directory is fine, export creates it.
        !self.destination.is_file()
    }

    fn export(&self, path: &Path) -> Result<PathBuf, ExportError> {
        let name = path
            .file_name()
            .ok_or_else(|| ExportError::Rejected(path.to_path_buf()))?;
        std::fs::create_dir_all(&self.destination)?;
        let destination = self.destination.join(name);
        std::fs::copy(path, &destination)?;
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fs_sizer_reports_file_length() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.bin");
        std::fs::write(&path, vec![0u8; 1536]).unwrap();

        assert_eq!(FsSizer.size_of(&path).unwrap(), 1536);
    }

    #[test]
    fn fs_sizer_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = FsSizer.size_of(&tmp.path().join("missing.bin"));
        assert!(matches!(result, Err(SizeError::Stat { .. })));
    }

    #[test]
    fn dir_exporter_copies_into_destination() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("photo.jpg");
        std::fs::write(&source, b"jpeg bytes").unwrap();

        let exporter = DirExporter::new(tmp.path().join("out"));
        assert!(exporter.is_available());

        let exported = exporter.export(&source).unwrap();
        assert_eq!(exported, tmp.path().join("out/photo.jpg"));
        assert_eq!(std::fs::read(&exported).unwrap(), b"jpeg bytes");
        // Source stays in place
        assert!(source.exists());
    }

    #[test]
    fn dir_exporter_creates_missing_destination() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("photo.jpg");
        std::fs::write(&source, b"x").unwrap();

        let exporter = DirExporter::new(tmp.path().join("deep/nested/out"));
        let exported = exporter.export(&source).unwrap();
        assert!(exported.exists());
    }

    #[test]
    fn dir_exporter_unavailable_when_destination_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("out");
        std::fs::write(&blocker, b"").unwrap();

        let exporter = DirExporter::new(&blocker);
        assert!(!exporter.is_available());
    }
}
