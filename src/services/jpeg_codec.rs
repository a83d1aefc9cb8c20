//! Production codec on the `image` crate — pure Rust, statically linked.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Resize | `DynamicImage::resize` with `Lanczos3` (fit within box, never upscale) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at the preset quality |
//!
//! Output format is fixed JPEG: it is the one lossy format with a quality
//! dial every downstream consumer accepts. Alpha is flattened via RGB
//! conversion before encoding.

use super::{Codec, CodecError, TransformRequest};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Extensions whose decoders are compiled in and known to work.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, format)| format.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether a path carries an extension this codec can decode.
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
}

/// JPEG codec writing transformed images into a working directory.
///
/// Each transform produces a fresh file named after the source stem;
/// collisions within the directory get a numeric suffix so batch inputs
/// with identical stems stay distinct.
pub struct JpegCodec {
    work_dir: PathBuf,
}

impl JpegCodec {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    fn output_path_for(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        let first = self.work_dir.join(format!("{stem}-compressed.jpg"));
        if !first.exists() {
            return first;
        }
        let mut n = 1;
        loop {
            let candidate = self.work_dir.join(format!("{stem}-compressed-{n}.jpg"));
            if !candidate.exists() {
                return candidate;
            }
            n += 1;
        }
    }
}

impl Codec for JpegCodec {
    fn transform(&self, request: &TransformRequest) -> Result<PathBuf, CodecError> {
        let decoded = ImageReader::open(&request.source)
            .map_err(CodecError::Io)?
            .decode()
            .map_err(|e| {
                CodecError::Decode(format!("{}: {e}", request.source.display()))
            })?;

        let resized = match request.resize {
            // Fit within the target box, preserving aspect ratio. Targets
            // larger than the source leave it untouched (no upscaling).
            Some((width, height)) if decoded.width() > width || decoded.height() > height => {
                decoded.resize(width, height, FilterType::Lanczos3)
            }
            _ => decoded,
        };

        std::fs::create_dir_all(&self.work_dir)?;
        let output = self.output_path_for(&request.source);
        let file = File::create(&output)?;
        let encoder =
            JpegEncoder::new_with_quality(BufWriter::new(file), request.quality.jpeg_scale());
        // JPEG has no alpha channel; flatten to RGB before encoding.
        resized.to_rgb8().write_with_encoder(encoder).map_err(|e| {
            CodecError::Encode(format!("{}: {e}", output.display()))
        })?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::Quality;
    use image::RgbImage;
    use tempfile::TempDir;

    /// Write a noisy test image so quality levels produce distinct sizes.
    fn create_test_png(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            let v = ((x * 7919 + y * 104729) % 256) as u8;
            image::Rgb([v, v.wrapping_mul(3), v.wrapping_add(97)])
        });
        img.save(path).unwrap();
    }

    #[test]
    fn transform_encodes_jpeg_output() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("photo.png");
        create_test_png(&source, 64, 48);

        let codec = JpegCodec::new(tmp.path().join("work"));
        let output = codec
            .transform(&TransformRequest {
                source,
                resize: None,
                quality: Quality::new(0.7),
            })
            .unwrap();

        assert!(output.exists());
        assert_eq!(output.extension().unwrap(), "jpg");
        let dims = image::image_dimensions(&output).unwrap();
        assert_eq!(dims, (64, 48));
    }

    #[test]
    fn transform_resizes_to_fit_preserving_aspect() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("photo.png");
        create_test_png(&source, 64, 48);

        let codec = JpegCodec::new(tmp.path().join("work"));
        let output = codec
            .transform(&TransformRequest {
                source,
                resize: Some((32, 32)),
                quality: Quality::new(0.7),
            })
            .unwrap();

        // 64x48 into a 32x32 box → 32x24
        assert_eq!(image::image_dimensions(&output).unwrap(), (32, 24));
    }

    #[test]
    fn transform_never_upscales() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("photo.png");
        create_test_png(&source, 64, 48);

        let codec = JpegCodec::new(tmp.path().join("work"));
        let output = codec
            .transform(&TransformRequest {
                source,
                resize: Some((1000, 1000)),
                quality: Quality::new(0.7),
            })
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (64, 48));
    }

    #[test]
    fn lower_quality_yields_smaller_file() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("photo.png");
        create_test_png(&source, 128, 128);

        let codec = JpegCodec::new(tmp.path().join("work"));
        let request = |quality| TransformRequest {
            source: source.clone(),
            resize: None,
            quality: Quality::new(quality),
        };

        let high = codec.transform(&request(0.9)).unwrap();
        let low = codec.transform(&request(0.3)).unwrap();

        let high_size = std::fs::metadata(&high).unwrap().len();
        let low_size = std::fs::metadata(&low).unwrap().len();
        assert!(low_size < high_size);
    }

    #[test]
    fn colliding_stems_get_distinct_outputs() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("photo.png");
        create_test_png(&source, 16, 16);

        let codec = JpegCodec::new(tmp.path().join("work"));
        let request = TransformRequest {
            source,
            resize: None,
            quality: Quality::default(),
        };

        let first = codec.transform(&request).unwrap();
        let second = codec.transform(&request).unwrap();
        assert_ne!(first, second);
        assert!(first.exists() && second.exists());
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let codec = JpegCodec::new(tmp.path().join("work"));
        let result = codec.transform(&TransformRequest {
            source: tmp.path().join("nope.png"),
            resize: None,
            quality: Quality::default(),
        });
        assert!(matches!(result, Err(CodecError::Io(_))));
    }

    #[test]
    fn supported_extensions_include_the_basics() {
        assert!(is_supported_input(Path::new("a.jpg")));
        assert!(is_supported_input(Path::new("a.PNG")));
        assert!(!is_supported_input(Path::new("a.gif")));
        assert!(!is_supported_input(Path::new("noext")));
    }
}
