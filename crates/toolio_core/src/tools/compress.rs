//! JPEG re-compression and file-size formatting for the image compressor.

use crate::tools::codec::{ensure_image_mime, CodecError};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Quality slider default.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

#[derive(Debug)]
pub enum CompressError {
    NotAnImage(String),
    EmptyFile,
    /// Quality outside `1..=100`.
    InvalidQuality(u8),
    /// Source bytes are not a decodable image.
    Decode(ImageError),
    Encode(ImageError),
}

impl Display for CompressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnImage(mime) => write!(f, "expected an image file, got `{mime}`"),
            Self::EmptyFile => write!(f, "image file is empty"),
            Self::InvalidQuality(value) => {
                write!(f, "quality must be within 1..=100, got {value}")
            }
            Self::Decode(err) => write!(f, "failed to read image: {err}"),
            Self::Encode(err) => write!(f, "compression failed: {err}"),
        }
    }
}

impl Error for CompressError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) | Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

/// JPEG output plus the numbers shown in the comparison panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub original_size: usize,
    pub compressed_size: usize,
    /// Compressed size as a percentage of the original.
    pub ratio_percent: f64,
}

impl CompressedImage {
    /// Ratio with one decimal, e.g. `37.5%`.
    pub fn ratio_label(&self) -> String {
        format!("{:.1}%", self.ratio_percent)
    }
}

/// Decodes any supported image and re-encodes it as JPEG at `quality`.
///
/// Transparency is dropped; JPEG has no alpha channel.
pub fn compress_to_jpeg(
    bytes: &[u8],
    mime: &str,
    quality: u8,
) -> Result<CompressedImage, CompressError> {
    ensure_image_mime(mime).map_err(|err| match err {
        CodecError::NotAnImage(mime) => CompressError::NotAnImage(mime),
        _ => CompressError::NotAnImage(mime.to_string()),
    })?;
    if bytes.is_empty() {
        return Err(CompressError::EmptyFile);
    }
    if !(1..=100).contains(&quality) {
        return Err(CompressError::InvalidQuality(quality));
    }

    let rgb = image::load_from_memory(bytes)
        .map_err(CompressError::Decode)?
        .to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut output = Vec::new();
    JpegEncoder::new_with_quality(&mut output, quality)
        .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(CompressError::Encode)?;

    let compressed = CompressedImage {
        width,
        height,
        original_size: bytes.len(),
        compressed_size: output.len(),
        ratio_percent: output.len() as f64 / bytes.len() as f64 * 100.0,
        bytes: output,
    };
    info!(
        "event=image_compress module=tools status=ok width={width} height={height} quality={quality} original_bytes={} compressed_bytes={}",
        compressed.original_size, compressed.compressed_size
    );
    Ok(compressed)
}

/// Human-readable size: `Bytes`, `KB`, `MB` or `GB`, at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::format_file_size;

    #[test]
    fn file_size_drops_trailing_zeros() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_288_490), "1.23 MB");
    }

    #[test]
    fn file_size_caps_at_gigabytes() {
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }
}
