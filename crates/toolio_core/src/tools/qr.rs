//! QR-style placeholder pattern.
//!
//! This is not a QR encoder. The grid is derived from a 32-bit string hash
//! and only looks like a QR code; it is not scannable.
//!
//! # Invariants
//! - The same text always yields the same grid.
//! - The grid is always `QR_GRID_CELLS` x `QR_GRID_CELLS`.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Cells per side (a 200px canvas at 10px per cell).
pub const QR_GRID_CELLS: u32 = 20;
pub const DEFAULT_CELL_PX: u32 = 10;

const DARK: u8 = 0x00;
const LIGHT: u8 = 0xff;

#[derive(Debug)]
pub enum QrError {
    EmptyInput,
    /// Cell size of zero.
    InvalidCellSize,
    Render(ImageError),
}

impl Display for QrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "text or url must not be empty"),
            Self::InvalidCellSize => write!(f, "cell size must be at least 1px"),
            Self::Render(err) => write!(f, "failed to render png: {err}"),
        }
    }
}

impl Error for QrError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrPattern {
    hash: i32,
}

impl QrPattern {
    /// Builds the pattern for trimmed `text`.
    pub fn from_text(text: &str) -> Result<Self, QrError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QrError::EmptyInput);
        }
        Ok(Self {
            hash: string_hash(text),
        })
    }

    pub fn hash(&self) -> i32 {
        self.hash
    }

    /// Whether cell `(x, y)` is filled. Coordinates outside the grid are light.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        if x >= QR_GRID_CELLS || y >= QR_GRID_CELLS {
            return false;
        }
        let value = i64::from(self.hash) + i64::from(x * y);
        value.rem_euclid(2) == 1
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        (0..QR_GRID_CELLS)
            .map(|y| (0..QR_GRID_CELLS).map(|x| self.is_dark(x, y)).collect())
            .collect()
    }

    /// Side length in pixels for `cell_px`.
    pub fn image_size(cell_px: u32) -> u32 {
        QR_GRID_CELLS * cell_px
    }

    /// Encodes the grid as an 8-bit grayscale PNG.
    pub fn render_png(&self, cell_px: u32) -> Result<Vec<u8>, QrError> {
        if cell_px == 0 {
            return Err(QrError::InvalidCellSize);
        }
        let side = Self::image_size(cell_px);
        let mut pixels = Vec::with_capacity((side * side) as usize);
        for py in 0..side {
            for px in 0..side {
                let dark = self.is_dark(px / cell_px, py / cell_px);
                pixels.push(if dark { DARK } else { LIGHT });
            }
        }

        let mut output = Vec::new();
        PngEncoder::new(&mut output)
            .write_image(&pixels, side, side, ExtendedColorType::L8)
            .map_err(QrError::Render)?;
        Ok(output)
    }
}

/// `h = h * 31 + unit` over UTF-16 code units with 32-bit wrapping.
fn string_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}
