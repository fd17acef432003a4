//! User-facing transient notifications (toasts).
//!
//! # Responsibility
//! - Turn core errors and completed actions into short messages with a level.
//! - Keep wording in one place so every front end shows the same text.
//!
//! # Invariants
//! - Validation and not-found errors are `Warning`; environment errors are `Error`.
//! - Messages never embed user input.

use crate::repo::kv_repo::RepoError;
use crate::search::catalog::CatalogError;
use crate::service::todo_store::TodoError;
use crate::text::minify::MinifyError;
use crate::text::summarizer::SummaryError;
use crate::tools::codec::CodecError;
use crate::tools::color::ColorError;
use crate::tools::compress::CompressError;
use crate::tools::names::NameError;
use crate::tools::password::PasswordError;
use crate::tools::qr::QrError;
use crate::tools::units::ConversionError;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Font Awesome icon name, without the `fa-` prefix.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "info-circle",
            Self::Success => "check-circle",
            Self::Warning => "exclamation-triangle",
            Self::Error => "exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }

    /// Shown when a change applied in memory but could not be saved.
    pub fn persist_warning(err: &RepoError) -> Self {
        match err {
            RepoError::QuotaExceeded { .. } => {
                Self::warning("Storage is full; changes were not saved")
            }
            _ => Self::warning("Changes could not be saved"),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)
    }
}

impl From<&SummaryError> for Notice {
    fn from(value: &SummaryError) -> Self {
        match value {
            SummaryError::EmptyInput => Self::warning("Please enter some text to summarize"),
            SummaryError::InvalidPercent(_) => {
                Self::warning("Summary length must be between 1% and 100%")
            }
        }
    }
}

impl From<&TodoError> for Notice {
    fn from(value: &TodoError) -> Self {
        match value {
            TodoError::Validation(_) => Self::warning("Please enter a todo item"),
            TodoError::NotFound(_) => Self::warning("That todo no longer exists"),
        }
    }
}

impl From<&RepoError> for Notice {
    fn from(value: &RepoError) -> Self {
        match value {
            RepoError::QuotaExceeded { .. } => Self::error("Storage is full"),
            _ => Self::error("Storage is unavailable"),
        }
    }
}

impl From<&PasswordError> for Notice {
    fn from(value: &PasswordError) -> Self {
        match value {
            PasswordError::EmptyCharset => {
                Self::warning("Please select at least one character type")
            }
            PasswordError::InvalidLength { min, max, .. } => {
                Self::warning(format!("Password length must be between {min} and {max}"))
            }
        }
    }
}

impl From<&NameError> for Notice {
    fn from(value: &NameError) -> Self {
        match value {
            NameError::UnknownKind(_) => Self::warning("Please select a name type"),
            NameError::InvalidCount { max, .. } => {
                Self::warning(format!("Please choose between 1 and {max} names"))
            }
        }
    }
}

impl From<&ConversionError> for Notice {
    fn from(value: &ConversionError) -> Self {
        match value {
            ConversionError::InvalidValue(_) => Self::warning("Please enter a valid number"),
            ConversionError::UnknownCategory(_) | ConversionError::UnknownUnit { .. } => {
                Self::warning("Please select valid units")
            }
        }
    }
}

impl From<&CodecError> for Notice {
    fn from(value: &CodecError) -> Self {
        match value {
            CodecError::EmptyInput => Self::warning("Please enter text to encode"),
            CodecError::InvalidBase64(_) | CodecError::InvalidUtf8(_) => {
                Self::error("Invalid Base64 string")
            }
            CodecError::NotAnImage(_) => Self::error("Please select an image file"),
        }
    }
}

impl From<&ColorError> for Notice {
    fn from(value: &ColorError) -> Self {
        match value {
            ColorError::InvalidHex(_) => Self::warning("Please enter a valid hex color"),
        }
    }
}

impl From<&MinifyError> for Notice {
    fn from(value: &MinifyError) -> Self {
        match value {
            MinifyError::EmptyInput => Self::warning("Please enter code to minify"),
            MinifyError::UnsupportedKind(_) => Self::error("Failed to minify code"),
        }
    }
}

impl From<&CompressError> for Notice {
    fn from(value: &CompressError) -> Self {
        match value {
            CompressError::NotAnImage(_) => Self::error("Please select an image file"),
            CompressError::EmptyFile => Self::warning("Please select an image first"),
            CompressError::InvalidQuality(_) => {
                Self::warning("Quality must be between 1% and 100%")
            }
            CompressError::Decode(_) | CompressError::Encode(_) => {
                Self::error("Compression failed")
            }
        }
    }
}

impl From<&QrError> for Notice {
    fn from(value: &QrError) -> Self {
        match value {
            QrError::EmptyInput => Self::warning("Please enter text or URL"),
            QrError::InvalidCellSize | QrError::Render(_) => {
                Self::error("Failed to generate QR code")
            }
        }
    }
}

impl From<&CatalogError> for Notice {
    fn from(value: &CatalogError) -> Self {
        match value {
            CatalogError::UnknownCategory(_) => Self::warning("Unknown category"),
            CatalogError::UnknownTool(_) => Self::warning("Tool not found"),
        }
    }
}
