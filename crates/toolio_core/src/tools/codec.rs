//! Base64 text codec and image data URLs.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::{DecodeError, Engine};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::string::FromUtf8Error;

#[derive(Debug)]
pub enum CodecError {
    /// Nothing to encode or decode after trimming.
    EmptyInput,
    InvalidBase64(DecodeError),
    /// Decoded bytes are not UTF-8 text.
    InvalidUtf8(FromUtf8Error),
    /// Mime type does not start with `image/`.
    NotAnImage(String),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input must not be empty"),
            Self::InvalidBase64(err) => write!(f, "invalid Base64 string: {err}"),
            Self::InvalidUtf8(err) => write!(f, "decoded data is not UTF-8 text: {err}"),
            Self::NotAnImage(mime) => write!(f, "expected an image file, got `{mime}`"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBase64(err) => Some(err),
            Self::InvalidUtf8(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecodeError> for CodecError {
    fn from(value: DecodeError) -> Self {
        Self::InvalidBase64(value)
    }
}

impl From<FromUtf8Error> for CodecError {
    fn from(value: FromUtf8Error) -> Self {
        Self::InvalidUtf8(value)
    }
}

/// Encodes the trimmed text's UTF-8 bytes as standard Base64.
pub fn encode_text(text: &str) -> Result<String, CodecError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    Ok(BASE64.encode(text.as_bytes()))
}

/// Decodes standard Base64 into UTF-8 text.
pub fn decode_text(encoded: &str) -> Result<String, CodecError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let bytes = BASE64.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}

/// Rejects anything whose mime type is not `image/*`.
pub fn ensure_image_mime(mime: &str) -> Result<(), CodecError> {
    if mime.trim().starts_with("image/") {
        Ok(())
    } else {
        Err(CodecError::NotAnImage(mime.to_string()))
    }
}

/// `data:{mime};base64,{payload}` for an image file.
pub fn image_data_url(mime: &str, bytes: &[u8]) -> Result<String, CodecError> {
    ensure_image_mime(mime)?;
    if bytes.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    Ok(format!("data:{};base64,{}", mime.trim(), BASE64.encode(bytes)))
}
