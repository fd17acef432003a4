//! Charset-based password generator and strength estimate.

use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Generator settings. Defaults: 16 characters, every class enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    /// Candidate characters in lowercase, uppercase, digits, symbols order.
    pub fn charset(&self) -> String {
        [
            (self.lowercase, LOWERCASE),
            (self.uppercase, UPPERCASE),
            (self.numbers, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, chars)| *chars)
        .collect()
    }

    pub fn selected_classes(&self) -> usize {
        [self.uppercase, self.lowercase, self.numbers, self.symbols]
            .iter()
            .filter(|enabled| **enabled)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// No character class selected.
    EmptyCharset,
    InvalidLength { length: usize, min: usize, max: usize },
}

impl Display for PasswordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCharset => write!(f, "at least one character type must be selected"),
            Self::InvalidLength { length, min, max } => {
                write!(f, "password length must be within {min}..={max}, got {length}")
            }
        }
    }
}

impl Error for PasswordError {}

/// Draws `options.length` characters uniformly from the enabled charset.
pub fn generate_password<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, PasswordError> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&options.length) {
        return Err(PasswordError::InvalidLength {
            length: options.length,
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        });
    }

    let charset = options.charset().into_bytes();
    if charset.is_empty() {
        return Err(PasswordError::EmptyCharset);
    }

    Ok((0..options.length)
        .map(|_| char::from(charset[rng.gen_range(0..charset.len())]))
        .collect())
}

/// Strength label shown under the generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// CSS modifier class for the indicator bar.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
            Self::VeryStrong => "very-strong",
        }
    }
}

/// One point per length threshold (8, 12, 16) plus up to three for classes.
pub fn password_strength(options: &PasswordOptions) -> PasswordStrength {
    let length_points = [8, 12, 16]
        .iter()
        .filter(|threshold| options.length >= **threshold)
        .count();
    let score = length_points + options.selected_classes().min(3);

    match score {
        0 => PasswordStrength::Weak,
        1 => PasswordStrength::Fair,
        2 => PasswordStrength::Good,
        3 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    }
}
