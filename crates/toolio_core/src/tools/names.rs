//! Random name generator over fixed word pools.

use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIRST_NAMES: &[&str] = &[
    "Emma", "Liam", "Olivia", "Noah", "Ava", "Elijah", "Sophia", "Oliver", "Isabella", "Lucas",
    "Mia", "Mason", "Amelia", "Logan", "Harper", "Ethan", "Evelyn", "James", "Abigail", "Benjamin",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Taylor", "Thomas", "Hernandez", "Moore", "Martin",
    "Jackson", "Thompson", "White",
];
const BUSINESS_WORDS: &[&str] = &[
    "Tech", "Innovation", "Global", "Solutions", "Digital", "Creative", "Network", "Systems",
    "Enterprise", "Group", "Industries", "Corporation", "Partners", "Services", "Technologies",
    "Ventures", "Holdings", "International", "Media", "Works",
];
const DOMAIN_SUFFIXES: &[&str] = &[
    "io", "ai", "tech", "app", "dev", "cloud", "studio", "labs", "hub", "digital", "online",
    "net", "co", "space", "tools", "smart", "next", "prime", "alpha", "beta",
];

pub const DEFAULT_NAME_COUNT: usize = 5;
pub const MAX_NAME_COUNT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameKind {
    First,
    Last,
    #[default]
    Full,
    /// `First Business`, e.g. `Mia Ventures`.
    Business,
    /// `business.tld`, e.g. `media.labs`.
    Domain,
}

impl NameKind {
    pub fn parse(value: &str) -> Result<Self, NameError> {
        match value.trim() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "full" => Ok(Self::Full),
            "business" => Ok(Self::Business),
            "domain" => Ok(Self::Domain),
            other => Err(NameError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    UnknownKind(String),
    InvalidCount { count: usize, max: usize },
}

impl Display for NameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKind(value) => write!(f, "unknown name type `{value}`"),
            Self::InvalidCount { count, max } => {
                write!(f, "name count must be within 1..={max}, got {count}")
            }
        }
    }
}

impl Error for NameError {}

/// Generates `count` names of one kind.
pub fn generate_names<R: Rng + ?Sized>(
    kind: NameKind,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, NameError> {
    if !(1..=MAX_NAME_COUNT).contains(&count) {
        return Err(NameError::InvalidCount {
            count,
            max: MAX_NAME_COUNT,
        });
    }
    Ok((0..count).map(|_| generate_name(kind, rng)).collect())
}

pub fn generate_name<R: Rng + ?Sized>(kind: NameKind, rng: &mut R) -> String {
    match kind {
        NameKind::First => pick(FIRST_NAMES, rng).to_string(),
        NameKind::Last => pick(LAST_NAMES, rng).to_string(),
        NameKind::Full => format!("{} {}", pick(FIRST_NAMES, rng), pick(LAST_NAMES, rng)),
        NameKind::Business => format!("{} {}", pick(FIRST_NAMES, rng), pick(BUSINESS_WORDS, rng)),
        NameKind::Domain => format!(
            "{}.{}",
            pick(BUSINESS_WORDS, rng).to_lowercase(),
            pick(DOMAIN_SUFFIXES, rng)
        ),
    }
}

fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}
