//! Domain Value Objects
//!
//! Immutable value types for the pets domain.

use derive_more::Display;
use serde::Serialize;
use std::fmt;

/// Maximum length for a pet name (in characters, after trimming)
pub const PET_NAME_MAX_LENGTH: usize = 100;

/// Error returned when pet name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetNameError {
    /// Name is empty or whitespace only
    Empty,

    /// Name is longer than PET_NAME_MAX_LENGTH
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PetNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pet name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Pet name is too long ({length} chars, maximum {max})")
            }
        }
    }
}

impl std::error::Error for PetNameError {}

/// Validated pet name
///
/// # Invariants
/// - Trimmed
/// - Non-empty
/// - At most PET_NAME_MAX_LENGTH characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct PetName(String);

impl PetName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, PetNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PetNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > PET_NAME_MAX_LENGTH {
            return Err(PetNameError::TooLong {
                length,
                max: PET_NAME_MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from a stored value (assumes already validated)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Change applied to a pet's stats by one interaction
///
/// Deltas are added without clamping; levels may go negative or grow
/// without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDelta {
    pub hunger: i32,
    pub happiness: i32,
}

impl StatDelta {
    pub const fn new(hunger: i32, happiness: i32) -> Self {
        Self { hunger, happiness }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let name = PetName::new("  Rex  ").unwrap();
        assert_eq!(name.as_str(), "Rex");
        assert_eq!(name.to_string(), "Rex");
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(PetName::new(""), Err(PetNameError::Empty));
        assert_eq!(PetName::new("   \t"), Err(PetNameError::Empty));
    }

    #[test]
    fn test_length_limit_counts_chars() {
        let max = "ñ".repeat(PET_NAME_MAX_LENGTH);
        assert!(PetName::new(&max).is_ok());

        let too_long = "a".repeat(PET_NAME_MAX_LENGTH + 1);
        assert_eq!(
            PetName::new(&too_long),
            Err(PetNameError::TooLong {
                length: PET_NAME_MAX_LENGTH + 1,
                max: PET_NAME_MAX_LENGTH
            })
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = PetName::new("Rex").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), r#""Rex""#);
    }
}
