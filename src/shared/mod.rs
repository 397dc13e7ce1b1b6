//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod amount;

pub use amount::parse_amount;

use crate::error::TermError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── TermCode ────────────────────────────────────────────────────────────────

/// Newtype for maturity term labels (e.g. `"1m"`, `"10Y"`).
///
/// The wire form is kept verbatim; [`TermCode::span`] parses it into a
/// count-plus-unit pair on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermCode(String);

impl TermCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the code into a count of months or years.
    ///
    /// Accepted shapes are a positive integer followed by a single unit
    /// character, `m`/`M` for months or `y`/`Y` for years. Anything else
    /// fails with [`TermError::InvalidTermFormat`].
    pub fn span(&self) -> Result<TermSpan, TermError> {
        let invalid = || TermError::InvalidTermFormat(self.0.clone());

        let (count_part, unit_char) = match self.0.char_indices().last() {
            Some((idx, unit)) => (&self.0[..idx], unit),
            None => return Err(invalid()),
        };

        let unit = match unit_char {
            'm' | 'M' => TermUnit::Months,
            'y' | 'Y' => TermUnit::Years,
            _ => return Err(invalid()),
        };

        if count_part.is_empty() || !count_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let count: u32 = count_part.parse().map_err(|_| invalid())?;
        if count == 0 {
            return Err(invalid());
        }

        Ok(TermSpan { count, unit })
    }
}

impl std::fmt::Display for TermCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TermCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TermCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for TermCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TermCode(s.to_string()))
    }
}

impl Serialize for TermCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TermCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TermCode(s))
    }
}

// ─── TermSpan ────────────────────────────────────────────────────────────────

/// A parsed term: a count of months or years to maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSpan {
    pub count: u32,
    pub unit: TermUnit,
}

impl TermSpan {
    /// Total span expressed in months. Widened so a year count near
    /// `u32::MAX` cannot overflow.
    pub fn months(&self) -> u64 {
        match self.unit {
            TermUnit::Months => u64::from(self.count),
            TermUnit::Years => u64::from(self.count) * 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermUnit {
    Months,
    Years,
}
