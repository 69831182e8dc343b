//! Padding values prefixed/suffixed to mutations
//!
//! The default list (digit runs, years, symbol bursts, keyboard walks) is
//! compiled into the binary. User supplied values are appended after it.

use thiserror::Error;
use tracing::debug;

const DEFAULT_PADDINGS: &str = include_str!("../data/common_paddings.txt");

#[derive(Debug, Error)]
pub enum PaddingError {
    #[error("embedded padding list is empty")]
    EmptyDefaults,
}

/// Where padding values are attached relative to a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// `mutation + pad`, then `pad + mutation`
    #[default]
    Both,
    Before,
    After,
}

impl Placement {
    /// `-cpb`/`-cpa` flags to a placement; neither or both means `Both`.
    pub fn from_flags(before: bool, after: bool) -> Self {
        match (before, after) {
            (true, false) => Placement::Before,
            (false, true) => Placement::After,
            _ => Placement::Both,
        }
    }

    /// New entries produced per (mutation, padding) pair.
    pub fn fan_out(self) -> usize {
        match self {
            Placement::Both => 2,
            Placement::Before | Placement::After => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaddingList {
    values: Vec<String>,
}

impl PaddingList {
    /// An empty list; the padding stage is skipped for it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the built-in defaults, one value per line, blanks skipped.
    pub fn load() -> Result<Self, PaddingError> {
        let values: Vec<String> = DEFAULT_PADDINGS
            .lines()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        if values.is_empty() {
            return Err(PaddingError::EmptyDefaults);
        }
        debug!(count = values.len(), "loaded default paddings");
        Ok(Self { values })
    }

    /// Append comma separated values, trimmed, empties discarded.
    /// Returns how many values were added.
    pub fn append(&mut self, custom: &str) -> usize {
        let before = self.values.len();
        self.values.extend(
            custom
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        );
        self.values.len() - before
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<String>> for PaddingList {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}
