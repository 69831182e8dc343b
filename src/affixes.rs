//! Numeric and year suffixes appended to mutations before padding

use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AffixError {
    #[error("invalid year '{0}'")]
    InvalidYear(String),
    #[error("descending year range {0}-{1}")]
    DescendingRange(u32, u32),
}

/// Suffixes applied by the affix stage, numbering first then years.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affixes {
    pub numbers: Vec<String>,
    pub years: Vec<String>,
}

impl Affixes {
    pub fn new(numbers: Vec<String>, years: Vec<String>) -> Self {
        Self { numbers, years }
    }

    pub fn len(&self) -> usize {
        self.numbers.len() + self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty() && self.years.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.numbers.iter().chain(self.years.iter()).map(String::as_str)
    }
}

/// Numbers `1..=limit` zero-padded to every width `1..=level`.
///
/// A width only contributes strings not already produced by a narrower
/// one, so level 2 with limit 12 yields `1..12` followed by `01..09`.
pub fn numbering(level: u32, limit: u32) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for width in 1..=level as usize {
        for n in 1..=limit {
            let s = format!("{:0width$}", n, width = width);
            if seen.insert(s.clone()) {
                out.push(s);
            }
        }
    }
    out
}

/// Parse `2022`, `1990,2017,2022`, `1990-2000` or any comma mix of those.
pub fn parse_years(input: &str) -> Result<Vec<String>, AffixError> {
    let mut years = Vec::new();
    for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match item.split_once('-') {
            Some((start, end)) => {
                let start = parse_year(start.trim())?;
                let end = parse_year(end.trim())?;
                if start > end {
                    return Err(AffixError::DescendingRange(start, end));
                }
                years.extend((start..=end).map(|y| y.to_string()));
            }
            None => years.push(parse_year(item)?.to_string()),
        }
    }
    Ok(years)
}

fn parse_year(s: &str) -> Result<u32, AffixError> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(AffixError::InvalidYear(s.to_string()));
    }
    s.parse().map_err(|_| AffixError::InvalidYear(s.to_string()))
}
