//! Category options and the positional bands that populate them.
//!
//! Rows are grouped purely by position: the input file is expected to list
//! every category's products contiguously and in category order. Reordering
//! the input silently moves products between categories.

use std::fmt;

use serde::Deserialize;

use crate::error::{ModelError, Result};

/// A half-open row range `[start, end)`; `end = None` runs to the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub start: usize,
    pub end: Option<usize>,
}

impl Band {
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Slices `items` with clamping, so a band past the end is just empty.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let end = self.end.unwrap_or(len).min(len);
        let start = self.start.min(end);
        &items[start..end]
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..{}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}

/// One selectable product category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub label: String,
    pub value: String,
    pub start: usize,
    #[serde(default)]
    pub end: Option<usize>,
}

impl Category {
    pub fn new(label: impl Into<String>, value: impl Into<String>, band: Band) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            start: band.start,
            end: band.end,
        }
    }

    pub fn band(&self) -> Band {
        Band::new(self.start, self.end)
    }
}

/// Ordered categories whose bands partition the row sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLayout {
    categories: Vec<Category>,
}

impl Default for CategoryLayout {
    fn default() -> Self {
        Self {
            categories: vec![
                Category::new("Milk", "f1", Band::new(0, Some(7))),
                Category::new("Liquid Pediatric", "f2", Band::new(7, Some(35))),
                Category::new("Powder", "f3", Band::new(35, Some(59))),
                Category::new("Additives (post-decant)", "f4", Band::new(59, None)),
            ],
        }
    }
}

impl CategoryLayout {
    /// Validates that the bands start at row 0, are contiguous, and that only
    /// the last one is open-ended.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let Some(last) = categories.last() else {
            return Err(ModelError::EmptyLayout);
        };
        if last.end.is_some() {
            return Err(ModelError::LastBandBounded {
                category: last.label.clone(),
            });
        }
        let mut expected = 0usize;
        for category in &categories {
            if category.start != expected {
                return Err(ModelError::BandGap {
                    category: category.label.clone(),
                    expected,
                    found: category.start,
                });
            }
            match category.end {
                Some(end) if end < category.start => {
                    return Err(ModelError::BandReversed {
                        category: category.label.clone(),
                        start: category.start,
                        end,
                    });
                }
                Some(end) => expected = end,
                None if !std::ptr::eq(category, last) => {
                    return Err(ModelError::UnboundedBandNotLast {
                        category: category.label.clone(),
                    });
                }
                None => {}
            }
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Splits `items` into one slice per category, in category order.
    pub fn partition<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        self.categories
            .iter()
            .map(|category| category.band().slice(items))
            .collect()
    }
}
