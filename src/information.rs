use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered block of values travelling through the transmission chain.
///
/// Bits travel as `Information<bool>`, sampled waveforms as
/// `Information<f32>`. Insertion order is the transmitted order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Information<T> {
    content: Vec<T>,
}

impl<T> Information<T> {
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            content: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.content.push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.content
    }
}

impl<T: Clone> Information<T> {
    /// Append `count` copies of `value`
    pub fn push_repeated(&mut self, value: T, count: usize) {
        self.content
            .extend(std::iter::repeat(value).take(count));
    }
}

impl Information<bool> {
    /// Parse a string of '0' and '1' characters, whitespace ignored
    pub fn parse_bits(text: &str) -> Result<Self> {
        text.chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(position, symbol)| match symbol {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidBitSymbol { symbol, position }),
            })
            .collect()
    }
}

impl Information<f32> {
    /// (min, max) over all samples, `None` when empty
    pub fn bounds(&self) -> Option<(f32, f32)> {
        let first = *self.content.first()?;
        Some(
            self.content
                .iter()
                .fold((first, first), |(lo, hi), &s| (lo.min(s), hi.max(s))),
        )
    }
}

impl<T> From<Vec<T>> for Information<T> {
    fn from(content: Vec<T>) -> Self {
        Self { content }
    }
}

impl<T> FromIterator<T> for Information<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            content: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Information<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Information<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Information<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.content.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
