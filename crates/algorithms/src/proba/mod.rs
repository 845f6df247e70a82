//! Finite probability laws over the integers
//!
//! A [`Law`] maps each integer value of its support to a probability. All
//! laws built by this module satisfy two invariants:
//!
//! - the probabilities sum to 1 (up to floating point error, and up to the
//!   mass removed by [`clean`], which is below `2^-300` per value);
//! - the support is a bounded integer range.
//!
//! The support is kept in an ordered map. Ordering carries no meaning for
//! the law itself, but it fixes the order of every floating point summation
//! so that all derived quantities are reproducible bit for bit.

use std::collections::btree_map;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod laws;
mod ops;

pub use laws::{centered_binomial, mod_centered, mod_switch, mod_switching_error, MAX_NOISE_WIDTH};
pub use ops::{clean, convolution, iter_convolution, product, tail_probability, CLEAN_THRESHOLD};


/// A discrete probability law with finite integer support
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Law {
    probs: BTreeMap<i64, f64>,
}

impl Law {
    /// Create an empty law (total mass 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// The law of the constant `value`
    pub fn point(value: i64) -> Self {
        let mut law = Self::new();
        law.add_mass(value, 1.0);
        law
    }

    /// Add `mass` to the probability of `value`
    pub fn add_mass(&mut self, value: i64, mass: f64) {
        *self.probs.entry(value).or_insert(0.0) += mass;
    }

    /// Probability of `value` (0 outside the support)
    pub fn get(&self, value: i64) -> f64 {
        self.probs.get(&value).copied().unwrap_or(0.0)
    }

    /// Iterate over `(value, probability)` pairs in ascending value order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.probs.iter(),
        }
    }

    /// Number of values in the support
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// True when the support is empty
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Smallest value of the support
    pub fn min_value(&self) -> Option<i64> {
        self.probs.keys().next().copied()
    }

    /// Largest value of the support
    pub fn max_value(&self) -> Option<i64> {
        self.probs.keys().next_back().copied()
    }

    /// Largest absolute value of the support
    pub fn max_abs(&self) -> i64 {
        match (self.min_value(), self.max_value()) {
            (Some(lo), Some(hi)) => lo.abs().max(hi.abs()),
            _ => 0,
        }
    }

    /// Sum of all probabilities
    pub fn total_mass(&self) -> f64 {
        self.probs.values().sum()
    }

    /// Expected value
    pub fn mean(&self) -> f64 {
        self.iter().map(|(v, p)| v as f64 * p).sum()
    }

    /// `E[X^2]`, the variance of a zero-mean law
    pub fn second_moment(&self) -> f64 {
        self.iter().map(|(v, p)| (v * v) as f64 * p).sum()
    }

    /// Variance around the mean
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.second_moment() - mean * mean
    }
}

/// Iterator over the `(value, probability)` pairs of a [`Law`]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, i64, f64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, p)| (*v, *p))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(v, p)| (*v, *p))
    }
}

impl<'a> IntoIterator for &'a Law {
    type Item = (i64, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(i64, f64)> for Law {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        let mut law = Law::new();
        for (value, mass) in iter {
            law.add_mass(value, mass);
        }
        law
    }
}
