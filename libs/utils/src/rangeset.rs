// Copyright 2025 Anapaya Systems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! A set of non-overlapping closed ranges of ordered values.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A closed interval over an ordered value domain.
///
/// Implementors describe how interval bounds order, how a bound is
/// followed by its successor, and how many values an interval covers.
/// This is the seam that lets domain newtypes act as range endpoints.
pub trait Span: Copy {
    /// The type of the interval bounds.
    type Bound: Copy + Ord;

    /// Creates a span covering `low..=high`.
    fn with_bounds(low: Self::Bound, high: Self::Bound) -> Self;

    /// The lower bound, inclusive.
    fn low(&self) -> Self::Bound;

    /// The upper bound, inclusive.
    fn high(&self) -> Self::Bound;

    /// The value immediately following `bound`, or `None` at the top of
    /// the domain.
    fn next(bound: Self::Bound) -> Option<Self::Bound>;

    /// The number of values covered by this span.
    fn count(&self) -> u64;
}

/// A closed range of unsigned integers.
#[derive(Debug, Eq, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct Range<T> {
    /// Start of the range, inclusive.
    pub low: T,
    /// End of the range, inclusive.
    pub high: T,
}

impl<T> Range<T> {
    /// Creates a new range.
    pub const fn new(low: T, high: T) -> Self {
        Self { low, high }
    }
}

macro_rules! impl_span_for_range {
    ($($ty:ty),*) => {
        $(
            impl Span for Range<$ty> {
                type Bound = $ty;

                fn with_bounds(low: $ty, high: $ty) -> Self {
                    Self { low, high }
                }

                fn low(&self) -> $ty {
                    self.low
                }

                fn high(&self) -> $ty {
                    self.high
                }

                fn next(bound: $ty) -> Option<$ty> {
                    bound.checked_add(1)
                }

                fn count(&self) -> u64 {
                    if self.high < self.low {
                        0
                    } else {
                        (u64::from(self.high) - u64::from(self.low)).saturating_add(1)
                    }
                }
            }
        )*
    };
}

impl_span_for_range!(u8, u16, u32);

/// A normalized set of non-overlapping ranges.
///
/// The set maintains a canonical form after every mutation: ranges are
/// sorted ascending by lower bound, disjoint, maximally coalesced
/// (adjacent ranges are merged into one), and never empty. The canonical
/// form of a given collection of ranges is unique, so two sets covering
/// the same values always compare equal.
#[derive(Debug, Eq, PartialEq, Serialize, Deserialize, Clone)]
pub struct RangeSet<R> {
    ranges: Vec<R>,
}

impl<R: Span> Default for RangeSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Span> RangeSet<R> {
    /// Creates an empty range set.
    pub const fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Creates a range set from arbitrary ranges, normalizing immediately.
    ///
    /// The input may be unsorted, overlapping, or adjacent; inverted
    /// ranges (`low > high`) are discarded and the rest are coalesced.
    pub fn from_ranges(ranges: Vec<R>) -> Self {
        let mut set = Self { ranges };
        set.merge();
        set
    }

    /// Returns true if the set contains no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the total number of values covered by the set.
    pub fn len(&self) -> u64 {
        self.ranges.iter().map(|range| range.count()).sum()
    }

    /// Adds a range to the set and restores canonical form.
    pub fn insert(&mut self, range: R) {
        self.ranges.push(range);
        self.merge();
    }

    /// Normalizes the set in place.
    ///
    /// Inverted ranges are dropped, the rest are sorted by lower bound
    /// and coalesced so that no two ranges overlap or touch. Applying
    /// `merge` to an already canonical set is a no-op. Deserialized sets
    /// must be merged before use, stored data is not guaranteed to be
    /// canonical.
    pub fn merge(&mut self) {
        self.ranges.retain(|range| range.low() <= range.high());
        self.ranges.sort_by(|a, b| a.low().cmp(&b.low()));

        let mut merged: Vec<R> = Vec::with_capacity(self.ranges.len());
        for range in self.ranges.drain(..) {
            if let Some(last) = merged.last_mut() {
                // A `None` successor means the accumulator already reaches
                // the top of the domain, nothing can lie beyond it.
                if R::next(last.high()).is_none_or(|succ| range.low() <= succ) {
                    if range.high() > last.high() {
                        *last = R::with_bounds(last.low(), range.high());
                    }
                    continue;
                }
            }
            merged.push(range);
        }
        self.ranges = merged;
    }

    /// Returns true if the value is contained in one of the ranges.
    pub fn contains(&self, value: R::Bound) -> bool {
        self.ranges
            .binary_search_by(|range| Self::compare(range, &value))
            .is_ok()
    }

    /// Returns true if one single range covers both `low` and `high`.
    ///
    /// In canonical form every fully covered contiguous block lies inside
    /// exactly one range, so this is equivalent to interval containment.
    pub fn encloses(&self, low: R::Bound, high: R::Bound) -> bool {
        if high < low {
            return false;
        }
        match self
            .ranges
            .binary_search_by(|range| Self::compare(range, &low))
        {
            Ok(i) => high <= self.ranges[i].high(),
            Err(_) => false,
        }
    }

    /// Returns true if any range in this set intersects any range in
    /// `other`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.ranges.iter().any(|range| other.overlaps_range(range))
    }

    /// Returns true if any range in the set intersects the given range.
    pub fn overlaps_range(&self, range: &R) -> bool {
        self.ranges
            .iter()
            .any(|r| r.low() <= range.high() && range.low() <= r.high())
    }

    /// Returns the ranges in the set.
    pub fn ranges(&self) -> &[R] {
        &self.ranges
    }

    /// Compare a range to a value, for binary search over sorted ranges.
    fn compare(range: &R, value: &R::Bound) -> Ordering {
        if range.low() <= *value && *value <= range.high() {
            Ordering::Equal
        } else if range.low() > *value {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}
