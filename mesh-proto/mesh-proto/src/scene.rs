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

//! Scene numbers and scene allocation ranges.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use mesh_sdk_utils::rangeset::Span;
use serde::{Deserialize, Serialize};

use crate::address::AddressParseError;

/// A 16-bit scene number.
///
/// Scene numbers identify stored states in the scene register. The value
/// 0x0000 is prohibited; all other values are valid.
#[derive(
    Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[repr(transparent)]
pub struct SceneNumber(pub u16);

impl SceneNumber {
    /// The lowest valid scene number.
    pub const FIRST: Self = Self(0x0001);

    /// The highest valid scene number.
    pub const LAST: Self = Self(0xFFFF);

    /// Creates a new scene number from a 16-bit value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the scene number as a 16-bit value.
    pub const fn to_u16(&self) -> u16 {
        self.0
    }

    /// Returns true for valid scene numbers, everything except 0x0000.
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// The scene number `offset` positions above this one, or `None` if
    /// it would exceed the 16-bit scene space.
    pub const fn checked_add(&self, offset: u16) -> Option<Self> {
        match self.0.checked_add(offset) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl Display for SceneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl FromStr for SceneNumber {
    type Err = AddressParseError;

    /// Parses a scene number from a hexadecimal string, with or without a
    /// `0x` prefix.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let digits = string.strip_prefix("0x").unwrap_or(string);
        u16::from_str_radix(digits, 16)
            .map(SceneNumber::new)
            .or(Err(AddressParseError::SceneNumber))
    }
}

/// A closed range of scene numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneRange {
    /// The first scene number in the range.
    pub low: SceneNumber,
    /// The last scene number in the range.
    pub high: SceneNumber,
}

impl SceneRange {
    /// The full range of valid scene numbers.
    pub const ALL: Self = Self {
        low: SceneNumber::FIRST,
        high: SceneNumber::LAST,
    };

    /// Creates a new scene range covering `low..=high`.
    pub const fn new(low: SceneNumber, high: SceneNumber) -> Self {
        Self { low, high }
    }

    /// Returns true if the range is not inverted and contains only valid
    /// scene numbers.
    pub const fn is_valid(&self) -> bool {
        self.low.is_valid() && self.low.to_u16() <= self.high.to_u16()
    }

    /// Returns true if the range contains the given scene number.
    pub const fn contains(&self, scene: SceneNumber) -> bool {
        self.low.to_u16() <= scene.to_u16() && scene.to_u16() <= self.high.to_u16()
    }

    /// Returns true if the two ranges have at least one scene number in
    /// common.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.low.to_u16() <= other.high.to_u16() && other.low.to_u16() <= self.high.to_u16()
    }
}

impl Display for SceneRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.low, self.high)
    }
}

impl Span for SceneRange {
    type Bound = SceneNumber;

    fn with_bounds(low: SceneNumber, high: SceneNumber) -> Self {
        Self { low, high }
    }

    fn low(&self) -> SceneNumber {
        self.low
    }

    fn high(&self) -> SceneNumber {
        self.high
    }

    fn next(bound: SceneNumber) -> Option<SceneNumber> {
        bound.checked_add(1)
    }

    fn count(&self) -> u64 {
        if self.high < self.low {
            0
        } else {
            u64::from(self.high.to_u16() - self.low.to_u16()) + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(low: u16, high: u16) -> SceneRange {
        SceneRange::new(SceneNumber::new(low), SceneNumber::new(high))
    }

    #[test]
    fn zero_is_not_a_scene() {
        assert!(!SceneNumber::new(0).is_valid());
        assert!(SceneNumber::FIRST.is_valid());
        assert!(SceneNumber::LAST.is_valid());
    }

    #[test]
    fn validity_requires_ordered_nonzero_bounds() {
        assert!(range(0x0001, 0xFFFF).is_valid());
        assert!(range(0x0010, 0x0010).is_valid());
        assert!(!range(0x0000, 0x0010).is_valid());
        assert!(!range(0x0010, 0x0001).is_valid());
    }

    #[test]
    fn full_range_covers_every_scene() {
        assert!(SceneRange::ALL.is_valid());
        assert_eq!(SceneRange::ALL.count(), 0xFFFF);
        assert!(SceneRange::ALL.contains(SceneNumber::new(0x1234)));
    }

    #[test]
    fn parse_and_display_round_trip() {
        let scene: SceneNumber = "0x00FF".parse().unwrap();
        assert_eq!(scene, SceneNumber::new(0x00FF));
        assert_eq!(scene.to_string(), "00FF");
        assert_eq!(
            "zzz".parse::<SceneNumber>(),
            Err(AddressParseError::SceneNumber)
        );
    }
}
