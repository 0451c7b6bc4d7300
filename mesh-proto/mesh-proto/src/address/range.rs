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

use std::fmt::{Display, Formatter};

use mesh_sdk_utils::rangeset::Span;
use serde::{Deserialize, Serialize};

use super::{Address, AddressKind};

/// A closed range of mesh addresses.
///
/// A range is classified by the kind its addresses share: a range whose
/// addresses are all unicast is a unicast range, one whose addresses are
/// all allocatable group addresses is a group range. A range straddling
/// two kinds has no kind and cannot be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressRange {
    /// The first address in the range.
    pub low: Address,
    /// The last address in the range.
    pub high: Address,
}

impl AddressRange {
    /// The full range of unicast addresses.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mesh_proto::address::{AddressRange, Address};
    /// assert!(AddressRange::ALL_UNICAST.contains(Address::new(0x1234)));
    /// ```
    pub const ALL_UNICAST: Self = Self {
        low: Address::FIRST_UNICAST,
        high: Address::LAST_UNICAST,
    };

    /// The full range of allocatable group addresses.
    pub const ALL_GROUPS: Self = Self {
        low: Address::FIRST_GROUP,
        high: Address::LAST_GROUP,
    };

    /// Creates a new address range covering `low..=high`.
    pub const fn new(low: Address, high: Address) -> Self {
        Self { low, high }
    }

    /// Classifies the range by the kind of its addresses.
    ///
    /// Returns `None` for inverted ranges and for ranges whose addresses
    /// do not all share one kind. Address kinds occupy contiguous blocks
    /// of the address space, so comparing the endpoint kinds suffices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mesh_proto::address::{Address, AddressKind, AddressRange};
    /// let unicast = AddressRange::new(Address::new(0x0100), Address::new(0x01FF));
    /// assert_eq!(unicast.kind(), Some(AddressKind::Unicast));
    ///
    /// let straddling = AddressRange::new(Address::new(0x7F00), Address::new(0x8100));
    /// assert_eq!(straddling.kind(), None);
    /// ```
    pub fn kind(&self) -> Option<AddressKind> {
        if self.high < self.low {
            return None;
        }
        let kind = self.low.kind();
        (self.high.kind() == kind).then_some(kind)
    }

    /// Returns true if every address in the range is unicast.
    pub fn is_unicast(&self) -> bool {
        self.kind() == Some(AddressKind::Unicast)
    }

    /// Returns true if every address in the range is an allocatable group
    /// address.
    pub fn is_group(&self) -> bool {
        self.kind() == Some(AddressKind::Group)
    }

    /// Returns true if the range can be assigned to a provisioner, that
    /// is, if it is entirely unicast or entirely group.
    pub fn is_valid(&self) -> bool {
        matches!(
            self.kind(),
            Some(AddressKind::Unicast | AddressKind::Group)
        )
    }

    /// Returns true if the range contains the given address.
    pub const fn contains(&self, address: Address) -> bool {
        self.low.to_u16() <= address.to_u16() && address.to_u16() <= self.high.to_u16()
    }

    /// Returns true if the two ranges have at least one address in common.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.low.to_u16() <= other.high.to_u16() && other.low.to_u16() <= self.high.to_u16()
    }
}

impl Display for AddressRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.low, self.high)
    }
}

impl Span for AddressRange {
    type Bound = Address;

    fn with_bounds(low: Address, high: Address) -> Self {
        Self { low, high }
    }

    fn low(&self) -> Address {
        self.low
    }

    fn high(&self) -> Address {
        self.high
    }

    fn next(bound: Address) -> Option<Address> {
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

    fn range(low: u16, high: u16) -> AddressRange {
        AddressRange::new(Address::new(low), Address::new(high))
    }

    #[test]
    fn classifies_by_shared_kind() {
        assert_eq!(range(0x0001, 0x7FFF).kind(), Some(AddressKind::Unicast));
        assert_eq!(range(0xC000, 0xFEFF).kind(), Some(AddressKind::Group));
        assert_eq!(range(0x8000, 0xBFFF).kind(), Some(AddressKind::Virtual));

        // Straddling ranges have no kind
        assert_eq!(range(0x7FFF, 0x8000).kind(), None);
        assert_eq!(range(0x0000, 0x0001).kind(), None);
        assert_eq!(range(0xFEFF, 0xFF00).kind(), None);

        // Inverted ranges have no kind
        assert_eq!(range(0x0005, 0x0001).kind(), None);
    }

    #[test]
    fn only_unicast_and_group_ranges_are_valid() {
        assert!(range(0x0001, 0x0010).is_valid());
        assert!(range(0xC000, 0xC010).is_valid());
        assert!(!range(0x8000, 0x8010).is_valid());
        assert!(!range(0xFF00, 0xFFFF).is_valid());
        assert!(!range(0x7F00, 0xC100).is_valid());
    }

    #[test]
    fn full_space_constants_cover_their_kind() {
        assert!(AddressRange::ALL_UNICAST.is_unicast());
        assert!(AddressRange::ALL_GROUPS.is_group());
        assert_eq!(AddressRange::ALL_UNICAST.count(), 0x7FFF);
        assert_eq!(AddressRange::ALL_GROUPS.count(), 0x3F00);
    }

    #[test]
    fn overlap_is_inclusive_of_bounds() {
        assert!(range(1, 100).overlaps(&range(100, 200)));
        assert!(range(100, 200).overlaps(&range(1, 100)));
        assert!(!range(1, 100).overlaps(&range(101, 200)));
    }

    #[test]
    fn display_prints_hex_bounds() {
        assert_eq!(range(0x0001, 0x7FFF).to_string(), "0001..7FFF");
    }

    #[test]
    fn serde_uses_low_high_pairs() {
        let json = serde_json::to_string(&range(0x0001, 0x00FF)).unwrap();
        assert_eq!(json, r#"{"low":1,"high":255}"#);
        let back: AddressRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range(0x0001, 0x00FF));
    }
}
