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

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::AddressParseError;

/// A 16-bit mesh network address.
///
/// The address space is partitioned by value alone; see [`Address::kind`]
/// for the classification.
#[derive(
    Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[repr(transparent)]
pub struct Address(pub u16);

/// The kind of a mesh address, a pure function of its value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// The address of an element that has not been configured yet.
    Unassigned,
    /// The address of a single element of a node.
    Unicast,
    /// A multicast address backed by a virtual label UUID.
    Virtual,
    /// A multicast address available for allocation to applications.
    Group,
    /// One of the reserved fixed group addresses.
    FixedGroup,
}

impl Address {
    /// The unassigned address.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mesh_proto::address::{Address, AddressKind};
    /// assert_eq!(Address::UNASSIGNED.kind(), AddressKind::Unassigned);
    /// ```
    pub const UNASSIGNED: Self = Self(0x0000);

    /// The lowest unicast address.
    pub const FIRST_UNICAST: Self = Self(0x0001);

    /// The highest unicast address.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mesh_proto::address::Address;
    /// assert!(Address::LAST_UNICAST.is_unicast());
    /// assert!(!Address::new(0x8000).is_unicast());
    /// ```
    pub const LAST_UNICAST: Self = Self(0x7FFF);

    /// The lowest virtual address.
    pub const FIRST_VIRTUAL: Self = Self(0x8000);

    /// The highest virtual address.
    pub const LAST_VIRTUAL: Self = Self(0xBFFF);

    /// The lowest group address available for allocation.
    pub const FIRST_GROUP: Self = Self(0xC000);

    /// The highest group address available for allocation.
    ///
    /// Group addresses above this value are reserved fixed group
    /// addresses such as [`Address::ALL_NODES`].
    pub const LAST_GROUP: Self = Self(0xFEFF);

    /// The fixed group address reaching all proxy nodes.
    pub const ALL_PROXIES: Self = Self(0xFFFC);

    /// The fixed group address reaching all friend nodes.
    pub const ALL_FRIENDS: Self = Self(0xFFFD);

    /// The fixed group address reaching all relay nodes.
    pub const ALL_RELAYS: Self = Self(0xFFFE);

    /// The fixed group address reaching all nodes.
    pub const ALL_NODES: Self = Self(0xFFFF);

    /// The number of bits in a mesh address.
    pub const BITS: u32 = u16::BITS;

    /// Creates a new address from a 16-bit value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the address as a 16-bit value.
    pub const fn to_u16(&self) -> u16 {
        self.0
    }

    /// Classifies the address by its value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mesh_proto::address::{Address, AddressKind};
    /// assert_eq!(Address::new(0x0001).kind(), AddressKind::Unicast);
    /// assert_eq!(Address::new(0x8000).kind(), AddressKind::Virtual);
    /// assert_eq!(Address::new(0xC000).kind(), AddressKind::Group);
    /// assert_eq!(Address::ALL_NODES.kind(), AddressKind::FixedGroup);
    /// ```
    pub const fn kind(&self) -> AddressKind {
        match self.0 {
            0x0000 => AddressKind::Unassigned,
            0x0001..=0x7FFF => AddressKind::Unicast,
            0x8000..=0xBFFF => AddressKind::Virtual,
            0xC000..=0xFEFF => AddressKind::Group,
            _ => AddressKind::FixedGroup,
        }
    }

    /// Returns true for unicast addresses.
    pub const fn is_unicast(&self) -> bool {
        matches!(self.kind(), AddressKind::Unicast)
    }

    /// Returns true for group addresses available for allocation.
    ///
    /// The reserved fixed group addresses are not allocatable and are not
    /// considered group addresses here.
    pub const fn is_group(&self) -> bool {
        matches!(self.kind(), AddressKind::Group)
    }

    /// The address `offset` positions above this one, or `None` if it
    /// would exceed the 16-bit address space.
    pub const fn checked_add(&self, offset: u16) -> Option<Self> {
        match self.0.checked_add(offset) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    /// Parses an address from a hexadecimal string, with or without a
    /// `0x` prefix.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let digits = string.strip_prefix("0x").unwrap_or(string);
        u16::from_str_radix(digits, 16)
            .map(Address::new)
            .or(Err(AddressParseError::Address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod kind {
        use super::*;

        #[test]
        fn boundaries() {
            let cases = [
                (0x0000, AddressKind::Unassigned),
                (0x0001, AddressKind::Unicast),
                (0x7FFF, AddressKind::Unicast),
                (0x8000, AddressKind::Virtual),
                (0xBFFF, AddressKind::Virtual),
                (0xC000, AddressKind::Group),
                (0xFEFF, AddressKind::Group),
                (0xFF00, AddressKind::FixedGroup),
                (0xFFFF, AddressKind::FixedGroup),
            ];
            for (value, expected) in cases {
                assert_eq!(
                    Address::new(value).kind(),
                    expected,
                    "address {value:#06X}"
                );
            }
        }

        #[test]
        fn fixed_groups_are_not_allocatable() {
            assert!(!Address::ALL_PROXIES.is_group());
            assert!(!Address::ALL_FRIENDS.is_group());
            assert!(!Address::ALL_RELAYS.is_group());
            assert!(!Address::ALL_NODES.is_group());
        }
    }

    mod parse {
        use super::*;

        #[test]
        fn hex_with_and_without_prefix() {
            assert_eq!("0x7FFF".parse::<Address>(), Ok(Address::LAST_UNICAST));
            assert_eq!("C000".parse::<Address>(), Ok(Address::FIRST_GROUP));
        }

        #[test]
        fn rejects_garbage() {
            assert_eq!("10000".parse::<Address>(), Err(AddressParseError::Address));
            assert_eq!("word".parse::<Address>(), Err(AddressParseError::Address));
            assert_eq!("".parse::<Address>(), Err(AddressParseError::Address));
        }

        #[test]
        fn display_round_trip() {
            let address = Address::new(0x0A01);
            assert_eq!(address.to_string(), "0A01");
            assert_eq!(address.to_string().parse::<Address>(), Ok(address));
        }
    }

    #[test]
    fn checked_add_saturates_at_domain_top() {
        assert_eq!(
            Address::new(0x0001).checked_add(4),
            Some(Address::new(0x0005))
        );
        assert_eq!(Address::ALL_NODES.checked_add(1), None);
    }
}
