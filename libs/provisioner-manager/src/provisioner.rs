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
//! The provisioner entity and its range allocation API.

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use mesh_proto::{
    address::{Address, AddressKind, AddressRange},
    scene::SceneRange,
};
use mesh_sdk_utils::rangeset::RangeSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod dto;

/// The unique identity of a provisioner.
#[derive(
    Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct ProvisionerId(pub Uuid);

impl Default for ProvisionerId {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvisionerId {
    /// Generates a new random provisioner identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for ProvisionerId {
    type Err = std::io::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match Uuid::parse_str(value) {
            Ok(uuid) => Ok(ProvisionerId(uuid)),
            Err(_) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Invalid provisioner id",
            )),
        }
    }
}

impl From<ProvisionerId> for String {
    fn from(id: ProvisionerId) -> Self {
        id.0.to_string()
    }
}

impl Display for ProvisionerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant in a mesh network that can configure new nodes.
///
/// A provisioner is assigned ranges of the unicast, group, and scene
/// spaces out of which it may hand out addresses. Each collection is
/// kept in canonical form (sorted, disjoint, maximally coalesced) after
/// every mutation. Two provisioners are the same entity iff their
/// identities match; name and ranges are mutable attributes.
#[derive(Debug, Clone)]
pub struct Provisioner {
    id: ProvisionerId,
    name: String,
    unicast_ranges: RangeSet<AddressRange>,
    group_ranges: RangeSet<AddressRange>,
    scene_ranges: RangeSet<SceneRange>,
}

impl PartialEq for Provisioner {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Provisioner {}

impl Hash for Provisioner {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Provisioner {
    /// Creates a provisioner with a fresh identity and the default
    /// full-space ranges: all unicast addresses, all allocatable group
    /// addresses, and all scenes.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_ranges(
            ProvisionerId::new(),
            name,
            vec![AddressRange::ALL_UNICAST],
            vec![AddressRange::ALL_GROUPS],
            vec![SceneRange::ALL],
        )
    }

    /// Creates a provisioner with explicit ranges.
    ///
    /// The collections are normalized immediately; unsorted, overlapping,
    /// or adjacent input is brought into canonical form and inverted
    /// ranges are discarded.
    pub fn with_ranges(
        id: ProvisionerId,
        name: impl Into<String>,
        unicast_ranges: Vec<AddressRange>,
        group_ranges: Vec<AddressRange>,
        scene_ranges: Vec<SceneRange>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unicast_ranges: RangeSet::from_ranges(unicast_ranges),
            group_ranges: RangeSet::from_ranges(group_ranges),
            scene_ranges: RangeSet::from_ranges(scene_ranges),
        }
    }

    /// The identity of this provisioner.
    pub const fn id(&self) -> ProvisionerId {
        self.id
    }

    /// The human readable name of this provisioner.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames this provisioner.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The allocated unicast ranges, in canonical form.
    pub fn unicast_ranges(&self) -> &RangeSet<AddressRange> {
        &self.unicast_ranges
    }

    /// The allocated group ranges, in canonical form.
    pub fn group_ranges(&self) -> &RangeSet<AddressRange> {
        &self.group_ranges
    }

    /// The allocated scene ranges, in canonical form.
    pub fn scene_ranges(&self) -> &RangeSet<SceneRange> {
        &self.scene_ranges
    }

    /// Allocates an address range to this provisioner.
    ///
    /// The range is routed to the unicast or group collection according
    /// to its kind, and the touched collection is re-normalized. Ranges
    /// without an allocatable kind (inverted, straddling two kinds,
    /// virtual, or fixed group) are ignored without mutation.
    pub fn allocate_range(&mut self, range: AddressRange) {
        match range.kind() {
            Some(AddressKind::Unicast) => self.unicast_ranges.insert(range),
            Some(AddressKind::Group) => self.group_ranges.insert(range),
            _ => {
                tracing::debug!("ignoring address range {range} without allocatable kind");
            }
        }
    }

    /// Allocates a scene range to this provisioner.
    ///
    /// Invalid ranges are ignored without mutation.
    pub fn allocate_scene_range(&mut self, range: SceneRange) {
        if range.is_valid() {
            self.scene_ranges.insert(range);
        } else {
            tracing::debug!("ignoring invalid scene range {range}");
        }
    }

    /// Returns true if the block of `count` consecutive addresses
    /// starting at `address` lies within one single allocated range of
    /// the matching kind.
    ///
    /// Addresses that are neither unicast nor group, empty blocks
    /// (`count == 0`), and blocks running past the top of the address
    /// space are never allocated. The collections are canonical, so
    /// single-range containment of both block endpoints is exactly full
    /// containment of the block.
    pub fn has_allocated(&self, address: Address, count: u16) -> bool {
        let ranges = match address.kind() {
            AddressKind::Unicast => &self.unicast_ranges,
            AddressKind::Group => &self.group_ranges,
            _ => return false,
        };
        let Some(offset) = count.checked_sub(1) else {
            return false;
        };
        let Some(last) = address.checked_add(offset) else {
            return false;
        };
        ranges.encloses(address, last)
    }

    /// Returns true if this provisioner's unicast ranges intersect the
    /// other provisioner's unicast ranges.
    pub fn has_overlapping_unicast_ranges(&self, other: &Self) -> bool {
        self.unicast_ranges.overlaps(&other.unicast_ranges)
    }

    /// Returns true if this provisioner's group ranges intersect the
    /// other provisioner's group ranges.
    pub fn has_overlapping_group_ranges(&self, other: &Self) -> bool {
        self.group_ranges.overlaps(&other.group_ranges)
    }

    /// Returns true if this provisioner's scene ranges intersect the
    /// other provisioner's scene ranges.
    pub fn has_overlapping_scene_ranges(&self, other: &Self) -> bool {
        self.scene_ranges.overlaps(&other.scene_ranges)
    }

    /// Returns true if any of the three collections intersects the
    /// corresponding collection of the other provisioner.
    ///
    /// Two provisioners with overlapping ranges cannot share a network;
    /// this is the admission check for adding a provisioner to one.
    pub fn has_overlapping_ranges(&self, other: &Self) -> bool {
        self.has_overlapping_unicast_ranges(other)
            || self.has_overlapping_group_ranges(other)
            || self.has_overlapping_scene_ranges(other)
    }

    /// Looks up `address` among the allocated unicast ranges, scanning
    /// them in ascending order, and returns it as soon as a range
    /// contains it or starts at or above it.
    ///
    /// Returns `None` when every allocated range lies entirely below
    /// `address`. Note that the returned value is always the queried
    /// address itself, even when it sits in the gap below a range.
    pub fn first_allocated_unicast_address(&self, address: Address) -> Option<Address> {
        self.unicast_ranges
            .ranges()
            .iter()
            .any(|range| range.contains(address) || range.low >= address)
            .then_some(address)
    }

    /// Returns true if all three collections are non-empty and every
    /// range lies within the legal bounds of its collection's kind.
    pub fn is_valid(&self) -> bool {
        !self.unicast_ranges.is_empty()
            && self
                .unicast_ranges
                .ranges()
                .iter()
                .all(AddressRange::is_unicast)
            && !self.group_ranges.is_empty()
            && self.group_ranges.ranges().iter().all(AddressRange::is_group)
            && !self.scene_ranges.is_empty()
            && self.scene_ranges.ranges().iter().all(SceneRange::is_valid)
    }
}
