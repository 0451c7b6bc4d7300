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
//! Data transfer objects (DTOs) for the provisioner entity.

use anyhow::Context;
use mesh_proto::{
    address::{Address, AddressRange},
    scene::{SceneNumber, SceneRange},
};
use serde::{Deserialize, Serialize};

use crate::provisioner::{Provisioner, ProvisionerId};

/// A provisioner as stored by the persistence layer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProvisionerDto {
    /// The UUID of the provisioner.
    pub id: String,
    /// The human readable name.
    pub name: String,
    /// The allocated unicast ranges.
    pub unicast_ranges: Vec<RangeDto>,
    /// The allocated group ranges.
    pub group_ranges: Vec<RangeDto>,
    /// The allocated scene ranges.
    pub scene_ranges: Vec<RangeDto>,
}

/// A stored range as a low/high pair, bounds inclusive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct RangeDto {
    /// The lower bound of the range.
    pub low: u16,
    /// The upper bound of the range.
    pub high: u16,
}

impl TryFrom<ProvisionerDto> for Provisioner {
    type Error = anyhow::Error;

    fn try_from(value: ProvisionerDto) -> Result<Self, Self::Error> {
        let id = value
            .id
            .parse::<ProvisionerId>()
            .context("invalid provisioner id")?;

        // Stored range lists are not trusted to be canonical;
        // construction re-normalizes every collection.
        Ok(Provisioner::with_ranges(
            id,
            value.name,
            value
                .unicast_ranges
                .iter()
                .map(|range| AddressRange::new(Address::new(range.low), Address::new(range.high)))
                .collect(),
            value
                .group_ranges
                .iter()
                .map(|range| AddressRange::new(Address::new(range.low), Address::new(range.high)))
                .collect(),
            value
                .scene_ranges
                .iter()
                .map(|range| {
                    SceneRange::new(SceneNumber::new(range.low), SceneNumber::new(range.high))
                })
                .collect(),
        ))
    }
}

impl From<&Provisioner> for ProvisionerDto {
    fn from(provisioner: &Provisioner) -> Self {
        ProvisionerDto {
            id: provisioner.id().to_string(),
            name: provisioner.name().to_owned(),
            unicast_ranges: provisioner
                .unicast_ranges()
                .ranges()
                .iter()
                .map(|range| RangeDto {
                    low: range.low.to_u16(),
                    high: range.high.to_u16(),
                })
                .collect(),
            group_ranges: provisioner
                .group_ranges()
                .ranges()
                .iter()
                .map(|range| RangeDto {
                    low: range.low.to_u16(),
                    high: range.high.to_u16(),
                })
                .collect(),
            scene_ranges: provisioner
                .scene_ranges()
                .ranges()
                .iter()
                .map(|range| RangeDto {
                    low: range.low.to_u16(),
                    high: range.high.to_u16(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: &str) -> ProvisionerDto {
        ProvisionerDto {
            id: id.to_owned(),
            name: "Primary".to_owned(),
            unicast_ranges: vec![
                RangeDto { low: 0x0100, high: 0x01FF },
                RangeDto { low: 0x0001, high: 0x00FF },
            ],
            group_ranges: vec![RangeDto { low: 0xC000, high: 0xC0FF }],
            scene_ranges: vec![RangeDto { low: 1, high: 16 }],
        }
    }

    #[test]
    fn round_trip_preserves_identity_and_ranges() {
        let provisioner = Provisioner::new("Primary");
        let dto = ProvisionerDto::from(&provisioner);
        let restored = Provisioner::try_from(dto).unwrap();

        assert_eq!(restored, provisioner);
        assert_eq!(restored.name(), provisioner.name());
        assert_eq!(restored.unicast_ranges(), provisioner.unicast_ranges());
        assert_eq!(restored.group_ranges(), provisioner.group_ranges());
        assert_eq!(restored.scene_ranges(), provisioner.scene_ranges());
    }

    #[test]
    fn stored_ranges_are_normalized_on_load() {
        let provisioner =
            Provisioner::try_from(dto("00000000-0000-0000-0000-000000000001")).unwrap();

        // The two adjacent unicast ranges were stored out of order and
        // coalesce into one on load
        assert_eq!(provisioner.unicast_ranges().ranges().len(), 1);
        assert_eq!(provisioner.unicast_ranges().len(), 0x01FF);
        assert!(provisioner.is_valid());
    }

    #[test]
    fn rejects_malformed_ids() {
        let result = Provisioner::try_from(ProvisionerDto {
            id: "not-a-uuid".to_owned(),
            ..dto("ignored")
        });
        assert!(result.is_err());
    }

    #[test]
    fn serializes_to_low_high_pairs() {
        let provisioner =
            Provisioner::try_from(dto("00000000-0000-0000-0000-000000000001")).unwrap();
        let json = serde_json::to_value(ProvisionerDto::from(&provisioner)).unwrap();

        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(json["unicast_ranges"][0]["low"], 1);
        assert_eq!(json["unicast_ranges"][0]["high"], 0x01FF);
    }
}
