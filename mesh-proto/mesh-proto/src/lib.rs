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

//! Protocol-level types for the mesh network addressing scheme
//!
//! A mesh network shares a single 16-bit address space between all of its
//! nodes. The space is partitioned by value into unicast, virtual, group,
//! and fixed group addresses, and provisioners are assigned disjoint
//! ranges of it from which they may configure new nodes.
//!
//! This crate provides Rust implementations of the value types of that
//! addressing scheme:
//!
//! - [addresses][address] and their kind classification;
//! - [address ranges][address::AddressRange] with the named full-space
//!   constants used for default provisioner configurations; and
//! - [scene numbers and ranges][scene] for the scene register.
//!
//! This crate does not perform any I/O and holds no allocation state. See
//! the **provisioner-manager** crate for the entity that owns and mutates
//! range assignments built from these types.

pub mod address;
pub mod scene;
