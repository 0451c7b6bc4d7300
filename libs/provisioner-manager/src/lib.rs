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
//! # Provisioner Manager
//!
//! Manage the address-space assignments of mesh network provisioners.
//!
//! A [provisioner::Provisioner] owns ranges of the unicast, group, and
//! scene spaces and keeps each collection in canonical form across all
//! mutations. Pairwise overlap queries between provisioners detect
//! address-plan conflicts before a second provisioner is admitted into
//! the same network.

pub mod provisioner;
