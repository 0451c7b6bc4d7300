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

//! Mesh addresses and their allocation ranges.
//!
//! # Organisation
//!
//! - An [`Address`] is a 16-bit mesh address; its [`AddressKind`] is a
//!   pure function of its value ([`Address::kind`]).
//! - An [`AddressRange`] is a closed range of addresses, classified by
//!   the kind its addresses share; the named constants
//!   [`AddressRange::ALL_UNICAST`] and [`AddressRange::ALL_GROUPS`] cover
//!   the full allocatable sub-spaces.
//! - [`AddressParseError`] is returned when parsing any of the above from
//!   strings.

mod addr;
pub use addr::{Address, AddressKind};

mod error;
pub use error::AddressParseError;

mod range;
pub use range::AddressRange;
