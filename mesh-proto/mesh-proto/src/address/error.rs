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

use thiserror::Error;

/// An error which can be returned when parsing addressing-scheme values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressParseError {
    /// The string is not a valid 16-bit mesh address.
    #[error("invalid mesh address")]
    Address,
    /// The string is not a valid scene number.
    #[error("invalid scene number")]
    SceneNumber,
}
