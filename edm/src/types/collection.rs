// SPDX-FileCopyrightText: Copyright (c) 2025 The odata-edm Authors. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Collection types.

use crate::types::reference::TypeReference;

/// An unnamed collection of some element type.
#[derive(Debug)]
pub struct CollectionType {
    /// Reference to the element type.
    pub element: TypeReference,
}

impl CollectionType {
    #[must_use]
    pub const fn new(element: TypeReference) -> Self {
        Self { element }
    }
}
