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

//! Vocabulary terms.

use crate::types::reference::TypeReference;

/// A vocabulary term.
#[derive(Debug)]
pub struct Term {
    /// Namespace the term is declared in.
    pub namespace: String,
    /// Unqualified name.
    pub name: String,
    /// Declared type of the term.
    pub term_type: TypeReference,
}

impl Term {
    /// Fully-qualified name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}
