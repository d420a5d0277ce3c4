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

//! Type definitions (named aliases over primitive types).

use crate::types::primitive::PrimitiveType;
use std::sync::Arc;

/// A named alias over a primitive type. Two distinct aliases over the
/// same underlying primitive compare equivalent as that primitive.
#[derive(Debug)]
pub struct TypeDefinition {
    /// Namespace the definition is declared in.
    pub namespace: String,
    /// Unqualified name.
    pub name: String,
    /// Underlying type. Always primitive.
    pub underlying: Arc<PrimitiveType>,
}

impl TypeDefinition {
    /// Fully-qualified name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}
