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

//! Primitive types of the `Edm` namespace.

use crate::kind::PrimitiveKind;
use crate::kind::ALL_PRIMITIVE_KINDS;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// A primitive type. Primitive types are minted freely; their
/// identity is the primitive kind together with the full name, never
/// the instance.
#[derive(Debug)]
pub struct PrimitiveType {
    /// Primitive kind of the type.
    pub kind: PrimitiveKind,
}

impl PrimitiveType {
    /// Create a new primitive type instance.
    #[must_use]
    pub const fn new(kind: PrimitiveKind) -> Self {
        Self { kind }
    }

    /// Namespace of every primitive type.
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        "Edm"
    }

    /// Unqualified name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Fully-qualified `Edm.*` name.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.kind.full_name()
    }
}

static CANONICAL: Lazy<HashMap<PrimitiveKind, Arc<PrimitiveType>>> = Lazy::new(|| {
    ALL_PRIMITIVE_KINDS
        .iter()
        .chain(&[PrimitiveKind::None])
        .map(|kind| (*kind, Arc::new(PrimitiveType::new(*kind))))
        .collect()
});

/// Canonical shared instance of a primitive type. Freshly minted
/// instances of the same kind compare equivalent to these.
#[must_use]
pub fn primitive_type(kind: PrimitiveKind) -> Arc<PrimitiveType> {
    Arc::clone(
        CANONICAL
            .get(&kind)
            .unwrap_or_else(|| unreachable!("canonical table covers every kind")),
    )
}

/// Canonical primitive type by `Edm.*` (or unqualified) name.
#[must_use]
pub fn primitive_type_by_name(name: &str) -> Option<Arc<PrimitiveType>> {
    PrimitiveKind::from_name(name).map(primitive_type)
}
