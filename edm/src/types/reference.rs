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

//! Nullable-annotated references to type definitions, with facets.

use crate::error::EdmError;
use crate::kind::PrimitiveKind;
use crate::kind::TypeKind;
use crate::types::Type;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Shape-specific constraints carried by a type reference. Facets are
/// meaningful only for the reference's matching primitive kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facets {
    /// No facets.
    None,
    /// Facets of an `Edm.Binary` reference.
    Binary {
        is_unbounded: bool,
        max_length: Option<i32>,
    },
    /// Facets of an `Edm.Decimal` reference.
    Decimal {
        precision: Option<i32>,
        scale: Option<i32>,
    },
    /// Facets of an `Edm.String` reference.
    String {
        is_unbounded: bool,
        max_length: Option<i32>,
        is_unicode: Option<bool>,
    },
    /// Facets of a temporal (`Duration`, `DateTimeOffset`,
    /// `TimeOfDay`) reference.
    Temporal { precision: Option<i32> },
    /// Facets of a spatial reference.
    Spatial { srid: Option<i32> },
    /// Facet bundle a type-definition reference may carry; re-applied
    /// to the underlying primitive's shape on unwrap.
    TypeDefinition {
        is_unbounded: bool,
        max_length: Option<i32>,
        is_unicode: Option<bool>,
        precision: Option<i32>,
        scale: Option<i32>,
        srid: Option<i32>,
    },
}

/// A nullable-annotated reference to a type definition.
#[derive(Debug, Clone)]
pub struct TypeReference {
    definition: Type,
    nullable: bool,
    facets: Facets,
}

impl TypeReference {
    /// Reference without facets.
    #[must_use]
    pub const fn new(definition: Type, nullable: bool) -> Self {
        Self {
            definition,
            nullable,
            facets: Facets::None,
        }
    }

    /// Reference with explicit facets. The caller keeps the facets
    /// consistent with the definition's primitive kind.
    #[must_use]
    pub const fn with_facets(definition: Type, nullable: bool, facets: Facets) -> Self {
        Self {
            definition,
            nullable,
            facets,
        }
    }

    /// Binary reference.
    #[must_use]
    pub const fn binary(
        definition: Type,
        nullable: bool,
        is_unbounded: bool,
        max_length: Option<i32>,
    ) -> Self {
        Self::with_facets(
            definition,
            nullable,
            Facets::Binary {
                is_unbounded,
                max_length,
            },
        )
    }

    /// String reference.
    #[must_use]
    pub const fn string(
        definition: Type,
        nullable: bool,
        is_unbounded: bool,
        max_length: Option<i32>,
        is_unicode: Option<bool>,
    ) -> Self {
        Self::with_facets(
            definition,
            nullable,
            Facets::String {
                is_unbounded,
                max_length,
                is_unicode,
            },
        )
    }

    /// Decimal reference.
    #[must_use]
    pub const fn decimal(
        definition: Type,
        nullable: bool,
        precision: Option<i32>,
        scale: Option<i32>,
    ) -> Self {
        Self::with_facets(definition, nullable, Facets::Decimal { precision, scale })
    }

    /// Temporal reference.
    #[must_use]
    pub const fn temporal(definition: Type, nullable: bool, precision: Option<i32>) -> Self {
        Self::with_facets(definition, nullable, Facets::Temporal { precision })
    }

    /// Spatial reference.
    #[must_use]
    pub const fn spatial(definition: Type, nullable: bool, srid: Option<i32>) -> Self {
        Self::with_facets(definition, nullable, Facets::Spatial { srid })
    }

    /// Referenced type definition.
    #[must_use]
    pub const fn definition(&self) -> &Type {
        &self.definition
    }

    /// Whether the reference admits null.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Facets of the reference.
    #[must_use]
    pub const fn facets(&self) -> &Facets {
        &self.facets
    }

    /// Kind of the referenced definition.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        self.definition.kind()
    }

    /// Primitive kind of the referenced definition, `None` when the
    /// definition is not primitive.
    #[must_use]
    pub fn primitive_kind(&self) -> PrimitiveKind {
        self.definition.primitive_kind()
    }

    /// Fully-qualified name of the referenced definition, empty for
    /// unnamed definitions.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.definition.full_name()
    }

    /// Diagnostics of the referenced definition. Empty unless the
    /// definition is a bad-type sentinel.
    #[must_use]
    pub fn errors(&self) -> &[EdmError] {
        self.definition.errors()
    }

    /// Unbounded-length facet; `false` where not applicable.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        match self.facets {
            Facets::Binary { is_unbounded, .. }
            | Facets::String { is_unbounded, .. }
            | Facets::TypeDefinition { is_unbounded, .. } => is_unbounded,
            _ => false,
        }
    }

    /// Max-length facet; `None` where not applicable.
    #[must_use]
    pub fn max_length(&self) -> Option<i32> {
        match self.facets {
            Facets::Binary { max_length, .. }
            | Facets::String { max_length, .. }
            | Facets::TypeDefinition { max_length, .. } => max_length,
            _ => None,
        }
    }

    /// Unicode facet; `None` where not applicable.
    #[must_use]
    pub fn is_unicode(&self) -> Option<bool> {
        match self.facets {
            Facets::String { is_unicode, .. } | Facets::TypeDefinition { is_unicode, .. } => {
                is_unicode
            }
            _ => None,
        }
    }

    /// Precision facet; `None` where not applicable.
    #[must_use]
    pub fn precision(&self) -> Option<i32> {
        match self.facets {
            Facets::Decimal { precision, .. }
            | Facets::Temporal { precision }
            | Facets::TypeDefinition { precision, .. } => precision,
            _ => None,
        }
    }

    /// Scale facet; `None` where not applicable.
    #[must_use]
    pub fn scale(&self) -> Option<i32> {
        match self.facets {
            Facets::Decimal { scale, .. } | Facets::TypeDefinition { scale, .. } => scale,
            _ => None,
        }
    }

    /// Spatial reference identifier facet; `None` where not
    /// applicable.
    #[must_use]
    pub fn srid(&self) -> Option<i32> {
        match self.facets {
            Facets::Spatial { srid } | Facets::TypeDefinition { srid, .. } => srid,
            _ => None,
        }
    }
}

impl Display for TypeReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "[{} Nullable={}]",
            self.full_name(),
            if self.nullable { "True" } else { "False" }
        )
    }
}
