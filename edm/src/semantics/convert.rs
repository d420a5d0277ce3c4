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

//! Shape conversion of type references.
//!
//! Every converter is total: a reference that is not of the requested
//! shape converts to a reference to a bad sentinel of that shape,
//! carrying a conversion diagnostic. References to bad definitions
//! convert without stacking new diagnostics on top of the old ones.
//! Only `as_primitive` unwraps type-definition references to their
//! underlying primitive with declared facets re-applied; the
//! facet-narrowing converters check the declared shape as is.

use crate::error::EdmError;
use crate::error::ErrorCode;
use crate::error::Location;
use crate::kind::PrimitiveKind;
use crate::kind::TypeKind;
use crate::types::BadType;
use crate::types::Type;
use crate::types::TypeReference;
use std::sync::Arc;

impl TypeReference {
    /// Convert to a primitive reference. Type definitions unwrap to
    /// their underlying primitive, re-applying the facets declared on
    /// this reference to the underlying kind's shape.
    #[must_use]
    pub fn as_primitive(&self) -> Self {
        if self.kind() == TypeKind::Primitive {
            return self.clone();
        }
        if let Type::TypeDefinition(type_definition) = self.definition() {
            let definition = Type::Primitive(Arc::clone(&type_definition.underlying));
            let nullable = self.is_nullable();
            return match type_definition.underlying.kind {
                PrimitiveKind::Binary => {
                    Self::binary(definition, nullable, self.is_unbounded(), self.max_length())
                }
                PrimitiveKind::Decimal => {
                    Self::decimal(definition, nullable, self.precision(), self.scale())
                }
                PrimitiveKind::String => Self::string(
                    definition,
                    nullable,
                    self.is_unbounded(),
                    self.max_length(),
                    self.is_unicode(),
                ),
                kind if kind.is_temporal() => {
                    Self::temporal(definition, nullable, self.precision())
                }
                kind if kind.is_spatial() => Self::spatial(definition, nullable, self.srid()),
                _ => Self::new(definition, nullable),
            };
        }
        self.bad_shape(BadType::new(TypeKind::Primitive, self.conversion_errors("Primitive")))
    }

    /// Convert to a collection reference.
    #[must_use]
    pub fn as_collection(&self) -> Self {
        if self.kind() == TypeKind::Collection {
            return self.clone();
        }
        self.bad_shape(BadType::collection(self.conversion_errors("Collection")))
    }

    /// Convert to a structured (entity or complex) reference.
    #[must_use]
    pub fn as_structured(&self) -> Self {
        if matches!(self.kind(), TypeKind::Entity | TypeKind::Complex) {
            return self.clone();
        }
        self.bad_shape(BadType::new(TypeKind::Entity, self.conversion_errors("Structured")))
    }

    /// Convert to an entity reference.
    #[must_use]
    pub fn as_entity(&self) -> Self {
        if self.kind() == TypeKind::Entity {
            return self.clone();
        }
        self.bad_shape(BadType::new(TypeKind::Entity, self.conversion_errors("Entity")))
    }

    /// Convert to a complex reference.
    #[must_use]
    pub fn as_complex(&self) -> Self {
        if self.kind() == TypeKind::Complex {
            return self.clone();
        }
        self.bad_shape(BadType::new(TypeKind::Complex, self.conversion_errors("Complex")))
    }

    /// Convert to an enumeration reference.
    #[must_use]
    pub fn as_enum(&self) -> Self {
        if self.kind() == TypeKind::Enum {
            return self.clone();
        }
        self.bad_shape(BadType::new(TypeKind::Enum, self.conversion_errors("Enumeration")))
    }

    /// Convert to a type-definition reference.
    #[must_use]
    pub fn as_type_definition(&self) -> Self {
        if self.kind() == TypeKind::TypeDefinition {
            return self.clone();
        }
        self.bad_shape(BadType::new(
            TypeKind::TypeDefinition,
            self.conversion_errors("TypeDefinition"),
        ))
    }

    /// Convert to an entity-reference reference.
    #[must_use]
    pub fn as_entity_reference(&self) -> Self {
        if self.kind() == TypeKind::EntityReference {
            return self.clone();
        }
        self.bad_shape(BadType::new(
            TypeKind::EntityReference,
            self.conversion_errors("EntityReference"),
        ))
    }

    /// Convert to an `Edm.String` reference. A narrowing check; type
    /// definitions are not unwrapped.
    #[must_use]
    pub fn as_string(&self) -> Self {
        if self.primitive_kind() == PrimitiveKind::String {
            return self.clone();
        }
        self.bad_shape(BadType::primitive(
            PrimitiveKind::String,
            self.conversion_errors("String"),
        ))
    }

    /// Convert to an `Edm.Binary` reference. A narrowing check; type
    /// definitions are not unwrapped.
    #[must_use]
    pub fn as_binary(&self) -> Self {
        if self.primitive_kind() == PrimitiveKind::Binary {
            return self.clone();
        }
        self.bad_shape(BadType::primitive(
            PrimitiveKind::Binary,
            self.conversion_errors("Binary"),
        ))
    }

    /// Convert to an `Edm.Decimal` reference. A narrowing check; type
    /// definitions are not unwrapped.
    #[must_use]
    pub fn as_decimal(&self) -> Self {
        if self.primitive_kind() == PrimitiveKind::Decimal {
            return self.clone();
        }
        self.bad_shape(BadType::primitive(
            PrimitiveKind::Decimal,
            self.conversion_errors("Decimal"),
        ))
    }

    /// Convert to a temporal (`Duration`, `DateTimeOffset`,
    /// `TimeOfDay`) reference. A narrowing check; type definitions
    /// are not unwrapped.
    #[must_use]
    pub fn as_temporal(&self) -> Self {
        if self.primitive_kind().is_temporal() {
            return self.clone();
        }
        self.bad_shape(BadType::new(TypeKind::Primitive, self.conversion_errors("Temporal")))
    }

    /// Convert to a spatial reference. A narrowing check; type
    /// definitions are not unwrapped.
    #[must_use]
    pub fn as_spatial(&self) -> Self {
        if self.primitive_kind().is_spatial() {
            return self.clone();
        }
        self.bad_shape(BadType::new(TypeKind::Primitive, self.conversion_errors("Spatial")))
    }

    fn bad_shape(&self, bad: BadType) -> Self {
        Self::new(Type::Bad(Arc::new(bad)), self.is_nullable())
    }

    /// Diagnostics for a failed conversion. A reference to an already
    /// bad definition carries that definition's diagnostics forward
    /// unchanged.
    fn conversion_errors(&self, shape: &str) -> Vec<EdmError> {
        if self.definition().is_bad() {
            return self.errors().to_vec();
        }
        let name = match self.full_name() {
            name if name.is_empty() => "<unnamed type>".to_string(),
            name => name,
        };
        vec![EdmError::new(
            Location::Object(name.clone()),
            ErrorCode::CouldNotConvertTypeReference,
            format!("the type '{}' could not be converted to be a '{}' type", name, shape),
        )]
    }
}
