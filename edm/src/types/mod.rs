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

//! The EDM type model: a closed union over the finite shape set.

/// Primitive types of the `Edm` namespace.
pub mod primitive;

/// Structured (entity and complex) types.
pub mod structured;

/// Enumeration types.
pub mod enum_type;

/// Type definitions (primitive aliases).
pub mod type_definition;

/// Collection types.
pub mod collection;

/// Entity reference types.
pub mod entity_reference;

/// The `Edm.Untyped` type.
pub mod untyped;

/// Bad-type sentinels.
pub mod bad;

/// Type references with facets.
pub mod reference;

use crate::error::EdmError;
use crate::kind::PrimitiveKind;
use crate::kind::TypeKind;
use std::sync::Arc;

pub use bad::BadType;
pub use collection::CollectionType;
pub use entity_reference::EntityReferenceType;
pub use enum_type::EnumMember;
pub use enum_type::EnumType;
pub use enum_type::MemberName;
pub use primitive::primitive_type;
pub use primitive::primitive_type_by_name;
pub use primitive::PrimitiveType;
pub use reference::Facets;
pub use reference::TypeReference;
pub use structured::ComplexType;
pub use structured::EntityType;
pub use structured::NavigationProperty;
pub use structured::StructuralProperty;
pub use type_definition::TypeDefinition;
pub use untyped::UntypedType;

/// A type definition. Definitions are shared; a clone of a `Type` is
/// another handle to the same definition.
#[derive(Debug, Clone)]
pub enum Type {
    Primitive(Arc<PrimitiveType>),
    Entity(Arc<EntityType>),
    Complex(Arc<ComplexType>),
    Enum(Arc<EnumType>),
    TypeDefinition(Arc<TypeDefinition>),
    Collection(Arc<CollectionType>),
    EntityReference(Arc<EntityReferenceType>),
    Untyped(Arc<UntypedType>),
    Bad(Arc<BadType>),
}

impl Type {
    /// Kind of the type. Bad sentinels report the shape they stand in
    /// for.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Primitive(_) => TypeKind::Primitive,
            Self::Entity(_) => TypeKind::Entity,
            Self::Complex(_) => TypeKind::Complex,
            Self::Enum(_) => TypeKind::Enum,
            Self::TypeDefinition(_) => TypeKind::TypeDefinition,
            Self::Collection(_) => TypeKind::Collection,
            Self::EntityReference(_) => TypeKind::EntityReference,
            Self::Untyped(_) => TypeKind::Untyped,
            Self::Bad(bad) => bad.kind(),
        }
    }

    /// Namespace, for schema types.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::Primitive(t) => Some(t.namespace()),
            Self::Entity(t) => Some(&t.namespace),
            Self::Complex(t) => Some(&t.namespace),
            Self::Enum(t) => Some(&t.namespace),
            Self::TypeDefinition(t) => Some(&t.namespace),
            Self::Untyped(t) => Some(t.namespace()),
            Self::Collection(_) | Self::EntityReference(_) => None,
            Self::Bad(bad) => bad.namespace(),
        }
    }

    /// Simple name, for schema types.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Primitive(t) => Some(t.name()),
            Self::Entity(t) => Some(&t.name),
            Self::Complex(t) => Some(&t.name),
            Self::Enum(t) => Some(&t.name),
            Self::TypeDefinition(t) => Some(&t.name),
            Self::Untyped(t) => Some(t.name()),
            Self::Collection(_) | Self::EntityReference(_) => None,
            Self::Bad(bad) => bad.name(),
        }
    }

    /// Fully-qualified name: `Namespace.Name`, `Name` alone when the
    /// type has no namespace, empty for unnamed types.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.namespace(), self.name()) {
            (Some(namespace), Some(name)) => format!("{}.{}", namespace, name),
            (None, Some(name)) => name.to_string(),
            _ => String::new(),
        }
    }

    /// Primitive kind; `None` for non-primitive types.
    #[must_use]
    pub fn primitive_kind(&self) -> PrimitiveKind {
        match self {
            Self::Primitive(t) => t.kind,
            Self::Bad(bad) => bad.primitive_kind(),
            _ => PrimitiveKind::None,
        }
    }

    /// Diagnostics; empty unless the type is a bad sentinel.
    #[must_use]
    pub fn errors(&self) -> &[EdmError] {
        match self {
            Self::Bad(bad) => bad.errors(),
            _ => &[],
        }
    }

    /// Whether the type is a bad sentinel.
    #[must_use]
    pub fn is_bad(&self) -> bool {
        matches!(self, Self::Bad(_))
    }

    /// Element reference, for collection types (including
    /// collection-shaped bad sentinels).
    #[must_use]
    pub fn element_type(&self) -> Option<&TypeReference> {
        match self {
            Self::Collection(collection) => Some(&collection.element),
            Self::Bad(bad) => bad.element(),
            _ => None,
        }
    }

    /// Base type, for structured types.
    #[must_use]
    pub fn base_type(&self) -> Option<&Type> {
        match self {
            Self::Entity(entity) => entity.base.as_ref(),
            Self::Complex(complex) => complex.base.as_ref(),
            _ => None,
        }
    }

    /// Whether two handles point at the same definition instance.
    #[must_use]
    pub fn ptr_eq(a: &Type, b: &Type) -> bool {
        match (a, b) {
            (Self::Primitive(x), Self::Primitive(y)) => Arc::ptr_eq(x, y),
            (Self::Entity(x), Self::Entity(y)) => Arc::ptr_eq(x, y),
            (Self::Complex(x), Self::Complex(y)) => Arc::ptr_eq(x, y),
            (Self::Enum(x), Self::Enum(y)) => Arc::ptr_eq(x, y),
            (Self::TypeDefinition(x), Self::TypeDefinition(y)) => Arc::ptr_eq(x, y),
            (Self::Collection(x), Self::Collection(y)) => Arc::ptr_eq(x, y),
            (Self::EntityReference(x), Self::EntityReference(y)) => Arc::ptr_eq(x, y),
            (Self::Untyped(x), Self::Untyped(y)) => Arc::ptr_eq(x, y),
            (Self::Bad(x), Self::Bad(y)) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }
}
