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

//! Type and reference equivalence.
//!
//! Schema types are nominal: two entity, complex or enum declarations
//! are equivalent only when they are the same declaration instance.
//! Primitive types are equivalent by name, and composite shapes
//! recurse structurally. Type definitions are transparent; they
//! compare as their underlying primitive.

use crate::kind::PrimitiveKind;
use crate::kind::TypeKind;
use crate::model::Model;
use crate::model::SchemaType;
use crate::types::Type;
use crate::types::TypeReference;
use std::collections::HashSet;
use std::sync::Arc;

/// Unwrap a type definition to its underlying primitive. Other types
/// pass through unchanged.
#[must_use]
fn actual_type(definition: &Type) -> Type {
    match definition {
        Type::TypeDefinition(type_definition) => {
            Type::Primitive(Arc::clone(&type_definition.underlying))
        }
        other => other.clone(),
    }
}

/// Whether two type definitions denote the same type.
#[must_use]
pub fn is_equivalent(a: &Type, b: &Type) -> bool {
    if Type::ptr_eq(a, b) {
        return true;
    }
    let a = actual_type(a);
    let b = actual_type(b);
    if a.kind() != b.kind() {
        return false;
    }
    match (&a, &b) {
        (Type::Primitive(_), Type::Primitive(_)) => {
            a.primitive_kind() == b.primitive_kind() && a.full_name() == b.full_name()
        }
        (Type::Entity(_), Type::Entity(_))
        | (Type::Complex(_), Type::Complex(_))
        | (Type::Enum(_), Type::Enum(_)) => Type::ptr_eq(&a, &b),
        (Type::Collection(x), Type::Collection(y)) => {
            reference_is_equivalent(&x.element, &y.element)
        }
        (Type::EntityReference(x), Type::EntityReference(y)) => is_equivalent(
            &Type::Entity(Arc::clone(&x.entity)),
            &Type::Entity(Arc::clone(&y.entity)),
        ),
        (Type::Untyped(_), Type::Untyped(_)) => true,
        // Equal-kind bad sentinels, including two unresolved types.
        (Type::Bad(_), _) | (_, Type::Bad(_)) => a.kind() == TypeKind::None,
        _ => false,
    }
}

/// Whether two type references denote the same type under the same
/// constraints. Nullability always participates; facet participation
/// follows the referenced primitive's shape.
#[must_use]
pub fn reference_is_equivalent(a: &TypeReference, b: &TypeReference) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    let a = normalize_reference(a);
    let b = normalize_reference(b);
    if a.kind() != b.kind() {
        return false;
    }
    if a.kind() != TypeKind::Primitive {
        return a.is_nullable() == b.is_nullable() && is_equivalent(a.definition(), b.definition());
    }
    if a.primitive_kind() != b.primitive_kind() {
        return false;
    }
    match a.primitive_kind() {
        PrimitiveKind::Binary => {
            a.is_nullable() == b.is_nullable()
                && a.is_unbounded() == b.is_unbounded()
                && a.max_length() == b.max_length()
        }
        PrimitiveKind::Decimal => {
            a.is_nullable() == b.is_nullable()
                && a.precision() == b.precision()
                && a.scale() == b.scale()
        }
        PrimitiveKind::String => {
            a.is_nullable() == b.is_nullable()
                && a.is_unbounded() == b.is_unbounded()
                && a.max_length() == b.max_length()
                && a.is_unicode() == b.is_unicode()
        }
        PrimitiveKind::Duration | PrimitiveKind::DateTimeOffset => {
            a.is_nullable() == b.is_nullable() && a.precision() == b.precision()
        }
        kind if kind.is_spatial() => {
            a.is_nullable() == b.is_nullable() && a.srid() == b.srid()
        }
        // TimeOfDay and all facet-less primitives take this branch.
        _ => a.is_nullable() == b.is_nullable() && is_equivalent(a.definition(), b.definition()),
    }
}

/// Unwrap a type-definition reference to a reference to its
/// underlying primitive with the declared facets re-applied.
fn normalize_reference(reference: &TypeReference) -> TypeReference {
    if reference.kind() == TypeKind::TypeDefinition {
        reference.as_primitive()
    } else {
        reference.clone()
    }
}

/// Whether `derived` transitively inherits from `base`. A type does
/// not inherit from itself.
#[must_use]
pub fn inherits_from(derived: &Type, base: &Type) -> bool {
    let mut current = derived.base_type();
    while let Some(ancestor) = current {
        if is_equivalent(ancestor, base) {
            return true;
        }
        current = ancestor.base_type();
    }
    false
}

/// Whether `candidate` is `base` or inherits from it.
#[must_use]
pub fn is_or_inherits_from(candidate: &Type, base: &Type) -> bool {
    if is_equivalent(candidate, base) {
        return true;
    }
    matches!(candidate, Type::Entity(_) | Type::Complex(_)) && inherits_from(candidate, base)
}

/// Whether two types lie on the same inheritance line, in either
/// direction.
#[must_use]
pub fn is_on_same_type_hierarchy_line_with(a: &Type, b: &Type) -> bool {
    is_or_inherits_from(a, b) || is_or_inherits_from(b, a)
}

/// Find every type transitively derived from `base` across the model
/// and its referenced models. Breadth-first over the directly-derived
/// relation; the visited set keys on declaration identity so shared
/// reference graphs do not loop.
#[must_use]
pub fn find_all_derived_types(model: &dyn Model, base: &SchemaType) -> Vec<SchemaType> {
    let mut found = Vec::new();
    let mut visited: HashSet<usize> = HashSet::new();
    visited.insert(schema_type_key(base));
    let mut pending = vec![base.clone()];
    while let Some(current) = pending.pop() {
        let mut direct = model.find_directly_derived_types(&current);
        for referenced in model.referenced_models() {
            direct.extend(referenced.find_directly_derived_types(&current));
        }
        for derived in direct {
            if visited.insert(schema_type_key(&derived)) {
                pending.push(derived.clone());
                found.push(derived);
            }
        }
    }
    found
}

fn schema_type_key(schema_type: &SchemaType) -> usize {
    match schema_type {
        SchemaType::Entity(t) => Arc::as_ptr(t) as usize,
        SchemaType::Complex(t) => Arc::as_ptr(t) as usize,
        SchemaType::Enum(t) => Arc::as_ptr(t) as usize,
        SchemaType::TypeDefinition(t) => Arc::as_ptr(t) as usize,
    }
}
