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

//! Bad-type sentinels.

use crate::error::EdmError;
use crate::error::ErrorCode;
use crate::error::Location;
use crate::kind::PrimitiveKind;
use crate::kind::TypeKind;
use crate::types::reference::TypeReference;
use crate::types::Type;
use std::sync::Arc;

/// Substitute type definition standing in for a type that could not
/// be resolved or converted. Carries a non-empty error list and
/// otherwise behaves as a minimally valid instance of the shape it
/// stands in for, so traversal can continue.
#[derive(Debug)]
pub struct BadType {
    kind: TypeKind,
    primitive: PrimitiveKind,
    namespace: Option<String>,
    name: Option<String>,
    errors: Vec<EdmError>,
    element: Option<TypeReference>,
}

impl BadType {
    /// Create a bad type standing in for the given shape.
    #[must_use]
    pub fn new(kind: TypeKind, errors: Vec<EdmError>) -> Self {
        Self {
            kind,
            primitive: PrimitiveKind::None,
            namespace: None,
            name: None,
            errors: ensure_errors(errors),
            element: None,
        }
    }

    /// Create a bad primitive type of a specific primitive kind.
    #[must_use]
    pub fn primitive(primitive: PrimitiveKind, errors: Vec<EdmError>) -> Self {
        Self {
            kind: TypeKind::Primitive,
            primitive,
            namespace: None,
            name: None,
            errors: ensure_errors(errors),
            element: None,
        }
    }

    /// Create a bad collection type. Its element is itself a bad
    /// reference so element traversal keeps working.
    #[must_use]
    pub fn collection(errors: Vec<EdmError>) -> Self {
        let errors = ensure_errors(errors);
        let element = TypeReference::new(
            Type::Bad(Arc::new(Self::new(TypeKind::None, errors.clone()))),
            true,
        );
        Self {
            kind: TypeKind::Collection,
            primitive: PrimitiveKind::None,
            namespace: None,
            name: None,
            errors,
            element: Some(element),
        }
    }

    /// Create a bad type remembering the qualified name that failed
    /// to resolve.
    #[must_use]
    pub fn unresolved(qualified_name: &str, errors: Vec<EdmError>) -> Self {
        let (namespace, name) = match qualified_name.rfind('.') {
            Some(idx) => (
                Some(qualified_name[..idx].to_string()),
                Some(qualified_name[idx + 1..].to_string()),
            ),
            None => (None, Some(qualified_name.to_string())),
        };
        Self {
            kind: TypeKind::None,
            primitive: PrimitiveKind::None,
            namespace,
            name,
            errors: ensure_errors(errors),
            element: None,
        }
    }

    /// Shape this sentinel stands in for.
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Primitive kind, for primitive-shaped sentinels.
    #[must_use]
    pub const fn primitive_kind(&self) -> PrimitiveKind {
        self.primitive
    }

    /// Namespace of the name that failed to resolve, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Simple name of the name that failed to resolve, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diagnostics. Never empty.
    #[must_use]
    pub fn errors(&self) -> &[EdmError] {
        &self.errors
    }

    /// Element reference, for collection-shaped sentinels.
    #[must_use]
    pub fn element(&self) -> Option<&TypeReference> {
        self.element.as_ref()
    }
}

fn ensure_errors(errors: Vec<EdmError>) -> Vec<EdmError> {
    if errors.is_empty() {
        vec![EdmError::new(
            Location::Unknown,
            ErrorCode::BadUnresolvedType,
            "unresolved type",
        )]
    } else {
        errors
    }
}
