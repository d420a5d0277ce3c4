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

//! Diagnostics attached to bad-type sentinels and resolution failures.

use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Codes for the errors this library produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    /// A qualified name did not resolve to a schema type.
    BadUnresolvedType,
    /// A qualified name resolved to more than one element.
    BadAmbiguousElementBinding,
    /// A type reference could not be converted to the requested shape.
    CouldNotConvertTypeReference,
    /// An entity container `Extends` chain exceeded the depth bound.
    CyclicEntityContainer,
    /// A declared entity-set path failed structural validation.
    InvalidEntitySetPath,
    /// A type cast inside an entity-set path is not an entity type.
    TypeCastNotEntityType,
    /// A type cast inside an entity-set path is outside the current
    /// type hierarchy.
    TypeCastOutsideHierarchy,
    /// A path segment did not resolve to a navigation property.
    BadUnresolvedNavigationPropertyPath,
    /// An entity-set path was declared on an unbound operation.
    OperationNotBound,
}

impl ErrorCode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BadUnresolvedType => "BadUnresolvedType",
            Self::BadAmbiguousElementBinding => "BadAmbiguousElementBinding",
            Self::CouldNotConvertTypeReference => "CouldNotConvertTypeReference",
            Self::CyclicEntityContainer => "CyclicEntityContainer",
            Self::InvalidEntitySetPath => "InvalidEntitySetPath",
            Self::TypeCastNotEntityType => "TypeCastNotEntityType",
            Self::TypeCastOutsideHierarchy => "TypeCastOutsideHierarchy",
            Self::BadUnresolvedNavigationPropertyPath => "BadUnresolvedNavigationPropertyPath",
            Self::OperationNotBound => "OperationNotBound",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.name().fmt(f)
    }
}

/// Where an error was detected. When no richer location exists the
/// offending element is captured by its display rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Location {
    /// Location is not known.
    Unknown,
    /// Display rendering of the offending model element.
    Object(String),
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Unknown => "(unknown location)".fmt(f),
            Self::Object(obj) => write!(f, "({})", obj),
        }
    }
}

/// Immutable diagnostic value attached to bad-type sentinels and
/// accumulated by path validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdmError {
    /// Where the error was detected.
    pub location: Location,
    /// Error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl EdmError {
    /// Create a new error.
    #[must_use]
    pub fn new(location: Location, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            location,
            code,
            message: message.into(),
        }
    }
}

impl Display for EdmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {} {}", self.code, self.message, self.location)
    }
}
