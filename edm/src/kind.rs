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

//! Closed classification of EDM types and primitive types.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Kind of an EDM type. Every type definition reports exactly one
/// kind; `None` denotes an unresolved or bad type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Unresolved or bad type.
    None,
    /// Primitive type in the `Edm` namespace.
    Primitive,
    /// Entity type.
    Entity,
    /// Complex type.
    Complex,
    /// Collection of some element type.
    Collection,
    /// Reference to an entity.
    EntityReference,
    /// Enumeration type.
    Enum,
    /// Named alias over a primitive type.
    TypeDefinition,
    /// `Edm.Untyped`.
    Untyped,
}

impl TypeKind {
    /// CSDL-facing name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Primitive => "Primitive",
            Self::Entity => "Entity",
            Self::Complex => "Complex",
            Self::Collection => "Collection",
            Self::EntityReference => "EntityReference",
            Self::Enum => "Enum",
            Self::TypeDefinition => "TypeDefinition",
            Self::Untyped => "Untyped",
        }
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.name().fmt(f)
    }
}

/// Kind of an EDM primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Unresolved or bad primitive type.
    None,
    Binary,
    Boolean,
    Byte,
    Date,
    DateTimeOffset,
    Decimal,
    Double,
    Duration,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    Stream,
    String,
    TimeOfDay,
    Geography,
    GeographyPoint,
    GeographyLineString,
    GeographyPolygon,
    GeographyCollection,
    GeographyMultiPolygon,
    GeographyMultiLineString,
    GeographyMultiPoint,
    Geometry,
    GeometryPoint,
    GeometryLineString,
    GeometryPolygon,
    GeometryCollection,
    GeometryMultiPolygon,
    GeometryMultiLineString,
    GeometryMultiPoint,
}

/// All primitive kinds, in declaration order. Handy for building the
/// canonical type table and for exhaustive tests.
pub const ALL_PRIMITIVE_KINDS: [PrimitiveKind; 33] = [
    PrimitiveKind::Binary,
    PrimitiveKind::Boolean,
    PrimitiveKind::Byte,
    PrimitiveKind::Date,
    PrimitiveKind::DateTimeOffset,
    PrimitiveKind::Decimal,
    PrimitiveKind::Double,
    PrimitiveKind::Duration,
    PrimitiveKind::Guid,
    PrimitiveKind::Int16,
    PrimitiveKind::Int32,
    PrimitiveKind::Int64,
    PrimitiveKind::SByte,
    PrimitiveKind::Single,
    PrimitiveKind::Stream,
    PrimitiveKind::String,
    PrimitiveKind::TimeOfDay,
    PrimitiveKind::Geography,
    PrimitiveKind::GeographyPoint,
    PrimitiveKind::GeographyLineString,
    PrimitiveKind::GeographyPolygon,
    PrimitiveKind::GeographyCollection,
    PrimitiveKind::GeographyMultiPolygon,
    PrimitiveKind::GeographyMultiLineString,
    PrimitiveKind::GeographyMultiPoint,
    PrimitiveKind::Geometry,
    PrimitiveKind::GeometryPoint,
    PrimitiveKind::GeometryLineString,
    PrimitiveKind::GeometryPolygon,
    PrimitiveKind::GeometryCollection,
    PrimitiveKind::GeometryMultiPolygon,
    PrimitiveKind::GeometryMultiLineString,
    PrimitiveKind::GeometryMultiPoint,
];

impl PrimitiveKind {
    /// Whole-number kinds.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::SByte | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    /// Kinds carrying a temporal precision facet.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Duration | Self::DateTimeOffset | Self::TimeOfDay)
    }

    /// Kinds in the `Geography` family.
    #[must_use]
    pub const fn is_geography(self) -> bool {
        matches!(
            self,
            Self::Geography
                | Self::GeographyPoint
                | Self::GeographyLineString
                | Self::GeographyPolygon
                | Self::GeographyCollection
                | Self::GeographyMultiPolygon
                | Self::GeographyMultiLineString
                | Self::GeographyMultiPoint
        )
    }

    /// Kinds in the `Geometry` family.
    #[must_use]
    pub const fn is_geometry(self) -> bool {
        matches!(
            self,
            Self::Geometry
                | Self::GeometryPoint
                | Self::GeometryLineString
                | Self::GeometryPolygon
                | Self::GeometryCollection
                | Self::GeometryMultiPolygon
                | Self::GeometryMultiLineString
                | Self::GeometryMultiPoint
        )
    }

    /// Kinds carrying a spatial reference identifier facet.
    #[must_use]
    pub const fn is_spatial(self) -> bool {
        self.is_geography() || self.is_geometry()
    }

    /// Unqualified name of the kind within the `Edm` namespace.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Binary => "Binary",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Date => "Date",
            Self::DateTimeOffset => "DateTimeOffset",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::Duration => "Duration",
            Self::Guid => "Guid",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::SByte => "SByte",
            Self::Single => "Single",
            Self::Stream => "Stream",
            Self::String => "String",
            Self::TimeOfDay => "TimeOfDay",
            Self::Geography => "Geography",
            Self::GeographyPoint => "GeographyPoint",
            Self::GeographyLineString => "GeographyLineString",
            Self::GeographyPolygon => "GeographyPolygon",
            Self::GeographyCollection => "GeographyCollection",
            Self::GeographyMultiPolygon => "GeographyMultiPolygon",
            Self::GeographyMultiLineString => "GeographyMultiLineString",
            Self::GeographyMultiPoint => "GeographyMultiPoint",
            Self::Geometry => "Geometry",
            Self::GeometryPoint => "GeometryPoint",
            Self::GeometryLineString => "GeometryLineString",
            Self::GeometryPolygon => "GeometryPolygon",
            Self::GeometryCollection => "GeometryCollection",
            Self::GeometryMultiPolygon => "GeometryMultiPolygon",
            Self::GeometryMultiLineString => "GeometryMultiLineString",
            Self::GeometryMultiPoint => "GeometryMultiPoint",
        }
    }

    /// Fully-qualified `Edm.*` name.
    #[must_use]
    pub fn full_name(self) -> String {
        format!("Edm.{}", self.name())
    }

    /// Parse a primitive kind from its name, with or without the
    /// `Edm.` qualifier. `None` (the unresolved marker) never parses.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("Edm.").unwrap_or(name);
        ALL_PRIMITIVE_KINDS
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.name().fmt(f)
    }
}
