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

//! Structured (entity and complex) types and their properties.

use crate::types::reference::TypeReference;
use crate::types::Type;
use std::sync::Arc;

/// A structural (non-navigation) property.
#[derive(Debug)]
pub struct StructuralProperty {
    /// Name of the property.
    pub name: String,
    /// Declared type of the property.
    pub property_type: TypeReference,
}

impl StructuralProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, property_type: TypeReference) -> Self {
        Self {
            name: name.into(),
            property_type,
        }
    }
}

/// A navigation property. The target is either an entity type or a
/// collection of an entity type.
#[derive(Debug)]
pub struct NavigationProperty {
    /// Name of the property.
    pub name: String,
    /// Target of the navigation.
    pub target: TypeReference,
    /// Whether the target is contained by the declaring entity.
    pub contains_target: bool,
}

impl NavigationProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, target: TypeReference, contains_target: bool) -> Self {
        Self {
            name: name.into(),
            target,
            contains_target,
        }
    }

    /// Entity type at the end of the navigation, unwrapping a
    /// collection target.
    #[must_use]
    pub fn target_entity_type(&self) -> Option<&Arc<EntityType>> {
        match self.target.definition() {
            Type::Entity(entity) => Some(entity),
            Type::Collection(collection) => match collection.element.definition() {
                Type::Entity(entity) => Some(entity),
                _ => None,
            },
            _ => None,
        }
    }
}

/// An entity type.
#[derive(Debug)]
pub struct EntityType {
    /// Namespace the type is declared in.
    pub namespace: String,
    /// Unqualified name.
    pub name: String,
    /// Base type. Invariant: entity kind, acyclic chain.
    pub base: Option<Type>,
    /// Whether the type is abstract.
    pub is_abstract: bool,
    /// Whether instances may carry undeclared properties.
    pub is_open: bool,
    /// Names of the key properties.
    pub key: Vec<String>,
    /// Declared structural properties.
    pub structural: Vec<Arc<StructuralProperty>>,
    /// Declared navigation properties.
    pub navigation: Vec<Arc<NavigationProperty>>,
}

impl EntityType {
    /// Fully-qualified name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Find a navigation property by name, searching the base-type
    /// chain after the declared properties.
    #[must_use]
    pub fn find_navigation_property(&self, name: &str) -> Option<Arc<NavigationProperty>> {
        if let Some(found) = self.navigation.iter().find(|p| p.name == name) {
            return Some(Arc::clone(found));
        }
        match &self.base {
            Some(Type::Entity(base)) => base.find_navigation_property(name),
            _ => None,
        }
    }

    /// Find a structural property by name, searching the base-type
    /// chain after the declared properties.
    #[must_use]
    pub fn find_structural_property(&self, name: &str) -> Option<Arc<StructuralProperty>> {
        if let Some(found) = self.structural.iter().find(|p| p.name == name) {
            return Some(Arc::clone(found));
        }
        match &self.base {
            Some(Type::Entity(base)) => base.find_structural_property(name),
            _ => None,
        }
    }
}

/// A complex type.
#[derive(Debug)]
pub struct ComplexType {
    /// Namespace the type is declared in.
    pub namespace: String,
    /// Unqualified name.
    pub name: String,
    /// Base type. Invariant: complex kind, acyclic chain.
    pub base: Option<Type>,
    /// Whether the type is abstract.
    pub is_abstract: bool,
    /// Whether instances may carry undeclared properties.
    pub is_open: bool,
    /// Declared structural properties.
    pub structural: Vec<Arc<StructuralProperty>>,
    /// Declared navigation properties.
    pub navigation: Vec<Arc<NavigationProperty>>,
}

impl ComplexType {
    /// Fully-qualified name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}
