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

//! Entity containers and navigation sources.

use crate::model::operation::OperationImport;
use crate::types::structured::EntityType;
use crate::types::structured::NavigationProperty;
use std::sync::Arc;

/// Declared binding from a slash-delimited navigation path to a
/// target navigation source.
#[derive(Debug)]
pub struct NavigationBinding {
    /// Path from the declaring source, e.g. `Orders` or
    /// `Orders/Items`.
    pub path: String,
    /// Bound target. Invariant: an entity set or a singleton.
    pub target: NavigationSource,
}

impl NavigationBinding {
    #[must_use]
    pub fn new(path: impl Into<String>, target: NavigationSource) -> Self {
        Self {
            path: path.into(),
            target,
        }
    }
}

/// An entity set declared by a container.
#[derive(Debug)]
pub struct EntitySet {
    /// Name of the set.
    pub name: String,
    /// Element entity type.
    pub entity_type: Arc<EntityType>,
    /// Declared navigation property bindings.
    pub bindings: Vec<NavigationBinding>,
}

/// A singleton declared by a container.
#[derive(Debug)]
pub struct Singleton {
    /// Name of the singleton.
    pub name: String,
    /// Entity type of the singleton.
    pub entity_type: Arc<EntityType>,
    /// Declared navigation property bindings.
    pub bindings: Vec<NavigationBinding>,
}

/// Target of a containment navigation that has no declared binding.
#[derive(Debug)]
pub struct ContainedEntitySet {
    /// Source the navigation starts from.
    pub parent: NavigationSource,
    /// The containment navigation property.
    pub navigation: Arc<NavigationProperty>,
}

/// Target of a non-containment navigation that has no declared
/// binding.
#[derive(Debug)]
pub struct UnknownEntitySet {
    /// Source the navigation starts from.
    pub parent: NavigationSource,
    /// The navigation property.
    pub navigation: Arc<NavigationProperty>,
}

/// Anything a navigation path can land on.
#[derive(Debug, Clone)]
pub enum NavigationSource {
    EntitySet(Arc<EntitySet>),
    Singleton(Arc<Singleton>),
    Contained(Arc<ContainedEntitySet>),
    Unknown(Arc<UnknownEntitySet>),
}

impl NavigationSource {
    /// Name of the source; for navigation-derived sources, the name
    /// of the navigation property.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::EntitySet(set) => &set.name,
            Self::Singleton(singleton) => &singleton.name,
            Self::Contained(contained) => &contained.navigation.name,
            Self::Unknown(unknown) => &unknown.navigation.name,
        }
    }

    /// Entity type of the elements of this source.
    #[must_use]
    pub fn entity_type(&self) -> Option<&Arc<EntityType>> {
        match self {
            Self::EntitySet(set) => Some(&set.entity_type),
            Self::Singleton(singleton) => Some(&singleton.entity_type),
            Self::Contained(contained) => contained.navigation.target_entity_type(),
            Self::Unknown(unknown) => unknown.navigation.target_entity_type(),
        }
    }

    /// Resolve the target of a navigation property from this source.
    /// `path` is the slash-delimited path accumulated from the
    /// declared source. Declared bindings win; containment
    /// navigations fall back to a contained target, everything else
    /// to an unknown one.
    #[must_use]
    pub fn find_navigation_target(
        &self,
        navigation: &Arc<NavigationProperty>,
        path: &str,
    ) -> NavigationSource {
        if let Some(bound) = self.find_declared_binding(path) {
            return bound;
        }
        if navigation.contains_target {
            Self::Contained(Arc::new(ContainedEntitySet {
                parent: self.clone(),
                navigation: Arc::clone(navigation),
            }))
        } else {
            Self::Unknown(Arc::new(UnknownEntitySet {
                parent: self.clone(),
                navigation: Arc::clone(navigation),
            }))
        }
    }

    fn find_declared_binding(&self, path: &str) -> Option<NavigationSource> {
        match self {
            Self::EntitySet(set) => set
                .bindings
                .iter()
                .find(|binding| binding.path == path)
                .map(|binding| binding.target.clone()),
            Self::Singleton(singleton) => singleton
                .bindings
                .iter()
                .find(|binding| binding.path == path)
                .map(|binding| binding.target.clone()),
            Self::Contained(contained) => contained.parent.find_declared_binding(path),
            Self::Unknown(_) => None,
        }
    }
}

/// An element declared by an entity container.
#[derive(Debug, Clone)]
pub enum ContainerElement {
    EntitySet(Arc<EntitySet>),
    Singleton(Arc<Singleton>),
    OperationImport(Arc<OperationImport>),
}

/// An entity container. `extends` is a uniform optional relation; a
/// container logically includes the elements of the container it
/// extends.
#[derive(Debug)]
pub struct EntityContainer {
    /// Namespace the container is declared in.
    pub namespace: String,
    /// Unqualified name.
    pub name: String,
    /// Extended container, if any. Chains are searched with a
    /// bounded depth; see the resolution engine.
    pub extends: Option<Arc<EntityContainer>>,
    /// Declared elements.
    pub elements: Vec<ContainerElement>,
}

impl EntityContainer {
    /// Fully-qualified name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Find a declared entity set by name. Own elements only; the
    /// `extends` chain is searched by the resolution engine.
    #[must_use]
    pub fn find_entity_set(&self, name: &str) -> Option<Arc<EntitySet>> {
        self.elements.iter().find_map(|element| match element {
            ContainerElement::EntitySet(set) if set.name == name => Some(Arc::clone(set)),
            _ => None,
        })
    }

    /// Find a declared singleton by name. Own elements only.
    #[must_use]
    pub fn find_singleton(&self, name: &str) -> Option<Arc<Singleton>> {
        self.elements.iter().find_map(|element| match element {
            ContainerElement::Singleton(singleton) if singleton.name == name => {
                Some(Arc::clone(singleton))
            }
            _ => None,
        })
    }

    /// Find declared operation imports by name. Own elements only;
    /// several imports may share a name.
    #[must_use]
    pub fn find_operation_imports(&self, name: &str) -> Vec<Arc<OperationImport>> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                ContainerElement::OperationImport(import) if import.name == name => {
                    Some(Arc::clone(import))
                }
                _ => None,
            })
            .collect()
    }
}
