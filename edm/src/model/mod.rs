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

//! The model capability surface the semantics engines operate on.

/// Entity containers and navigation sources.
pub mod container;

/// Operations and operation imports.
pub mod operation;

/// Vocabulary terms.
pub mod term;

/// In-memory model implementation.
pub mod memory;

use crate::types::ComplexType;
use crate::types::EntityType;
use crate::types::EnumType;
use crate::types::Type;
use crate::types::TypeDefinition;
use std::sync::Arc;

pub use container::ContainedEntitySet;
pub use container::ContainerElement;
pub use container::EntityContainer;
pub use container::EntitySet;
pub use container::NavigationBinding;
pub use container::NavigationSource;
pub use container::Singleton;
pub use container::UnknownEntitySet;
pub use memory::MemoryModel;
pub use operation::Operation;
pub use operation::OperationImport;
pub use operation::OperationKind;
pub use operation::Parameter;
pub use term::Term;

/// A schema type declared by a model.
#[derive(Debug, Clone)]
pub enum SchemaType {
    Entity(Arc<EntityType>),
    Complex(Arc<ComplexType>),
    Enum(Arc<EnumType>),
    TypeDefinition(Arc<TypeDefinition>),
}

impl SchemaType {
    /// View the schema type as a `Type` handle.
    #[must_use]
    pub fn as_type(&self) -> Type {
        match self {
            Self::Entity(t) => Type::Entity(Arc::clone(t)),
            Self::Complex(t) => Type::Complex(Arc::clone(t)),
            Self::Enum(t) => Type::Enum(Arc::clone(t)),
            Self::TypeDefinition(t) => Type::TypeDefinition(Arc::clone(t)),
        }
    }

    /// Fully-qualified name.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self {
            Self::Entity(t) => t.full_name(),
            Self::Complex(t) => t.full_name(),
            Self::Enum(t) => t.full_name(),
            Self::TypeDefinition(t) => t.full_name(),
        }
    }
}

/// An element declared in a schema.
#[derive(Debug, Clone)]
pub enum SchemaElement {
    Type(SchemaType),
    Term(Arc<Term>),
    EntityContainer(Arc<EntityContainer>),
    Operation(Arc<Operation>),
}

/// Capability surface of the model storage layer. The semantics
/// engines only orchestrate cross-model searches on top of these
/// single-model finders.
pub trait Model: Send + Sync {
    /// Elements declared by this model.
    fn schema_elements(&self) -> Vec<SchemaElement>;

    /// Entity container of this model, if any.
    fn entity_container(&self) -> Option<Arc<EntityContainer>>;

    /// Models referenced by this model. Expected to contain every
    /// model reachable from this one; cross-model resolution searches
    /// the sequence in order without deduplication.
    fn referenced_models(&self) -> &[Arc<dyn Model>];

    /// Find a schema type declared by this model (not by referenced
    /// models) by fully-qualified name.
    fn find_declared_type(&self, qualified_name: &str) -> Option<SchemaType>;

    /// Find a term declared by this model by fully-qualified name.
    fn find_declared_term(&self, qualified_name: &str) -> Option<Arc<Term>>;

    /// Find an entity container declared by this model by simple or
    /// fully-qualified name.
    fn find_declared_entity_container(&self, name: &str) -> Option<Arc<EntityContainer>>;

    /// Find all operations declared by this model sharing a
    /// fully-qualified name.
    fn find_declared_operations(&self, qualified_name: &str) -> Vec<Arc<Operation>>;

    /// Find all bound operations declared by this model whose binding
    /// parameter accepts the given type.
    fn find_declared_bound_operations(&self, binding_type: &Type) -> Vec<Arc<Operation>>;

    /// Find the structured types declared by this model whose base is
    /// exactly the given type.
    fn find_directly_derived_types(&self, base: &SchemaType) -> Vec<SchemaType>;

    /// Alias registrations of this model as `(alias, namespace)`
    /// pairs. Scanned linearly; alias lists are expected to be small.
    fn namespace_aliases(&self) -> &[(String, String)];
}
