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

//! A compact in-memory model for callers without their own storage
//! layer, and for tests.

use crate::model::EntityContainer;
use crate::model::Model;
use crate::model::Operation;
use crate::model::SchemaElement;
use crate::model::SchemaType;
use crate::model::Term;
use crate::semantics::equivalence::is_or_inherits_from;
use crate::types::Type;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory model. Built up mutably, then typically shared behind an
/// `Arc<dyn Model>` when referenced from other models.
#[derive(Default)]
pub struct MemoryModel {
    types: HashMap<String, SchemaType>,
    terms: HashMap<String, Arc<Term>>,
    operations: HashMap<String, Vec<Arc<Operation>>>,
    container: Option<Arc<EntityContainer>>,
    referenced: Vec<Arc<dyn Model>>,
    aliases: Vec<(String, String)>,
}

impl MemoryModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a schema type.
    pub fn add_type(&mut self, schema_type: SchemaType) -> &mut Self {
        self.types.insert(schema_type.full_name(), schema_type);
        self
    }

    /// Declare a term.
    pub fn add_term(&mut self, term: Arc<Term>) -> &mut Self {
        self.terms.insert(term.full_name(), term);
        self
    }

    /// Declare an operation. Several operations may share a name.
    pub fn add_operation(&mut self, operation: Arc<Operation>) -> &mut Self {
        self.operations
            .entry(operation.full_name())
            .or_insert_with(Vec::new)
            .push(operation);
        self
    }

    /// Set the entity container.
    pub fn set_container(&mut self, container: Arc<EntityContainer>) -> &mut Self {
        self.container = Some(container);
        self
    }

    /// Add a referenced model.
    pub fn add_reference(&mut self, model: Arc<dyn Model>) -> &mut Self {
        self.referenced.push(model);
        self
    }

    /// Register a namespace alias.
    pub fn add_alias(&mut self, alias: impl Into<String>, namespace: impl Into<String>) -> &mut Self {
        self.aliases.push((alias.into(), namespace.into()));
        self
    }
}

impl Model for MemoryModel {
    fn schema_elements(&self) -> Vec<SchemaElement> {
        let mut elements: Vec<SchemaElement> = self
            .types
            .values()
            .cloned()
            .map(SchemaElement::Type)
            .collect();
        elements.extend(self.terms.values().cloned().map(SchemaElement::Term));
        elements.extend(
            self.operations
                .values()
                .flatten()
                .cloned()
                .map(SchemaElement::Operation),
        );
        if let Some(container) = &self.container {
            elements.push(SchemaElement::EntityContainer(Arc::clone(container)));
        }
        elements
    }

    fn entity_container(&self) -> Option<Arc<EntityContainer>> {
        self.container.as_ref().map(Arc::clone)
    }

    fn referenced_models(&self) -> &[Arc<dyn Model>] {
        &self.referenced
    }

    fn find_declared_type(&self, qualified_name: &str) -> Option<SchemaType> {
        self.types.get(qualified_name).cloned()
    }

    fn find_declared_term(&self, qualified_name: &str) -> Option<Arc<Term>> {
        self.terms.get(qualified_name).map(Arc::clone)
    }

    fn find_declared_entity_container(&self, name: &str) -> Option<Arc<EntityContainer>> {
        self.container
            .as_ref()
            .filter(|container| container.name == name || container.full_name() == name)
            .map(Arc::clone)
    }

    fn find_declared_operations(&self, qualified_name: &str) -> Vec<Arc<Operation>> {
        self.operations
            .get(qualified_name)
            .cloned()
            .unwrap_or_default()
    }

    fn find_declared_bound_operations(&self, binding_type: &Type) -> Vec<Arc<Operation>> {
        self.operations
            .values()
            .flatten()
            .filter(|operation| operation_binds_to(operation, binding_type))
            .cloned()
            .collect()
    }

    fn find_directly_derived_types(&self, base: &SchemaType) -> Vec<SchemaType> {
        let base = base.as_type();
        self.types
            .values()
            .filter(|candidate| match candidate.as_type().base_type() {
                Some(candidate_base) => Type::ptr_eq(candidate_base, &base),
                None => false,
            })
            .cloned()
            .collect()
    }

    fn namespace_aliases(&self) -> &[(String, String)] {
        &self.aliases
    }
}

/// Whether a bound operation's binding parameter accepts the given
/// type. Collection-valued binding parameters accept the collection's
/// element type hierarchy.
#[must_use]
pub fn operation_binds_to(operation: &Operation, binding_type: &Type) -> bool {
    let parameter = match operation.binding_parameter() {
        Some(parameter) => parameter,
        None => return false,
    };
    let declared = parameter.parameter_type.definition();
    let declared = declared.element_type().map(|e| e.definition()).unwrap_or(declared);
    let binding = binding_type
        .element_type()
        .map(|e| e.definition())
        .unwrap_or(binding_type);
    is_or_inherits_from(binding, declared)
}
