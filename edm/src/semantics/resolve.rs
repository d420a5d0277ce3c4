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

//! Qualified-name resolution across a model and its referenced
//! models.
//!
//! Lookups search the model's own declarations and then every
//! referenced model. A name declared by more than one model resolves
//! to an ambiguous result carrying all declarations; the outcome does
//! not depend on reference order. Container element lookups follow
//! the `Extends` chain with a bounded depth.

use crate::error::EdmError;
use crate::error::ErrorCode;
use crate::error::Location;
use crate::model::EntityContainer;
use crate::model::EntitySet;
use crate::model::Model;
use crate::model::NavigationSource;
use crate::model::Operation;
use crate::model::OperationImport;
use crate::model::SchemaType;
use crate::model::Singleton;
use crate::model::Term;
use crate::types::BadType;
use crate::types::Type;
use log::debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Arc;

/// Upper bound on `Extends` chain traversal. A chain longer than this
/// is treated as cyclic.
pub const CONTAINER_EXTENDS_MAX_DEPTH: usize = 100;

/// Outcome of a cross-model name lookup.
#[derive(Debug, Clone)]
pub enum Resolution<T> {
    /// No model declares the name.
    NotFound,
    /// Exactly one model declares the name.
    Found(T),
    /// More than one model declares the name. All declarations are
    /// carried, in search order.
    Ambiguous(Vec<T>),
}

impl<T> Resolution<T> {
    /// The unique declaration, if the lookup found exactly one.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::Ambiguous(_) => None,
        }
    }

    /// Whether the lookup found more than one declaration.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(_))
    }
}

/// Errors the resolution engine can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An `Extends` chain exceeded [`CONTAINER_EXTENDS_MAX_DEPTH`].
    CyclicEntityContainer { container: String },
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::CyclicEntityContainer { container } => write!(
                f,
                "entity container '{}' extends chain exceeds depth {}",
                container, CONTAINER_EXTENDS_MAX_DEPTH
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<ResolveError> for EdmError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::CyclicEntityContainer { ref container } => Self::new(
                Location::Object(container.clone()),
                ErrorCode::CyclicEntityContainer,
                error.to_string(),
            ),
        }
    }
}

/// Rewrite an aliased namespace prefix to its target namespace. The
/// first dot-delimited segment is compared against the model's alias
/// registrations; unmatched names pass through unchanged.
#[must_use]
pub fn replace_alias(model: &dyn Model, name: &str) -> String {
    if let Some(idx) = name.find('.') {
        let prefix = &name[..idx];
        for (alias, namespace) in model.namespace_aliases() {
            if alias == prefix {
                return format!("{}{}", namespace, &name[idx..]);
            }
        }
    }
    name.to_string()
}

fn find_across_models<T, F>(model: &dyn Model, name: &str, what: &str, find: F) -> Resolution<T>
where
    F: Fn(&dyn Model) -> Option<T>,
{
    let mut found = Vec::new();
    if let Some(hit) = find(model) {
        found.push(hit);
    }
    for referenced in model.referenced_models() {
        if let Some(hit) = find(referenced.as_ref()) {
            found.push(hit);
        }
    }
    if found.is_empty() {
        Resolution::NotFound
    } else if found.len() == 1 {
        Resolution::Found(found.remove(0))
    } else {
        debug!(
            "{} '{}' is declared by {} models; resolving as ambiguous",
            what,
            name,
            found.len()
        );
        Resolution::Ambiguous(found)
    }
}

/// Find a schema type by qualified name across the model and its
/// referenced models. Alias prefixes are rewritten first.
#[must_use]
pub fn find_type(model: &dyn Model, qualified_name: &str) -> Resolution<SchemaType> {
    let name = replace_alias(model, qualified_name);
    find_across_models(model, &name, "type", |m| m.find_declared_type(&name))
}

/// Find a schema type, substituting a bad sentinel for a missing or
/// ambiguous name so the caller always receives a dereferenceable
/// definition.
#[must_use]
pub fn find_type_or_bad(model: &dyn Model, qualified_name: &str) -> Type {
    let name = replace_alias(model, qualified_name);
    match find_across_models(model, &name, "type", |m| m.find_declared_type(&name)) {
        Resolution::Found(schema_type) => schema_type.as_type(),
        Resolution::NotFound => Type::Bad(Arc::new(BadType::unresolved(
            &name,
            vec![EdmError::new(
                Location::Object(name.clone()),
                ErrorCode::BadUnresolvedType,
                format!("the type '{}' could not be found", name),
            )],
        ))),
        Resolution::Ambiguous(all) => Type::Bad(Arc::new(BadType::unresolved(
            &name,
            vec![EdmError::new(
                Location::Object(name.clone()),
                ErrorCode::BadAmbiguousElementBinding,
                format!("the name '{}' is bound to {} schema elements", name, all.len()),
            )],
        ))),
    }
}

/// Find a vocabulary term by qualified name.
#[must_use]
pub fn find_term(model: &dyn Model, qualified_name: &str) -> Resolution<Arc<Term>> {
    let name = replace_alias(model, qualified_name);
    find_across_models(model, &name, "term", |m| m.find_declared_term(&name))
}

/// Find an entity container by simple or qualified name.
#[must_use]
pub fn find_entity_container(model: &dyn Model, name: &str) -> Resolution<Arc<EntityContainer>> {
    let name = replace_alias(model, name);
    find_across_models(model, &name, "entity container", |m| {
        m.find_declared_entity_container(&name)
    })
}

/// Find every operation sharing a qualified name, across the model
/// and its referenced models. Overloads are expected; the result is a
/// plain list rather than a [`Resolution`].
#[must_use]
pub fn find_operations(model: &dyn Model, qualified_name: &str) -> Vec<Arc<Operation>> {
    let name = replace_alias(model, qualified_name);
    let mut found = model.find_declared_operations(&name);
    for referenced in model.referenced_models() {
        found.extend(referenced.find_declared_operations(&name));
    }
    found
}

/// Find every bound operation whose binding parameter accepts the
/// given type, across the model and its referenced models.
#[must_use]
pub fn find_bound_operations(model: &dyn Model, binding_type: &Type) -> Vec<Arc<Operation>> {
    let mut found = model.find_declared_bound_operations(binding_type);
    for referenced in model.referenced_models() {
        found.extend(referenced.find_declared_bound_operations(binding_type));
    }
    found
}

/// Find the bound operations with the given qualified name whose
/// binding parameter accepts the given type. Alias prefixes are
/// rewritten first.
#[must_use]
pub fn find_bound_operations_by_name(
    model: &dyn Model,
    qualified_name: &str,
    binding_type: &Type,
) -> Vec<Arc<Operation>> {
    let name = replace_alias(model, qualified_name);
    find_bound_operations(model, binding_type)
        .into_iter()
        .filter(|operation| operation.full_name() == name)
        .collect()
}

fn find_in_chain<T, F>(
    container: &Arc<EntityContainer>,
    depth: usize,
    find: &F,
) -> Result<Option<T>, ResolveError>
where
    F: Fn(&EntityContainer) -> Option<T>,
{
    if depth == 0 {
        return Err(ResolveError::CyclicEntityContainer {
            container: container.full_name(),
        });
    }
    if let Some(hit) = find(container) {
        return Ok(Some(hit));
    }
    match &container.extends {
        Some(parent) => find_in_chain(parent, depth - 1, find),
        None => Ok(None),
    }
}

fn collect_in_chain<T, F>(
    container: &Arc<EntityContainer>,
    depth: usize,
    find: &F,
    into: &mut Vec<T>,
) -> Result<(), ResolveError>
where
    F: Fn(&EntityContainer) -> Vec<T>,
{
    if depth == 0 {
        return Err(ResolveError::CyclicEntityContainer {
            container: container.full_name(),
        });
    }
    into.extend(find(container));
    match &container.extends {
        Some(parent) => collect_in_chain(parent, depth - 1, find, into),
        None => Ok(()),
    }
}

/// Split a container-qualified element name. `Container.Element` and
/// `Ns.Container.Element` address an element of the model's own
/// container by its simple or full name; a name whose prefix matches
/// neither is treated as a plain element name of that container.
fn container_scope(
    model: &dyn Model,
    name: &str,
) -> Option<(Arc<EntityContainer>, String)> {
    let idx = name.rfind('.')?;
    let container_name = &name[..idx];
    let simple = &name[idx + 1..];
    let container = model.entity_container()?;
    if container.name == container_name || container.full_name() == container_name {
        Some((container, simple.to_string()))
    } else {
        None
    }
}

fn scoped_container(
    model: &dyn Model,
    name: &str,
) -> Option<(Arc<EntityContainer>, String)> {
    if let Some(scope) = container_scope(model, name) {
        return Some(scope);
    }
    model
        .entity_container()
        .map(|container| (container, name.to_string()))
}

/// Find an entity set by plain or container-qualified name, following
/// the container's `Extends` chain.
///
/// # Errors
///
/// Returns an error when the `Extends` chain exceeds the depth bound.
pub fn find_entity_set(
    model: &dyn Model,
    name: &str,
) -> Result<Option<Arc<EntitySet>>, ResolveError> {
    match scoped_container(model, name) {
        Some((container, simple)) => find_in_chain(
            &container,
            CONTAINER_EXTENDS_MAX_DEPTH,
            &|c: &EntityContainer| c.find_entity_set(&simple),
        ),
        None => Ok(None),
    }
}

/// Find a singleton by plain or container-qualified name, following
/// the container's `Extends` chain.
///
/// # Errors
///
/// Returns an error when the `Extends` chain exceeds the depth bound.
pub fn find_singleton(
    model: &dyn Model,
    name: &str,
) -> Result<Option<Arc<Singleton>>, ResolveError> {
    match scoped_container(model, name) {
        Some((container, simple)) => find_in_chain(
            &container,
            CONTAINER_EXTENDS_MAX_DEPTH,
            &|c: &EntityContainer| c.find_singleton(&simple),
        ),
        None => Ok(None),
    }
}

/// Find operation imports by plain or container-qualified name,
/// accumulating along the `Extends` chain.
///
/// # Errors
///
/// Returns an error when the `Extends` chain exceeds the depth bound.
pub fn find_operation_imports(
    model: &dyn Model,
    name: &str,
) -> Result<Vec<Arc<OperationImport>>, ResolveError> {
    match scoped_container(model, name) {
        Some((container, simple)) => {
            let mut found = Vec::new();
            collect_in_chain(
                &container,
                CONTAINER_EXTENDS_MAX_DEPTH,
                &|c: &EntityContainer| c.find_operation_imports(&simple),
                &mut found,
            )?;
            Ok(found)
        }
        None => Ok(Vec::new()),
    }
}

/// Find a navigation source (entity set or singleton) by plain or
/// container-qualified name.
///
/// # Errors
///
/// Returns an error when the `Extends` chain exceeds the depth bound.
pub fn find_navigation_source(
    model: &dyn Model,
    name: &str,
) -> Result<Option<NavigationSource>, ResolveError> {
    if let Some(set) = find_entity_set(model, name)? {
        return Ok(Some(NavigationSource::EntitySet(set)));
    }
    Ok(find_singleton(model, name)?.map(NavigationSource::Singleton))
}
