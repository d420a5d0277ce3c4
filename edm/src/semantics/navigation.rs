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

//! Navigation path resolution and entity-set path validation.

use crate::error::EdmError;
use crate::error::ErrorCode;
use crate::error::Location;
use crate::model::Model;
use crate::model::NavigationSource;
use crate::model::Operation;
use crate::model::Parameter;
use crate::model::SchemaType;
use crate::semantics::equivalence;
use crate::semantics::resolve;
use crate::semantics::resolve::ResolveError;
use crate::types::EntityType;
use crate::types::NavigationProperty;
use crate::types::Type;
use log::trace;
use std::sync::Arc;

/// Resolve a slash-delimited navigation path starting at an entity
/// set or singleton of the model's container.
///
/// A dotted first segment matching the container's full name is
/// consumed; any other dotted first segment is taken as qualified and
/// only its last dot-delimited part names the starting element. Later
/// dotted segments are type casts narrowing the entity type the next
/// segment is looked up on; other segments are navigation property
/// names. Binding paths accumulate from the last declared source, so
/// bindings declared with multi-segment paths such as `Orders/Items`
/// are honored. Navigations without a declared binding continue
/// through contained or unknown sources. `None` when the first
/// segment names no source or a later segment names no navigation
/// property.
///
/// # Errors
///
/// Returns an error when a container `Extends` chain exceeds the
/// depth bound.
pub fn resolve_navigation_path(
    model: &dyn Model,
    path: &str,
) -> Result<Option<NavigationSource>, ResolveError> {
    let mut segments = path.split('/');
    let mut root = match segments.next() {
        Some(root) if !root.is_empty() => root,
        _ => return Ok(None),
    };
    // A dotted first segment naming the container is consumed, so
    // paths may be written relative to the container. Any other
    // dotted first segment is namespace-qualified; only the text
    // after the last dot names the starting element.
    if root.contains('.') {
        let names_container = match model.entity_container() {
            Some(container) => root.eq_ignore_ascii_case(&container.full_name()),
            None => false,
        };
        if names_container {
            root = match segments.next() {
                Some(next) if !next.is_empty() => next,
                _ => return Ok(None),
            };
        } else if let Some(idx) = root.rfind('.') {
            root = &root[idx + 1..];
            if root.is_empty() {
                return Ok(None);
            }
        }
    }
    let mut source = match resolve::find_navigation_source(model, root)? {
        Some(source) => source,
        None => return Ok(None),
    };
    let mut entity_type = match source.entity_type() {
        Some(entity_type) => Arc::clone(entity_type),
        None => return Ok(None),
    };

    // Binding path accumulated since the last declared source.
    let mut binding_path: Vec<String> = Vec::new();
    for segment in segments {
        if segment.contains('.') {
            entity_type = match cast_entity_type(model, segment, &entity_type) {
                Some(cast) => cast,
                None => return Ok(None),
            };
            binding_path.push(segment.to_string());
            continue;
        }
        let navigation = match entity_type.find_navigation_property(segment) {
            Some(navigation) => navigation,
            None => {
                trace!("'{}' has no navigation property '{}'", entity_type.full_name(), segment);
                return Ok(None);
            }
        };
        binding_path.push(segment.to_string());
        source = source.find_navigation_target(&navigation, &binding_path.join("/"));
        if matches!(
            source,
            NavigationSource::EntitySet(_) | NavigationSource::Singleton(_)
        ) {
            binding_path.clear();
        }
        entity_type = match source.entity_type() {
            Some(entity_type) => Arc::clone(entity_type),
            None => return Ok(None),
        };
    }
    Ok(Some(source))
}

fn cast_entity_type(
    model: &dyn Model,
    qualified_name: &str,
    current: &Arc<EntityType>,
) -> Option<Arc<EntityType>> {
    match resolve::find_type(model, qualified_name).found()? {
        SchemaType::Entity(cast) => {
            let cast_type = Type::Entity(Arc::clone(&cast));
            let current_type = Type::Entity(Arc::clone(current));
            if equivalence::is_on_same_type_hierarchy_line_with(&cast_type, &current_type) {
                Some(cast)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// One navigation step of a validated entity-set path.
#[derive(Debug)]
pub struct NavigationStep {
    /// The navigation property the step walks.
    pub navigation: Arc<NavigationProperty>,
    /// Segments accumulated since the last non-containment boundary,
    /// ending with this navigation's own name. Type-cast segments are
    /// included.
    pub path: Vec<String>,
}

/// Outcome of validating a bound operation's declared entity-set
/// path against its binding parameter.
#[derive(Debug)]
pub struct RelativeEntitySetPath {
    /// Binding parameter the path starts from.
    pub parameter: Option<Arc<Parameter>>,
    /// Navigation steps the path walks, in order.
    pub navigations: Vec<NavigationStep>,
    /// Entity type the path ends on.
    pub last_entity_type: Option<Arc<EntityType>>,
    /// Validation diagnostics. Empty when the path is valid.
    pub errors: Vec<EdmError>,
}

impl RelativeEntitySetPath {
    /// Whether the path validated cleanly.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    fn failed(errors: Vec<EdmError>) -> Self {
        Self {
            parameter: None,
            navigations: Vec::new(),
            last_entity_type: None,
            errors,
        }
    }
}

/// Validate an operation's declared entity-set path. The path must
/// start at the binding parameter's name and walk navigation
/// properties of the parameter's entity type, with dotted segments
/// as type casts. Validation stops at the first failure.
#[must_use]
pub fn try_relative_entity_set_path(
    operation: &Operation,
    model: &dyn Model,
) -> RelativeEntitySetPath {
    let location = Location::Object(operation.full_name());
    let path = match &operation.entity_set_path {
        Some(path) => path,
        None => {
            return RelativeEntitySetPath::failed(vec![EdmError::new(
                location.clone(),
                ErrorCode::InvalidEntitySetPath,
                format!("operation '{}' declares no entity set path", operation.full_name()),
            )])
        }
    };
    if !operation.is_bound {
        return RelativeEntitySetPath::failed(vec![EdmError::new(
            location.clone(),
            ErrorCode::OperationNotBound,
            format!(
                "entity set path '{}' is declared on the unbound operation '{}'",
                path,
                operation.full_name()
            ),
        )]);
    }
    let parameter = match operation.binding_parameter() {
        Some(parameter) => Arc::clone(parameter),
        None => {
            return RelativeEntitySetPath::failed(vec![EdmError::new(
                location.clone(),
                ErrorCode::InvalidEntitySetPath,
                format!("bound operation '{}' has no binding parameter", operation.full_name()),
            )])
        }
    };

    let mut segments = path.split('/');
    match segments.next() {
        Some(first) if first == parameter.name => {}
        _ => {
            return RelativeEntitySetPath::failed(vec![EdmError::new(
                location.clone(),
                ErrorCode::InvalidEntitySetPath,
                format!(
                    "entity set path '{}' must start at the binding parameter '{}'",
                    path, parameter.name
                ),
            )])
        }
    }

    let declared = parameter.parameter_type.definition();
    let declared = declared
        .element_type()
        .map(|element| element.definition())
        .unwrap_or(declared);
    let mut entity_type = match declared {
        Type::Entity(entity_type) => Arc::clone(entity_type),
        _ => {
            return RelativeEntitySetPath::failed(vec![EdmError::new(
                location.clone(),
                ErrorCode::InvalidEntitySetPath,
                format!(
                    "binding parameter '{}' of '{}' is not an entity type",
                    parameter.name,
                    operation.full_name()
                ),
            )])
        }
    };

    let mut navigations = Vec::new();
    // Sub-path tracking resets at every non-containment navigation.
    let mut sub_path: Vec<String> = Vec::new();
    for segment in segments {
        if segment.is_empty() {
            return RelativeEntitySetPath::failed(vec![EdmError::new(
                location.clone(),
                ErrorCode::InvalidEntitySetPath,
                format!("entity set path '{}' contains an empty segment", path),
            )]);
        }
        if segment.contains('.') {
            let cast = match resolve::find_type(model, segment).found() {
                Some(SchemaType::Entity(cast)) => cast,
                Some(other) => {
                    return RelativeEntitySetPath::failed(vec![EdmError::new(
                        location.clone(),
                        ErrorCode::TypeCastNotEntityType,
                        format!(
                            "type cast segment '{}' resolves to the {} type '{}'",
                            segment,
                            match other {
                                SchemaType::Complex(_) => "complex",
                                SchemaType::Enum(_) => "enumeration",
                                _ => "non-entity",
                            },
                            segment
                        ),
                    )])
                }
                None => {
                    return RelativeEntitySetPath::failed(vec![EdmError::new(
                        location.clone(),
                        ErrorCode::TypeCastNotEntityType,
                        format!("type cast segment '{}' resolves to no entity type", segment),
                    )])
                }
            };
            let cast_type = Type::Entity(Arc::clone(&cast));
            let current_type = Type::Entity(Arc::clone(&entity_type));
            if !equivalence::is_on_same_type_hierarchy_line_with(&cast_type, &current_type) {
                return RelativeEntitySetPath::failed(vec![EdmError::new(
                    location.clone(),
                    ErrorCode::TypeCastOutsideHierarchy,
                    format!(
                        "type cast '{}' is not on the same hierarchy line as '{}'",
                        segment,
                        entity_type.full_name()
                    ),
                )]);
            }
            entity_type = cast;
            sub_path.push(segment.to_string());
            continue;
        }
        let navigation = match entity_type.find_navigation_property(segment) {
            Some(navigation) => navigation,
            None => {
                return RelativeEntitySetPath::failed(vec![EdmError::new(
                    location.clone(),
                    ErrorCode::BadUnresolvedNavigationPropertyPath,
                    format!(
                        "'{}' has no navigation property '{}'",
                        entity_type.full_name(),
                        segment
                    ),
                )])
            }
        };
        entity_type = match navigation.target_entity_type() {
            Some(target) => Arc::clone(target),
            None => {
                return RelativeEntitySetPath::failed(vec![EdmError::new(
                    location.clone(),
                    ErrorCode::BadUnresolvedNavigationPropertyPath,
                    format!(
                        "navigation property '{}' does not target an entity type",
                        navigation.name
                    ),
                )])
            }
        };
        sub_path.push(segment.to_string());
        let contains_target = navigation.contains_target;
        navigations.push(NavigationStep {
            navigation,
            path: sub_path.clone(),
        });
        if !contains_target {
            sub_path.clear();
        }
    }

    RelativeEntitySetPath {
        parameter: Some(parameter),
        navigations,
        last_entity_type: Some(entity_type),
        errors: Vec::new(),
    }
}
