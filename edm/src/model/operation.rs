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

//! Operations (actions and functions) and operation imports.

use crate::types::reference::TypeReference;
use std::sync::Arc;

/// Whether an operation is an action or a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Action,
    Function,
}

/// A parameter of an operation.
#[derive(Debug)]
pub struct Parameter {
    /// Name of the parameter.
    pub name: String,
    /// Declared type.
    pub parameter_type: TypeReference,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, parameter_type: TypeReference) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }
}

/// An action or function.
#[derive(Debug)]
pub struct Operation {
    /// Namespace the operation is declared in.
    pub namespace: String,
    /// Unqualified name.
    pub name: String,
    /// Action or function.
    pub kind: OperationKind,
    /// Whether the first parameter binds the operation to a type.
    pub is_bound: bool,
    /// Declared entity-set path, for bound operations.
    pub entity_set_path: Option<String>,
    /// Declared parameters. For bound operations the first parameter
    /// is the binding parameter.
    pub parameters: Vec<Arc<Parameter>>,
    /// Declared return type.
    pub return_type: Option<TypeReference>,
}

impl Operation {
    /// Fully-qualified name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Binding parameter of a bound operation.
    #[must_use]
    pub fn binding_parameter(&self) -> Option<&Arc<Parameter>> {
        if self.is_bound {
            self.parameters.first()
        } else {
            None
        }
    }
}

/// An operation import declared by an entity container.
#[derive(Debug)]
pub struct OperationImport {
    /// Name of the import.
    pub name: String,
    /// The imported operation.
    pub operation: Arc<Operation>,
}
