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

//! Semantics engines layered over the type and model surfaces.

/// Type and reference equivalence.
pub mod equivalence;

/// Shape conversion of type references.
pub mod convert;

/// Qualified-name resolution across referenced models.
pub mod resolve;

/// Enum value and name codec.
pub mod enum_values;

/// Navigation path and entity-set path resolution.
pub mod navigation;
