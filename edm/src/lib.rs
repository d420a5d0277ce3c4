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

//! In-memory OData Entity Data Model type system.
//!
//! The crate models EDM schema types behind a closed [`types::Type`]
//! union, annotates uses of them with [`types::TypeReference`], and
//! layers semantics engines on top: equivalence, shape conversion,
//! qualified-name resolution across referenced models, an enum
//! value codec and navigation path resolution. Failed resolutions
//! and conversions produce bad-type sentinels carrying diagnostics
//! instead of halting traversal.

/// Type-kind and primitive-kind lattices.
pub mod kind;

/// Diagnostics attached to bad types and resolution failures.
pub mod error;

/// The EDM type model.
pub mod types;

/// Models, containers, operations and terms.
pub mod model;

/// Semantics engines over the type and model surfaces.
pub mod semantics;

/// Reexport the kinds to make them available through the crate root.
pub use kind::PrimitiveKind;
pub use kind::TypeKind;

/// Reexport the diagnostics surface.
pub use error::EdmError;
pub use error::ErrorCode;
pub use error::Location;

/// Reexport the core type handles.
pub use types::Type;
pub use types::TypeReference;

/// Reexport the model capability surface.
pub use model::MemoryModel;
pub use model::Model;

/// Reexport the resolution outcome type.
pub use semantics::resolve::Resolution;
