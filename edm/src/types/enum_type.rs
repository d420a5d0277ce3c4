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

//! Enumeration types.

use crate::kind::PrimitiveKind;
use tagged_types::TaggedType;

/// Name of an enumeration member.
pub type MemberName = TaggedType<String, MemberNameTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq)]
#[transparent(Debug, Display)]
#[capability(inner_access)]
pub enum MemberNameTag {}

/// A member of an enumeration type.
#[derive(Debug)]
pub struct EnumMember {
    /// Name of the member.
    pub name: MemberName,
    /// Integral value of the member.
    pub value: i64,
}

impl EnumMember {
    #[must_use]
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: MemberName::new(name.into()),
            value,
        }
    }
}

/// An enumeration type. Invariant: the underlying kind is integral.
#[derive(Debug)]
pub struct EnumType {
    /// Namespace the type is declared in.
    pub namespace: String,
    /// Unqualified name.
    pub name: String,
    /// Underlying primitive kind. Always an integer of some size.
    pub underlying: PrimitiveKind,
    /// Whether literals combine members bitwise.
    pub is_flags: bool,
    /// Declared members.
    pub members: Vec<EnumMember>,
}

impl EnumType {
    /// Fully-qualified name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}
