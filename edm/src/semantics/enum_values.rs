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

//! Enum value and name codec.
//!
//! Parses member names (and comma-separated flag combinations) to
//! integral values and renders values back to literals. Rendering a
//! flags value lists the matched member names ascending by value; a
//! value with unmatched bits left over renders as its decimal string.
//! Per-enum member tables are kept in a bounded cache keyed on the
//! enum declaration instance.

use crate::types::EnumType;
use crate::types::Type;
use crate::types::TypeReference;
use log::trace;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Whether member name matching ignores ASCII case.
pub type IgnoreCase = TaggedType<bool, IgnoreCaseTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, PartialEq, Eq)]
#[transparent(Debug, Display)]
#[capability(inner_access)]
pub enum IgnoreCaseTag {}

/// Member table of one enum declaration, sorted ascending by value.
#[derive(Debug)]
struct MemberLookup {
    /// Owning declaration. Held so the cache key address stays pinned
    /// while the entry lives.
    owner: Arc<EnumType>,
    /// Member values, ascending. Parallel to `names`.
    values: Vec<i64>,
    /// Member names, parallel to `values`.
    names: Vec<String>,
}

impl MemberLookup {
    fn build(enum_type: &Arc<EnumType>) -> Self {
        let mut pairs: Vec<(i64, String)> = enum_type
            .members
            .iter()
            .map(|member| (member.value, member.name.inner().clone()))
            .collect();
        pairs.sort_by_key(|(value, _)| *value);
        let (values, names) = pairs.into_iter().unzip();
        Self {
            owner: Arc::clone(enum_type),
            values,
            names,
        }
    }

    fn find_member(&self, name: &str, ignore_case: bool) -> Option<i64> {
        self.names
            .iter()
            .position(|candidate| {
                if ignore_case {
                    candidate.eq_ignore_ascii_case(name)
                } else {
                    candidate == name
                }
            })
            .map(|idx| self.values[idx])
    }

    fn parse(&self, literal: &str, ignore_case: &IgnoreCase) -> Option<i64> {
        let ignore_case = *ignore_case.inner();
        // The first character of the whole literal picks the mode: a
        // leading digit or sign makes every segment a raw integer
        // (bypassing member validation), anything else makes every
        // segment a member name.
        let numeric = matches!(
            literal.chars().next(),
            Some(c) if c.is_ascii_digit() || c == '+' || c == '-'
        );
        let mut value = 0u64;
        for segment in literal.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                return None;
            }
            let parsed = if numeric {
                segment.parse::<i64>().ok()?
            } else {
                self.find_member(segment, ignore_case)?
            };
            value |= parsed as u64;
        }
        Some(value as i64)
    }

    fn render(&self, value: i64) -> String {
        if !self.owner.is_flags {
            // Values are sorted ascending, so the exact match is a
            // binary search away.
            return match self.values.binary_search(&value) {
                Ok(idx) => self.names[idx].clone(),
                Err(_) => value.to_string(),
            };
        }
        self.render_flags(value)
    }

    /// Flags rendering. Scans members descending by value, clearing
    /// the bits of each member fully contained in the remainder; the
    /// matched names come out ascending. A zero-valued member only
    /// ever names the zero value itself.
    fn render_flags(&self, value: i64) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut remaining = value;
        for idx in (0..self.values.len()).rev() {
            let candidate = self.values[idx];
            if idx == 0 && candidate == 0 {
                break;
            }
            if remaining & candidate == candidate {
                remaining -= candidate;
                parts.push(&self.names[idx]);
            }
        }
        if remaining != 0 {
            return value.to_string();
        }
        if value != 0 {
            parts.reverse();
            return parts.join(", ");
        }
        if self.values.first() == Some(&0) {
            self.names[0].clone()
        } else {
            "0".to_string()
        }
    }
}

struct CacheEntry {
    lookup: Arc<MemberLookup>,
    inserted: u64,
}

/// Bounded cache of per-enum member tables. Keyed on the declaration
/// instance; when full, inserting evicts the oldest entry.
pub struct EnumValueCache {
    capacity: usize,
    tick: AtomicU64,
    entries: RwLock<HashMap<usize, CacheEntry>>,
}

/// Default capacity of [`EnumValueCache`].
pub const DEFAULT_ENUM_CACHE_CAPACITY: usize = 100;

impl EnumValueCache {
    /// Cache holding at most `capacity` enum member tables.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            tick: AtomicU64::new(0),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Parse an enum literal to its integral value. Flags enums
    /// accept comma-separated member lists. A literal whose first
    /// character is a digit or sign parses every segment as a raw
    /// integer without member validation; any other literal parses
    /// every segment as a member name. `None` when a segment fails
    /// its mode, or when a non-flags literal has several segments.
    #[must_use]
    pub fn try_parse_enum(
        &self,
        enum_type: &Arc<EnumType>,
        literal: &str,
        ignore_case: IgnoreCase,
    ) -> Option<i64> {
        if !enum_type.is_flags && literal.contains(',') {
            return None;
        }
        self.lookup(enum_type).parse(literal, &ignore_case)
    }

    /// Render an integral value as an enum literal. Values matching
    /// no member (or, for flags, with unmatched bits left over)
    /// render as decimal strings.
    #[must_use]
    pub fn to_string_literal(&self, enum_type: &Arc<EnumType>, value: i64) -> String {
        self.lookup(enum_type).render(value)
    }

    /// Render a value against a type reference. References to enum
    /// definitions dispatch through the member table; anything else
    /// renders the decimal value.
    #[must_use]
    pub fn reference_to_string_literal(&self, reference: &TypeReference, value: i64) -> String {
        match reference.definition() {
            Type::Enum(enum_type) => self.to_string_literal(enum_type, value),
            _ => value.to_string(),
        }
    }

    fn lookup(&self, enum_type: &Arc<EnumType>) -> Arc<MemberLookup> {
        let key = Arc::as_ptr(enum_type) as usize;
        if let Some(entry) = self.entries.read().get(&key) {
            return Arc::clone(&entry.lookup);
        }
        let lookup = Arc::new(MemberLookup::build(enum_type));
        let mut entries = self.entries.write();
        // Another thread may have built the table while this one
        // waited for the write lock.
        if let Some(entry) = entries.get(&key) {
            return Arc::clone(&entry.lookup);
        }
        if entries.len() >= self.capacity {
            if let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted)
                .map(|(key, _)| *key)
            {
                trace!("enum value cache full; evicting oldest entry");
                entries.remove(&oldest);
            }
        }
        entries.insert(
            key,
            CacheEntry {
                lookup: Arc::clone(&lookup),
                inserted: self.tick.fetch_add(1, Ordering::Relaxed),
            },
        );
        lookup
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

impl Default for EnumValueCache {
    fn default() -> Self {
        Self::new(DEFAULT_ENUM_CACHE_CAPACITY)
    }
}

static DEFAULT_CACHE: Lazy<EnumValueCache> = Lazy::new(EnumValueCache::default);

/// Parse an enum literal through the process-wide cache.
#[must_use]
pub fn try_parse_enum(
    enum_type: &Arc<EnumType>,
    literal: &str,
    ignore_case: IgnoreCase,
) -> Option<i64> {
    DEFAULT_CACHE.try_parse_enum(enum_type, literal, ignore_case)
}

/// Render an enum value through the process-wide cache.
#[must_use]
pub fn to_string_literal(enum_type: &Arc<EnumType>, value: i64) -> String {
    DEFAULT_CACHE.to_string_literal(enum_type, value)
}

/// Render a value against a type reference through the process-wide
/// cache.
#[must_use]
pub fn reference_to_string_literal(reference: &TypeReference, value: i64) -> String {
    DEFAULT_CACHE.reference_to_string_literal(reference, value)
}
