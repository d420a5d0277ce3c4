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

use odata_edm::semantics::enum_values;
use odata_edm::semantics::enum_values::EnumValueCache;
use odata_edm::semantics::enum_values::IgnoreCase;
use odata_edm_tests::commerce_model;
use std::sync::Arc;
use std::thread;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_flag_literals_round_trip() {
    init();
    let fixture = commerce_model();
    let value = enum_values::try_parse_enum(&fixture.color, "Red, Green", IgnoreCase::new(false))
        .expect("valid flags literal");
    assert_eq!(value, 3);
    assert_eq!(enum_values::to_string_literal(&fixture.color, value), "Red, Green");
    assert_eq!(enum_values::to_string_literal(&fixture.color, 7), "Red, Green, Blue");
}

#[test]
fn test_plain_enums_reject_combinations() {
    init();
    let fixture = commerce_model();
    assert_eq!(
        enum_values::try_parse_enum(&fixture.status, "Shipped", IgnoreCase::new(false)),
        Some(2)
    );
    assert_eq!(
        enum_values::try_parse_enum(&fixture.status, "Open, Shipped", IgnoreCase::new(false)),
        None
    );
}

#[test]
fn test_literals_are_all_names_or_all_numbers() {
    init();
    let fixture = commerce_model();
    // A digit-leading literal parses every segment as an integer.
    assert_eq!(
        enum_values::try_parse_enum(&fixture.color, "4, 1", IgnoreCase::new(false)),
        Some(5)
    );
    // Mixing names and numbers fails in either order.
    assert_eq!(
        enum_values::try_parse_enum(&fixture.color, "Red, 4", IgnoreCase::new(false)),
        None
    );
    assert_eq!(
        enum_values::try_parse_enum(&fixture.color, "4, Red", IgnoreCase::new(false)),
        None
    );
}

#[test]
fn test_case_folding_is_opt_in() {
    init();
    let fixture = commerce_model();
    assert_eq!(
        enum_values::try_parse_enum(&fixture.color, "blue", IgnoreCase::new(false)),
        None
    );
    assert_eq!(
        enum_values::try_parse_enum(&fixture.color, "BLUE", IgnoreCase::new(true)),
        Some(4)
    );
}

#[test]
fn test_unmatched_values_render_as_decimal() {
    init();
    let fixture = commerce_model();
    assert_eq!(enum_values::to_string_literal(&fixture.color, 9), "9");
    assert_eq!(enum_values::to_string_literal(&fixture.status, 5), "5");
    assert_eq!(enum_values::to_string_literal(&fixture.color, 0), "0");
}

#[test]
fn test_cache_is_shared_across_threads() {
    init();
    let fixture = commerce_model();
    let cache = Arc::new(EnumValueCache::new(4));
    let color = Arc::clone(&fixture.color);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            let color = Arc::clone(&color);
            thread::spawn(move || {
                let value = cache
                    .try_parse_enum(&color, "Red, Blue", IgnoreCase::new(false))
                    .expect("valid literal");
                assert_eq!(value, 5);
                assert_eq!(cache.to_string_literal(&color, i % 8), match i % 8 {
                    0 => "0".to_string(),
                    1 => "Red".to_string(),
                    2 => "Green".to_string(),
                    3 => "Red, Green".to_string(),
                    4 => "Blue".to_string(),
                    5 => "Red, Blue".to_string(),
                    6 => "Green, Blue".to_string(),
                    _ => "Red, Green, Blue".to_string(),
                });
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("codec thread");
    }
}
