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

use odata_edm::kind::PrimitiveKind;
use odata_edm::kind::TypeKind;
use odata_edm::model::SchemaType;
use odata_edm::semantics::equivalence;
use odata_edm::types::primitive_type;
use odata_edm::types::TypeReference;
use odata_edm::ErrorCode;
use odata_edm::Type;
use odata_edm_tests::collection_of;
use odata_edm_tests::commerce_model;
use odata_edm_tests::entity_ref;
use std::sync::Arc;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_type_definitions_are_transparent_to_equivalence() {
    init();
    let fixture = commerce_model();
    let money = Type::TypeDefinition(Arc::clone(&fixture.money));
    let decimal = Type::Primitive(primitive_type(PrimitiveKind::Decimal));
    assert!(equivalence::is_equivalent(&money, &decimal));
    let int = Type::Primitive(primitive_type(PrimitiveKind::Int32));
    assert!(!equivalence::is_equivalent(&money, &int));
}

#[test]
fn test_collections_compare_structurally_entities_nominally() {
    init();
    let fixture = commerce_model();
    let a = collection_of(&fixture.order);
    let b = collection_of(&fixture.order);
    assert!(equivalence::reference_is_equivalent(&a, &b));

    let customers = collection_of(&fixture.customer);
    assert!(!equivalence::reference_is_equivalent(&a, &customers));
}

#[test]
fn test_inheritance_is_visible_to_equivalence_helpers() {
    init();
    let fixture = commerce_model();
    let customer = Type::Entity(Arc::clone(&fixture.customer));
    let premium = Type::Entity(Arc::clone(&fixture.premium_customer));
    assert!(equivalence::inherits_from(&premium, &customer));
    assert!(equivalence::is_or_inherits_from(&premium, &customer));
    assert!(!equivalence::is_or_inherits_from(&customer, &premium));
    assert!(equivalence::is_on_same_type_hierarchy_line_with(&customer, &premium));
}

#[test]
fn test_derived_types_are_found_across_the_model() {
    init();
    let fixture = commerce_model();
    let derived = equivalence::find_all_derived_types(
        &fixture.model,
        &SchemaType::Entity(Arc::clone(&fixture.customer)),
    );
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].full_name(), "Commerce.PremiumCustomer");
    assert!(equivalence::find_all_derived_types(
        &fixture.model,
        &SchemaType::Entity(Arc::clone(&fixture.line_item)),
    )
    .is_empty());
}

#[test]
fn test_shape_conversion_is_total() {
    init();
    let fixture = commerce_model();
    let customer = entity_ref(&fixture.customer);
    assert!(!customer.as_entity().definition().is_bad());
    assert!(!customer.as_structured().definition().is_bad());

    let as_enum = customer.as_enum();
    assert!(as_enum.definition().is_bad());
    assert_eq!(as_enum.kind(), TypeKind::Enum);
    assert_eq!(as_enum.errors()[0].code, ErrorCode::CouldNotConvertTypeReference);
    assert!(as_enum.errors()[0].message.contains("Commerce.Customer"));

    // Converting an already bad reference carries its diagnostics
    // forward instead of stacking new ones.
    let twice = as_enum.as_collection();
    assert_eq!(twice.errors(), as_enum.errors());
}

#[test]
fn test_type_definition_references_unwrap_with_facets() {
    init();
    let fixture = commerce_model();
    let money_ref = TypeReference::with_facets(
        Type::TypeDefinition(Arc::clone(&fixture.money)),
        true,
        odata_edm::types::Facets::TypeDefinition {
            is_unbounded: false,
            max_length: None,
            is_unicode: None,
            precision: Some(19),
            scale: Some(4),
            srid: None,
        },
    );
    let primitive = money_ref.as_primitive();
    assert_eq!(primitive.primitive_kind(), PrimitiveKind::Decimal);
    assert_eq!(primitive.precision(), Some(19));
    assert_eq!(primitive.scale(), Some(4));

    let decimal = primitive.as_decimal();
    assert!(!decimal.definition().is_bad());
    assert_eq!(decimal.scale(), Some(4));

    // The narrowing converter itself does not unwrap the alias.
    assert!(money_ref.as_decimal().definition().is_bad());
}

#[test]
fn test_bad_sentinel_diagnostics_serialize() {
    init();
    let int = TypeReference::new(Type::Primitive(primitive_type(PrimitiveKind::Int32)), false);
    let bad = int.as_entity();
    let json = serde_json::to_value(bad.errors()).unwrap();
    assert_eq!(json[0]["code"], "CouldNotConvertTypeReference");
}
