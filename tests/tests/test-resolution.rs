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

use odata_edm::model::EntityContainer;
use odata_edm::model::MemoryModel;
use odata_edm::semantics::resolve;
use odata_edm::semantics::resolve::ResolveError;
use odata_edm::semantics::resolve::CONTAINER_EXTENDS_MAX_DEPTH;
use odata_edm::Resolution;
use odata_edm_tests::commerce_model;
use odata_edm_tests::model_declaring;
use odata_edm_tests::NAMESPACE;
use std::sync::Arc;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_types_resolve_by_qualified_name() {
    init();
    let fixture = commerce_model();
    let found = resolve::find_type(&fixture.model, "Commerce.Customer")
        .found()
        .expect("customer resolves");
    assert_eq!(found.full_name(), "Commerce.Customer");
    assert!(matches!(
        resolve::find_type(&fixture.model, "Commerce.Missing"),
        Resolution::NotFound
    ));
}

#[test]
fn test_alias_prefixes_resolve() {
    init();
    let fixture = commerce_model();
    assert!(resolve::find_type(&fixture.model, "Self.Order").found().is_some());
    assert!(resolve::find_term(&fixture.model, "Core.Description")
        .found()
        .is_some());
}

#[test]
fn test_ambiguity_does_not_depend_on_reference_order() {
    init();
    let first = model_declaring("Dup", "Thing");
    let second = model_declaring("Dup", "Thing");

    let mut forward = MemoryModel::new();
    forward.add_reference(Arc::clone(&first));
    forward.add_reference(Arc::clone(&second));

    let mut backward = MemoryModel::new();
    backward.add_reference(second);
    backward.add_reference(first);

    for model in [&forward, &backward] {
        match resolve::find_type(model, "Dup.Thing") {
            Resolution::Ambiguous(all) => assert_eq!(all.len(), 2),
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }
}

#[test]
fn test_container_elements_resolve_plain_and_qualified() {
    init();
    let fixture = commerce_model();
    assert!(resolve::find_entity_set(&fixture.model, "Customers")
        .unwrap()
        .is_some());
    assert!(resolve::find_entity_set(&fixture.model, "Default.Customers")
        .unwrap()
        .is_some());
    assert!(resolve::find_entity_set(&fixture.model, "Commerce.Default.Customers")
        .unwrap()
        .is_some());
    assert!(resolve::find_singleton(&fixture.model, "Me").unwrap().is_some());
    assert!(resolve::find_navigation_source(&fixture.model, "Me")
        .unwrap()
        .is_some());
}

#[test]
fn test_extends_chain_exposes_base_container_sets() {
    init();
    let fixture = commerce_model();
    let archive = resolve::find_entity_set(&fixture.model, "Archive")
        .unwrap()
        .expect("inherited from the extended container");
    assert_eq!(archive.entity_type.name, "Order");
}

#[test]
fn test_runaway_extends_chain_errors() {
    init();
    let mut current = Arc::new(EntityContainer {
        namespace: NAMESPACE.to_string(),
        name: "C0".to_string(),
        extends: None,
        elements: Vec::new(),
    });
    for i in 1..=CONTAINER_EXTENDS_MAX_DEPTH {
        current = Arc::new(EntityContainer {
            namespace: NAMESPACE.to_string(),
            name: format!("C{}", i),
            extends: Some(current),
            elements: Vec::new(),
        });
    }
    let mut model = MemoryModel::new();
    model.set_container(current);

    let err = resolve::find_entity_set(&model, "Anything").unwrap_err();
    assert!(matches!(err, ResolveError::CyclicEntityContainer { .. }));
    assert!(err.to_string().contains("extends chain"));
}

#[test]
fn test_operations_and_bound_operations_resolve() {
    init();
    let fixture = commerce_model();
    assert_eq!(resolve::find_operations(&fixture.model, "Commerce.TopOrders").len(), 1);
    assert_eq!(resolve::find_operations(&fixture.model, "Self.TopOrders").len(), 1);

    use odata_edm::Type;
    let customer = Type::Entity(Arc::clone(&fixture.customer));
    let premium = Type::Entity(Arc::clone(&fixture.premium_customer));
    let order = Type::Entity(Arc::clone(&fixture.order));
    assert_eq!(resolve::find_bound_operations(&fixture.model, &customer).len(), 1);
    // Bound operations also apply to derived types.
    assert_eq!(resolve::find_bound_operations(&fixture.model, &premium).len(), 1);
    assert!(resolve::find_bound_operations(&fixture.model, &order).is_empty());

    // The name-filtered form accepts aliases and rejects both wrong
    // names and wrong binding types.
    assert_eq!(
        resolve::find_bound_operations_by_name(&fixture.model, "Commerce.TopOrders", &customer)
            .len(),
        1
    );
    assert_eq!(
        resolve::find_bound_operations_by_name(&fixture.model, "Self.TopOrders", &customer).len(),
        1
    );
    assert!(
        resolve::find_bound_operations_by_name(&fixture.model, "Commerce.Other", &customer)
            .is_empty()
    );
    assert!(
        resolve::find_bound_operations_by_name(&fixture.model, "Commerce.TopOrders", &order)
            .is_empty()
    );
}

#[test]
fn test_unknown_container_prefixes_fall_back_to_the_own_container() {
    init();
    let fixture = commerce_model();
    // "Nowhere" names no container, so the whole string is tried as a
    // set name of the model's own container and misses.
    assert!(resolve::find_entity_set(&fixture.model, "Nowhere.Customers")
        .unwrap()
        .is_none());
    // The declared container resolves by simple and qualified name.
    assert!(resolve::find_entity_container(&fixture.model, "Default")
        .found()
        .is_some());
    assert!(resolve::find_entity_container(&fixture.model, "Commerce.Default")
        .found()
        .is_some());
}

#[test]
fn test_schema_elements_enumerate_declarations() {
    init();
    let fixture = commerce_model();
    use odata_edm::model::Model;
    use odata_edm::model::SchemaElement;
    let elements = fixture.model.schema_elements();
    let containers = elements
        .iter()
        .filter(|e| matches!(e, SchemaElement::EntityContainer(_)))
        .count();
    assert_eq!(containers, 1);
    assert!(elements.len() >= 10);
}
