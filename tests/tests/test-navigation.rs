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

use odata_edm::model::NavigationSource;
use odata_edm::model::Operation;
use odata_edm::model::OperationKind;
use odata_edm::model::Parameter;
use odata_edm::semantics::navigation;
use odata_edm::ErrorCode;
use odata_edm_tests::commerce_model;
use odata_edm_tests::entity_ref;
use std::sync::Arc;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_declared_bindings_win() {
    init();
    let fixture = commerce_model();
    let source = navigation::resolve_navigation_path(&fixture.model, "Customers/Orders")
        .unwrap()
        .expect("bound navigation");
    assert!(matches!(source, NavigationSource::EntitySet(ref set) if set.name == "Orders"));

    let via_singleton = navigation::resolve_navigation_path(&fixture.model, "Me/Orders")
        .unwrap()
        .expect("singleton binding");
    assert!(matches!(via_singleton, NavigationSource::EntitySet(_)));

    // A leading container segment is consumed, case-insensitively.
    let prefixed =
        navigation::resolve_navigation_path(&fixture.model, "commerce.default/Customers/Orders")
            .unwrap()
            .expect("container-prefixed path");
    assert!(matches!(prefixed, NavigationSource::EntitySet(_)));
}

#[test]
fn test_qualified_first_segments_resolve_by_element_name() {
    init();
    let fixture = commerce_model();
    // A dotted prefix that is not the container keeps only the text
    // after the last dot as the starting element name.
    let source =
        navigation::resolve_navigation_path(&fixture.model, "Some.Thing.Customers/Orders")
            .unwrap()
            .expect("qualified start");
    assert!(matches!(source, NavigationSource::EntitySet(ref set) if set.name == "Orders"));
}

#[test]
fn test_containment_produces_contained_sources() {
    init();
    let fixture = commerce_model();
    let drafts = navigation::resolve_navigation_path(&fixture.model, "Customers/Drafts")
        .unwrap()
        .expect("contained navigation");
    assert!(matches!(drafts, NavigationSource::Contained(_)));
    assert_eq!(drafts.entity_type().unwrap().name, "Order");

    // Containment chains keep producing contained sources.
    let items = navigation::resolve_navigation_path(&fixture.model, "Customers/Drafts/Items")
        .unwrap()
        .expect("nested containment");
    assert!(matches!(items, NavigationSource::Contained(_)));
    assert_eq!(items.entity_type().unwrap().name, "LineItem");
}

#[test]
fn test_non_containment_without_binding_is_unknown() {
    init();
    let fixture = commerce_model();
    // Orders reached through a contained source has no declared
    // binding for "Drafts/Items"... but Items is contained. Reach an
    // unbound non-containment through the premium cast instead.
    let source = navigation::resolve_navigation_path(
        &fixture.model,
        "Customers/Commerce.PremiumCustomer/Orders",
    )
    .unwrap()
    .expect("cast navigation");
    // The cast segment changes the binding path, so the plain
    // "Orders" binding no longer matches.
    assert!(matches!(source, NavigationSource::Unknown(_)));
    assert_eq!(source.entity_type().unwrap().name, "Order");
}

#[test]
fn test_unresolved_paths_are_none() {
    init();
    let fixture = commerce_model();
    assert!(navigation::resolve_navigation_path(&fixture.model, "Nobody/Orders")
        .unwrap()
        .is_none());
    assert!(navigation::resolve_navigation_path(&fixture.model, "Customers/Refunds")
        .unwrap()
        .is_none());
    assert!(
        navigation::resolve_navigation_path(&fixture.model, "Customers/Commerce.Address/Orders")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_entity_set_path_validates_against_the_binding_parameter() {
    init();
    let fixture = commerce_model();
    let resolved = navigation::try_relative_entity_set_path(&fixture.top_orders, &fixture.model);
    assert!(resolved.succeeded());
    assert_eq!(resolved.parameter.as_ref().unwrap().name, "customer");
    assert_eq!(resolved.navigations.len(), 1);
    assert_eq!(resolved.last_entity_type.as_ref().unwrap().name, "Order");
}

#[test]
fn test_entity_set_path_steps_carry_sub_paths() {
    init();
    let fixture = commerce_model();
    let chained = operation_with_path(&fixture, "customer/Drafts/Items");
    let resolved = navigation::try_relative_entity_set_path(&chained, &fixture.model);
    assert!(resolved.succeeded());
    assert_eq!(resolved.navigations[0].path, vec!["Drafts"]);
    assert_eq!(resolved.navigations[1].path, vec!["Drafts", "Items"]);

    // Sub-path tracking restarts after a non-containment step.
    let reset = operation_with_path(&fixture, "customer/Orders/Items");
    let resolved = navigation::try_relative_entity_set_path(&reset, &fixture.model);
    assert!(resolved.succeeded());
    assert_eq!(resolved.navigations[0].path, vec!["Orders"]);
    assert_eq!(resolved.navigations[1].path, vec!["Items"]);
}

fn operation_with_path(fixture: &odata_edm_tests::Fixture, path: &str) -> Operation {
    Operation {
        namespace: "Commerce".to_string(),
        name: "Probe".to_string(),
        kind: OperationKind::Function,
        is_bound: true,
        entity_set_path: Some(path.to_string()),
        parameters: vec![Arc::new(Parameter::new(
            "customer",
            entity_ref(&fixture.customer),
        ))],
        return_type: None,
    }
}

#[test]
fn test_entity_set_path_error_codes() {
    init();
    let fixture = commerce_model();

    let wrong_start = operation_with_path(&fixture, "other/Orders");
    assert_eq!(
        navigation::try_relative_entity_set_path(&wrong_start, &fixture.model).errors[0].code,
        ErrorCode::InvalidEntitySetPath
    );

    let missing_nav = operation_with_path(&fixture, "customer/Refunds");
    assert_eq!(
        navigation::try_relative_entity_set_path(&missing_nav, &fixture.model).errors[0].code,
        ErrorCode::BadUnresolvedNavigationPropertyPath
    );

    let bad_cast = operation_with_path(&fixture, "customer/Commerce.Address/Orders");
    assert_eq!(
        navigation::try_relative_entity_set_path(&bad_cast, &fixture.model).errors[0].code,
        ErrorCode::TypeCastNotEntityType
    );

    let off_line = operation_with_path(&fixture, "customer/Commerce.Order/Items");
    assert_eq!(
        navigation::try_relative_entity_set_path(&off_line, &fixture.model).errors[0].code,
        ErrorCode::TypeCastOutsideHierarchy
    );

    let good_cast = operation_with_path(&fixture, "customer/Commerce.PremiumCustomer/Orders");
    assert!(navigation::try_relative_entity_set_path(&good_cast, &fixture.model).succeeded());

    let mut unbound = operation_with_path(&fixture, "customer/Orders");
    unbound.is_bound = false;
    assert_eq!(
        navigation::try_relative_entity_set_path(&unbound, &fixture.model).errors[0].code,
        ErrorCode::OperationNotBound
    );
}
