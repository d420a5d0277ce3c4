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

//! This is tests support lib. Builds a small commerce model shared by
//! the integration tests.

use odata_edm::kind::PrimitiveKind;
use odata_edm::model::ContainerElement;
use odata_edm::model::EntityContainer;
use odata_edm::model::EntitySet;
use odata_edm::model::MemoryModel;
use odata_edm::model::Model;
use odata_edm::model::NavigationBinding;
use odata_edm::model::NavigationSource;
use odata_edm::model::Operation;
use odata_edm::model::OperationKind;
use odata_edm::model::Parameter;
use odata_edm::model::SchemaType;
use odata_edm::model::Singleton;
use odata_edm::model::Term;
use odata_edm::types::primitive_type;
use odata_edm::types::CollectionType;
use odata_edm::types::ComplexType;
use odata_edm::types::EntityType;
use odata_edm::types::EnumMember;
use odata_edm::types::EnumType;
use odata_edm::types::NavigationProperty;
use odata_edm::types::StructuralProperty;
use odata_edm::types::Type;
use odata_edm::types::TypeDefinition;
use odata_edm::types::TypeReference;
use std::sync::Arc;

/// Namespace every fixture type is declared in.
pub const NAMESPACE: &str = "Commerce";

/// The commerce model and handles to its interesting declarations.
pub struct Fixture {
    pub model: MemoryModel,
    pub customer: Arc<EntityType>,
    pub premium_customer: Arc<EntityType>,
    pub order: Arc<EntityType>,
    pub line_item: Arc<EntityType>,
    pub address: Arc<ComplexType>,
    pub color: Arc<EnumType>,
    pub status: Arc<EnumType>,
    pub money: Arc<TypeDefinition>,
    pub top_orders: Arc<Operation>,
}

/// Plain non-nullable reference to an entity type.
#[must_use]
pub fn entity_ref(entity: &Arc<EntityType>) -> TypeReference {
    TypeReference::new(Type::Entity(Arc::clone(entity)), false)
}

/// Non-nullable collection reference over an entity type.
#[must_use]
pub fn collection_of(entity: &Arc<EntityType>) -> TypeReference {
    TypeReference::new(
        Type::Collection(Arc::new(CollectionType::new(entity_ref(entity)))),
        false,
    )
}

fn string_property(name: &str) -> Arc<StructuralProperty> {
    Arc::new(StructuralProperty::new(
        name,
        TypeReference::new(Type::Primitive(primitive_type(PrimitiveKind::String)), true),
    ))
}

/// Build the commerce model: a customer/order hierarchy with
/// containment, a flags enum, a vocabulary reference and a container
/// extending a base container.
#[must_use]
pub fn commerce_model() -> Fixture {
    let line_item = Arc::new(EntityType {
        namespace: NAMESPACE.to_string(),
        name: "LineItem".to_string(),
        base: None,
        is_abstract: false,
        is_open: false,
        key: vec!["Id".to_string()],
        structural: vec![string_property("Sku")],
        navigation: Vec::new(),
    });
    let order = Arc::new(EntityType {
        namespace: NAMESPACE.to_string(),
        name: "Order".to_string(),
        base: None,
        is_abstract: false,
        is_open: false,
        key: vec!["Id".to_string()],
        structural: vec![string_property("Number")],
        navigation: vec![Arc::new(NavigationProperty::new(
            "Items",
            collection_of(&line_item),
            true,
        ))],
    });
    let customer = Arc::new(EntityType {
        namespace: NAMESPACE.to_string(),
        name: "Customer".to_string(),
        base: None,
        is_abstract: false,
        is_open: false,
        key: vec!["Id".to_string()],
        structural: vec![string_property("Name")],
        navigation: vec![
            Arc::new(NavigationProperty::new("Orders", collection_of(&order), false)),
            Arc::new(NavigationProperty::new("Drafts", collection_of(&order), true)),
        ],
    });
    let premium_customer = Arc::new(EntityType {
        namespace: NAMESPACE.to_string(),
        name: "PremiumCustomer".to_string(),
        base: Some(Type::Entity(Arc::clone(&customer))),
        is_abstract: false,
        is_open: false,
        key: Vec::new(),
        structural: vec![string_property("Tier")],
        navigation: Vec::new(),
    });
    let address = Arc::new(ComplexType {
        namespace: NAMESPACE.to_string(),
        name: "Address".to_string(),
        base: None,
        is_abstract: false,
        is_open: false,
        structural: vec![string_property("City")],
        navigation: Vec::new(),
    });
    let color = Arc::new(EnumType {
        namespace: NAMESPACE.to_string(),
        name: "Color".to_string(),
        underlying: PrimitiveKind::Int32,
        is_flags: true,
        members: vec![
            EnumMember::new("Red", 1),
            EnumMember::new("Green", 2),
            EnumMember::new("Blue", 4),
        ],
    });
    let status = Arc::new(EnumType {
        namespace: NAMESPACE.to_string(),
        name: "Status".to_string(),
        underlying: PrimitiveKind::Int32,
        is_flags: false,
        members: vec![
            EnumMember::new("Open", 1),
            EnumMember::new("Shipped", 2),
            EnumMember::new("Cancelled", 3),
        ],
    });
    let money = Arc::new(TypeDefinition {
        namespace: NAMESPACE.to_string(),
        name: "Money".to_string(),
        underlying: primitive_type(PrimitiveKind::Decimal),
    });

    let orders_set = Arc::new(EntitySet {
        name: "Orders".to_string(),
        entity_type: Arc::clone(&order),
        bindings: Vec::new(),
    });
    let customers_set = Arc::new(EntitySet {
        name: "Customers".to_string(),
        entity_type: Arc::clone(&customer),
        bindings: vec![NavigationBinding::new(
            "Orders",
            NavigationSource::EntitySet(Arc::clone(&orders_set)),
        )],
    });
    let me = Arc::new(Singleton {
        name: "Me".to_string(),
        entity_type: Arc::clone(&customer),
        bindings: vec![NavigationBinding::new(
            "Orders",
            NavigationSource::EntitySet(Arc::clone(&orders_set)),
        )],
    });

    let base_container = Arc::new(EntityContainer {
        namespace: NAMESPACE.to_string(),
        name: "Base".to_string(),
        extends: None,
        elements: vec![ContainerElement::EntitySet(Arc::new(EntitySet {
            name: "Archive".to_string(),
            entity_type: Arc::clone(&order),
            bindings: Vec::new(),
        }))],
    });
    let container = Arc::new(EntityContainer {
        namespace: NAMESPACE.to_string(),
        name: "Default".to_string(),
        extends: Some(base_container),
        elements: vec![
            ContainerElement::EntitySet(customers_set),
            ContainerElement::EntitySet(orders_set),
            ContainerElement::Singleton(me),
        ],
    });

    let top_orders = Arc::new(Operation {
        namespace: NAMESPACE.to_string(),
        name: "TopOrders".to_string(),
        kind: OperationKind::Function,
        is_bound: true,
        entity_set_path: Some("customer/Orders".to_string()),
        parameters: vec![Arc::new(Parameter::new("customer", entity_ref(&customer)))],
        return_type: Some(collection_of(&order)),
    });

    let mut vocabulary = MemoryModel::new();
    vocabulary.add_term(Arc::new(Term {
        namespace: "Org.OData.Core.V1".to_string(),
        name: "Description".to_string(),
        term_type: TypeReference::new(
            Type::Primitive(primitive_type(PrimitiveKind::String)),
            true,
        ),
    }));

    let mut model = MemoryModel::new();
    model
        .add_type(SchemaType::Entity(Arc::clone(&customer)))
        .add_type(SchemaType::Entity(Arc::clone(&premium_customer)))
        .add_type(SchemaType::Entity(Arc::clone(&order)))
        .add_type(SchemaType::Entity(Arc::clone(&line_item)))
        .add_type(SchemaType::Complex(Arc::clone(&address)))
        .add_type(SchemaType::Enum(Arc::clone(&color)))
        .add_type(SchemaType::Enum(Arc::clone(&status)))
        .add_type(SchemaType::TypeDefinition(Arc::clone(&money)))
        .add_operation(Arc::clone(&top_orders))
        .set_container(container)
        .add_reference(Arc::new(vocabulary))
        .add_alias("Core", "Org.OData.Core.V1")
        .add_alias("Self", NAMESPACE);

    Fixture {
        model,
        customer,
        premium_customer,
        order,
        line_item,
        address,
        color,
        status,
        money,
        top_orders,
    }
}

/// A model declaring a single entity type, for ambiguity scenarios.
#[must_use]
pub fn model_declaring(namespace: &str, name: &str) -> Arc<dyn Model> {
    let entity = Arc::new(EntityType {
        namespace: namespace.to_string(),
        name: name.to_string(),
        base: None,
        is_abstract: false,
        is_open: false,
        key: vec!["Id".to_string()],
        structural: Vec::new(),
        navigation: Vec::new(),
    });
    let mut model = MemoryModel::new();
    model.add_type(SchemaType::Entity(entity));
    Arc::new(model)
}
