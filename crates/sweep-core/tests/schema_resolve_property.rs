use pretty_assertions::assert_eq;
use sweep_core::schema::{ComplexMap, EntityMap, KeyMap, PropertyMap, ScalarMap};

fn scalar(property: &str, column: &str) -> PropertyMap {
    PropertyMap::Scalar(ScalarMap {
        property: property.to_string(),
        column: column.to_string(),
    })
}

fn order_map() -> EntityMap {
    EntityMap {
        entity: "Order".to_string(),
        table: "Orders".to_string(),
        keys: vec![KeyMap {
            property: "Id".to_string(),
            column: "Id".to_string(),
        }],
        properties: vec![
            scalar("Id", "Id"),
            scalar("Status", "order_status"),
            PropertyMap::Complex(ComplexMap {
                property: "Audit".to_string(),
                column: "Audit".to_string(),
                children: vec![
                    scalar("ModifiedBy", "audit_modified_by"),
                    scalar("ModifiedAt", "audit_modified_at"),
                ],
            }),
        ],
    }
}

#[test]
fn resolve_top_level_scalar() {
    let map = order_map();

    let property = map.property("Status").expect("Status resolves");
    let scalar = property.as_scalar().expect("Status is scalar");
    assert_eq!(scalar.column, "order_status");
}

#[test]
fn resolve_complex_group() {
    let map = order_map();

    let property = map.property("Audit").expect("Audit resolves");
    assert!(!property.is_scalar());

    let complex = property.as_complex().expect("Audit is complex");
    assert_eq!(complex.children.len(), 2);
}

#[test]
fn resolve_nested_scalar_through_dotted_path() {
    let map = order_map();

    let property = map.property("Audit.ModifiedAt").expect("nested resolves");
    let scalar = property.as_scalar().expect("nested is scalar");
    assert_eq!(scalar.column, "audit_modified_at");
}

#[test]
fn resolve_absent_property_is_none() {
    let map = order_map();

    assert!(map.property("Missing").is_none());
    assert!(map.property("Audit.Missing").is_none());
    // Dotted path through a scalar does not resolve.
    assert!(map.property("Status.Inner").is_none());
    // Nesting is one level deep.
    assert!(map.property("Audit.ModifiedAt.Extra").is_none());
}

#[test]
fn key_iteration_follows_declaration_order() {
    let mut map = order_map();
    map.keys = vec![
        KeyMap {
            property: "TenantId".to_string(),
            column: "tenant_id".to_string(),
        },
        KeyMap {
            property: "Id".to_string(),
            column: "Id".to_string(),
        },
    ];

    let properties: Vec<_> = map.key_properties().collect();
    assert_eq!(properties, ["TenantId", "Id"]);

    let columns: Vec<_> = map.key_columns().collect();
    assert_eq!(columns, ["tenant_id", "Id"]);
}
