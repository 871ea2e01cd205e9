use pretty_assertions::assert_eq;
use sweep_core::{
    query::CompiledSelect,
    schema::{EntityMap, KeyMap, PropertyMap, ScalarMap},
    stmt::{Param, Value},
};
use sweep_sql::{ParamSet, Serializer, Statement};

fn scalar(property: &str, column: &str) -> PropertyMap {
    PropertyMap::Scalar(ScalarMap {
        property: property.to_string(),
        column: column.to_string(),
    })
}

fn key(property: &str, column: &str) -> KeyMap {
    KeyMap {
        property: property.to_string(),
        column: column.to_string(),
    }
}

fn order_map() -> EntityMap {
    EntityMap {
        entity: "Order".to_string(),
        table: "Orders".to_string(),
        keys: vec![key("Id", "Id")],
        properties: vec![scalar("Id", "Id"), scalar("Status", "Status")],
    }
}

fn serialize(stmt: &Statement) -> (String, Vec<Param>) {
    let mut params = ParamSet::new();
    let sql = Serializer::new().serialize(stmt, &mut params);
    (sql, params.into_vec())
}

#[test]
fn delete_with_single_key() {
    let inner = CompiledSelect {
        sql: "SELECT [Id] FROM Orders WHERE Status = 'Cancelled'".to_string(),
        params: vec![],
    };

    let stmt = Statement::batch_delete(&order_map(), inner).unwrap();
    assert!(stmt.is_delete());

    let (sql, params) = serialize(&stmt);

    assert_eq!(
        sql,
        "DELETE Orders\n\
         FROM Orders AS j0 INNER JOIN (\n\
         SELECT [Id] FROM Orders WHERE Status = 'Cancelled'\n\
         ) AS j1 ON (j0.[Id] = j1.[Id])"
    );
    assert!(params.is_empty());
}

#[test]
fn delete_with_composite_key_emits_one_conjunct_per_key() {
    let mut map = order_map();
    map.keys = vec![key("TenantId", "TenantId"), key("Id", "Id")];

    let inner = CompiledSelect {
        sql: "SELECT [TenantId], [Id] FROM Orders WHERE Total > @p0".to_string(),
        params: vec![Param::new("p0", 100_i64)],
    };

    let stmt = Statement::batch_delete(&map, inner).unwrap();
    let (sql, params) = serialize(&stmt);

    assert_eq!(
        sql,
        "DELETE Orders\n\
         FROM Orders AS j0 INNER JOIN (\n\
         SELECT [TenantId], [Id] FROM Orders WHERE Total > @p0\n\
         ) AS j1 ON (j0.[TenantId] = j1.[TenantId] AND j0.[Id] = j1.[Id])"
    );

    // Inner predicate parameters ride along under their own names.
    assert_eq!(params, [Param::new("p0", Value::I64(100))]);
}

#[test]
fn delete_trims_inner_statement_text() {
    let inner = CompiledSelect {
        sql: "\nSELECT [Id] FROM Orders WHERE Status = 'Cancelled'\n\n".to_string(),
        params: vec![],
    };

    let stmt = Statement::batch_delete(&order_map(), inner).unwrap();
    let (sql, _) = serialize(&stmt);

    assert!(sql.contains("INNER JOIN (\nSELECT [Id] FROM Orders WHERE Status = 'Cancelled'\n) AS j1"));
}

#[test]
fn delete_requires_key_columns() {
    let mut map = order_map();
    map.keys.clear();

    let inner = CompiledSelect {
        sql: "SELECT 1".to_string(),
        params: vec![],
    };

    let err = Statement::batch_delete(&map, inner).unwrap_err();
    assert!(err.is_invalid_entity_map());
}

#[test]
fn schema_qualified_table_names_are_emitted_verbatim() {
    let mut map = order_map();
    map.table = "[dbo].[Orders]".to_string();

    let inner = CompiledSelect {
        sql: "SELECT [Id] FROM [dbo].[Orders]".to_string(),
        params: vec![],
    };

    let stmt = Statement::batch_delete(&map, inner).unwrap();
    let (sql, _) = serialize(&stmt);

    assert!(sql.starts_with("DELETE [dbo].[Orders]\nFROM [dbo].[Orders] AS j0 INNER JOIN ("));
}
