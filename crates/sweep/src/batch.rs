use crate::scope::StoreScope;

use sweep_core::{
    driver::{Command, Session},
    query::{CompiledSelect, EntityQuery},
    schema::EntityMap,
    stmt::UpdateSpec,
    Error, Result,
};
use sweep_sql::{compile_assignments, ParamSet, Serializer, Statement};

/// Deletes every row matched by `query` in one set-based statement and
/// returns the affected-row count.
pub fn batch_delete<S, Q>(session: &mut S, map: &EntityMap, query: &Q) -> Result<u64>
where
    S: Session,
    Q: EntityQuery,
{
    let inner = compile_key_select(map, query)?;
    let stmt = Statement::batch_delete(map, inner)?;

    execute(session, &stmt)
}

/// Updates every row matched by `query` according to `spec` in one set-based
/// statement and returns the affected-row count.
pub fn batch_update<S, Q>(
    session: &mut S,
    map: &EntityMap,
    query: &Q,
    spec: &UpdateSpec<Q::Selector>,
) -> Result<u64>
where
    S: Session,
    Q: EntityQuery,
{
    let assignments = compile_assignments(map, query, spec)?;
    let inner = compile_key_select(map, query)?;
    let stmt = Statement::batch_update(map, inner, assignments)?;

    execute(session, &stmt)
}

/// Compiles the query's filter into the inner derived-table SELECT,
/// restricted to the entity's key properties.
fn compile_key_select<Q>(map: &EntityMap, query: &Q) -> Result<CompiledSelect>
where
    Q: EntityQuery,
{
    if map.keys.is_empty() {
        return Err(Error::invalid_entity_map(format!(
            "entity map for `{}` has no key columns",
            map.entity
        )));
    }

    let keys: Vec<&str> = map.key_properties().collect();
    query.select_keys(&keys)?.compile()
}

fn execute<S>(session: &mut S, stmt: &Statement) -> Result<u64>
where
    S: Session,
{
    let mut params = ParamSet::new();
    let text = Serializer::new().serialize(stmt, &mut params);

    let command = Command {
        text,
        params: params.into_vec(),
        timeout: session.command_timeout(),
    };

    let ambient = session.ambient_transaction();
    let connection = session.native_connection();

    let mut scope = StoreScope::adopt(connection, ambient)?;

    tracing::debug!(
        sql = %command.text,
        params = command.params.len(),
        "executing batch statement"
    );

    let count = scope.execute(&command)?;
    scope.finish()?;

    tracing::debug!(rows = count, "batch statement executed");

    Ok(count)
}
