mod correlated;

use crate::stmt::{AssignValue, Assignment};

use sweep_core::{
    query::EntityQuery,
    schema::{EntityMap, PropertyMap, ScalarMap},
    stmt::{AssignExpr, UpdateSpec},
    Error, Result,
};

/// Compiles an update specification into SET fragments.
///
/// Assignments compile in specification order. Complex-group assignments
/// expand in place, one fragment per leaf scalar, resolved against the
/// group's own property maps. Correlated selectors round-trip through the
/// predicate compiler and are rewritten onto the update target's alias.
pub fn compile_assignments<Q>(
    map: &EntityMap,
    query: &Q,
    spec: &UpdateSpec<Q::Selector>,
) -> Result<Vec<Assignment>>
where
    Q: EntityQuery,
{
    if spec.is_empty() {
        return Err(Error::invalid_update_spec(format!(
            "update specification for `{}` is empty",
            map.entity
        )));
    }

    let mut assignments = Vec::with_capacity(spec.len());
    compile_into(map, &map.properties, query, spec, &mut assignments)?;
    Ok(assignments)
}

fn compile_into<Q>(
    map: &EntityMap,
    properties: &[PropertyMap],
    query: &Q,
    spec: &UpdateSpec<Q::Selector>,
    out: &mut Vec<Assignment>,
) -> Result<()>
where
    Q: EntityQuery,
{
    for (path, expr) in spec.iter() {
        let property = PropertyMap::resolve(properties, path).ok_or_else(|| {
            Error::invalid_update_spec(format!(
                "property `{path}` is not mapped for entity `{}`",
                map.entity
            ))
        })?;

        match expr {
            AssignExpr::Value(value) => {
                let scalar = expect_scalar(map, path, property)?;

                // Independent expressions evaluate once, eagerly, on the
                // client.
                out.push(Assignment {
                    column: scalar.column.clone(),
                    value: AssignValue::Value(value.eval()),
                });
            }
            AssignExpr::Entity(selector) => {
                let scalar = expect_scalar(map, path, property)?;

                // Correlated expressions cannot be evaluated client-side.
                // The predicate compiler renders them as a single-column
                // projection over the same entity set; the value expression
                // is recovered from that projection.
                let projection = query.select_value(selector)?.compile()?;
                let fragment = correlated::extract(&projection)?;

                out.push(Assignment {
                    column: scalar.column.clone(),
                    value: AssignValue::Expr {
                        text: fragment.text,
                        params: fragment.params,
                    },
                });
            }
            AssignExpr::Group(group) => {
                let complex = property.as_complex().ok_or_else(|| {
                    Error::invalid_update_spec(format!(
                        "property `{path}` of entity `{}` is not a complex group",
                        map.entity
                    ))
                })?;

                if group.is_empty() {
                    return Err(Error::invalid_update_spec(format!(
                        "group assignment for `{path}` of entity `{}` is empty",
                        map.entity
                    )));
                }

                // Nested bindings expand in place, against the group's own
                // property maps.
                compile_into(map, &complex.children, query, group, out)?;
            }
        }
    }

    Ok(())
}

fn expect_scalar<'a>(
    map: &EntityMap,
    path: &str,
    property: &'a PropertyMap,
) -> Result<&'a ScalarMap> {
    property.as_scalar().ok_or_else(|| {
        Error::invalid_update_spec(format!(
            "property `{path}` of entity `{}` is a complex group; assign its members through a nested specification",
            map.entity
        ))
    })
}

