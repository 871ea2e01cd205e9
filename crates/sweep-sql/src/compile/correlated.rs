use sweep_core::{query::CompiledSelect, stmt::Param, Error, Result};

/// A value expression recovered from a correlated projection, plus the
/// parameters that must be re-homed onto the outer statement.
#[derive(Debug)]
pub(crate) struct Fragment {
    pub(crate) text: String,
    pub(crate) params: Vec<Param>,
}

/// Recovers the value expression from a compiled single-column projection.
///
/// The predicate compiler must render the projection as
/// `SELECT <expr> AS [alias] FROM <table-ref> AS [alias]`. The value
/// expression is cut out, its projection-alias qualification is rewritten to
/// the update target's `j0` alias, and the projection's parameters are
/// carried for re-homing. Any other shape is an unsupported expression.
pub(crate) fn extract(projection: &CompiledSelect) -> Result<Fragment> {
    let sql = projection.sql.trim();

    let Some(rest) = sql.strip_prefix("SELECT") else {
        return Err(shape_error(sql));
    };

    if !rest.starts_with(char::is_whitespace) {
        return Err(shape_error(sql));
    }

    // The source clause is a plain table reference, so the last `FROM `
    // splits the projected expression from its source.
    let from = match rest.rfind("FROM ") {
        Some(ix) if ix > 0 && rest[..ix].ends_with(char::is_whitespace) => ix,
        _ => return Err(shape_error(sql)),
    };

    let Some((value, _column_alias)) = split_alias(&rest[..from]) else {
        return Err(shape_error(sql));
    };

    let Some((_source, table_alias)) = split_alias(&rest[from + "FROM ".len()..]) else {
        return Err(shape_error(sql));
    };

    if value.is_empty() {
        return Err(shape_error(sql));
    }

    // The expression may span lines in the compiler's output.
    let value = value.replace("\r\n", " ").replace('\n', " ");

    // Re-alias onto the update target.
    let text = value.replace(&format!("{table_alias}."), "j0.");

    Ok(Fragment {
        text,
        params: projection.params.clone(),
    })
}

/// Splits `<body> AS [alias]`, returning the trimmed body and the bracketed
/// alias.
fn split_alias(segment: &str) -> Option<(&str, &str)> {
    let segment = segment.trim();
    let ix = segment.rfind(" AS ")?;

    let alias = segment[ix + " AS ".len()..].trim();
    if !alias.starts_with('[') || !alias.ends_with(']') || alias.len() < 3 {
        return None;
    }

    Some((segment[..ix].trim(), alias))
}

fn shape_error(sql: &str) -> Error {
    Error::unsupported_expression(format!(
        "correlated projection did not match the expected shape \
         `SELECT <expr> AS [alias] FROM <source> AS [alias]`; sql={sql}"
    ))
}
