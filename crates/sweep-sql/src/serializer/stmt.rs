use super::{Comma, Delimited, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "DELETE ", self.table.as_str(), "\n", &self.join);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let assignments = Comma(&self.assignments);

        fmt!(
            f,
            "UPDATE ",
            self.table.as_str(),
            " SET\n",
            assignments,
            "\n",
            &self.join,
        );
    }
}

impl ToSql for &stmt::DerivedJoin {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        // The inner predicate's parameters ride along on the outer command
        // under the names the predicate compiler gave them.
        for param in &self.inner.params {
            f.params.adopt(param);
        }

        let on = Delimited(self.key_columns.iter().map(|key| KeyEquality(key)), " AND ");

        fmt!(
            f,
            "FROM ",
            self.table.as_str(),
            " AS j0 INNER JOIN (\n",
            self.inner.sql.as_str(),
            "\n) AS j1 ON (",
            on,
            ")",
        );
    }
}

/// One `j0.[K] = j1.[K]` conjunct of the join predicate.
struct KeyEquality<'a>(&'a str);

impl ToSql for KeyEquality<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "j0.", Ident(self.0), " = j1.", Ident(self.0));
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(self.column.as_str()), " = ");

        match &self.value {
            // Null is rendered inline, never bound as a parameter.
            stmt::AssignValue::Value(value) if value.is_null() => fmt!(f, "NULL"),
            stmt::AssignValue::Value(value) => {
                let placeholder = f.params.push(value);
                placeholder.to_sql(f);
            }
            stmt::AssignValue::Expr { text, params } => {
                let mut text = text.clone();

                // Re-home the projection's parameters under fresh names.
                // Longer original names are replaced first so one name never
                // clobbers another's prefix.
                let mut params: Vec<_> = params.iter().collect();
                params.sort_by(|a, b| b.name.len().cmp(&a.name.len()));

                for param in params {
                    let placeholder = f.params.push(&param.value);
                    text = text.replace(
                        &format!("@{}", param.name),
                        &format!("@{}", placeholder.name()),
                    );
                }

                f.dst.push_str(&text);
            }
        }
    }
}
