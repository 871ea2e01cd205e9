#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{ParamSet, Params, Placeholder};

// Fragment serializers
mod stmt;

use crate::stmt::Statement;

/// Serialize a batch statement to a SQL string.
///
/// The emitted dialect is the T-SQL join family: bracket-quoted identifiers,
/// named `@` parameters, and `DELETE/UPDATE ... FROM ... INNER JOIN` shapes.
/// Back ends with a different join/subquery syntax substitute their own
/// serializer; there is no flavor matrix.
#[derive(Debug, Default)]
pub struct Serializer;

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }
}
