use super::{Formatter, ToSql};

use sweep_core::stmt::{Param, Value};

/// Destination for the parameters a statement binds.
///
/// Two parameter classes flow through one statement: parameters the batch
/// statement materializes itself (`push`, named from the statement-wide
/// counter) and parameters the predicate compiler already named (`adopt`,
/// kept verbatim).
pub trait Params {
    /// Materializes a fresh outer-statement parameter bound to `value` and
    /// returns its placeholder.
    fn push(&mut self, value: &Value) -> Placeholder;

    /// Adopts an inner-query parameter under its original name.
    fn adopt(&mut self, param: &Param);
}

/// A materialized outer-statement parameter. Zero-based; the index is shared
/// across the whole statement.
pub struct Placeholder(pub usize);

impl Placeholder {
    /// The parameter name, without the `@` sigil.
    pub fn name(&self) -> String {
        format!("p__update__{}", self.0)
    }
}

impl ToSql for Placeholder {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        use std::fmt::Write;

        write!(f.dst, "@{}", self.name()).unwrap();
    }
}

/// The canonical [`Params`] implementation: the command's parameter list in
/// emission order.
#[derive(Debug, Default)]
pub struct ParamSet {
    items: Vec<Param>,
    update_params: usize,
}

impl ParamSet {
    pub fn new() -> ParamSet {
        ParamSet::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Param] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Param> {
        self.items
    }
}

impl Params for ParamSet {
    fn push(&mut self, value: &Value) -> Placeholder {
        let placeholder = Placeholder(self.update_params);
        self.update_params += 1;
        self.items.push(Param {
            name: placeholder.name(),
            value: value.clone(),
        });
        placeholder
    }

    fn adopt(&mut self, param: &Param) {
        self.items.push(param.clone());
    }
}
