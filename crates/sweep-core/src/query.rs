use crate::{stmt::Param, Result};

/// A compiled, driver-ready SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSelect {
    /// The statement text.
    pub sql: String,

    /// Bound parameters, in the order the compiler produced them.
    pub params: Vec<Param>,
}

/// The predicate-compiler contract.
///
/// Implemented by the ORM's query layer; sweep consumes it to materialize
/// the filter of a batch statement and the value expressions of correlated
/// assignments. Implementations must uphold two rendering rules:
///
/// - Null predicate values render as an explicit SQL `NULL` marker; they are
///   never left as bound parameters.
/// - Parameter names must not use the `p__update__` prefix, which is
///   reserved for parameters the batch statement itself materializes.
pub trait EntityQuery: Sized {
    /// A correlated selector: a pure function of the entity being updated,
    /// in whatever representation the query layer compiles.
    type Selector;

    /// Returns a new query selecting exactly the named key properties, each
    /// exposed under its mapped column name. This becomes the derived table
    /// joined against the update/delete target.
    fn select_keys(&self, keys: &[&str]) -> Result<Self>;

    /// Returns a fresh read-only projection of `selector` over the same
    /// entity set. The compiled SQL of the returned query must have the
    /// shape `SELECT <expr> AS [alias] FROM <table-ref> AS [alias]`.
    fn select_value(&self, selector: &Self::Selector) -> Result<Self>;

    /// Renders the query as driver-ready SQL plus its bound parameters.
    fn compile(&self) -> Result<CompiledSelect>;
}
