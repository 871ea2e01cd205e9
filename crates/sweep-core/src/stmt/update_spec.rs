use super::{Value, ValueExpr};

use indexmap::IndexMap;

/// An ordered set of field assignments for a batch update.
///
/// Assignments are keyed by property path and compiled in insertion order;
/// re-setting a path replaces the assignment in place. `S` is the predicate
/// compiler's correlated-selector type.
#[derive(Debug)]
pub struct UpdateSpec<S> {
    assignments: IndexMap<String, AssignExpr<S>>,
}

/// The right-hand side of one field assignment.
#[derive(Debug)]
pub enum AssignExpr<S> {
    /// An independent expression, evaluated once on the client.
    Value(ValueExpr),

    /// A correlated expression referencing the entity being updated. The
    /// selector is compiled to SQL by the predicate compiler.
    Entity(S),

    /// A complex-group initializer, expanded into one assignment per nested
    /// binding against the group's own property maps.
    Group(UpdateSpec<S>),
}

impl<S> UpdateSpec<S> {
    pub fn new() -> Self {
        Self {
            assignments: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Assigns a constant value to a property.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        self.insert(property, AssignExpr::Value(ValueExpr::constant(value)));
    }

    /// Assigns a value captured from the caller's environment.
    pub fn set_captured(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        self.insert(property, AssignExpr::Value(ValueExpr::captured(value)));
    }

    /// Assigns a scalar computed once, at compile time of the statement.
    pub fn set_computed(
        &mut self,
        property: impl Into<String>,
        f: impl Fn() -> Value + Send + Sync + 'static,
    ) {
        self.insert(property, AssignExpr::Value(ValueExpr::computed(f)));
    }

    /// Assigns a correlated expression of the entity being updated.
    pub fn set_entity(&mut self, property: impl Into<String>, selector: S) {
        self.insert(property, AssignExpr::Entity(selector));
    }

    /// Assigns a complex group through a nested specification.
    pub fn set_group(&mut self, property: impl Into<String>, group: UpdateSpec<S>) {
        self.insert(property, AssignExpr::Group(group));
    }

    fn insert(&mut self, property: impl Into<String>, expr: AssignExpr<S>) {
        // IndexMap replaces in place, so statement order follows first
        // insertion even when a property is re-assigned.
        self.assignments.insert(property.into(), expr);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssignExpr<S>)> + '_ {
        self.assignments
            .iter()
            .map(|(property, expr)| (property.as_str(), expr))
    }
}

impl<S> Default for UpdateSpec<S> {
    fn default() -> Self {
        Self::new()
    }
}
