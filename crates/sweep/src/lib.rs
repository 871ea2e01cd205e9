//! Set-based batch operations for an ORM.
//!
//! A batch operation deletes or updates every row matched by an entity query
//! in a single SQL statement, without materializing entities. The predicate
//! is not re-expressed in SQL the statement could not otherwise carry:
//! instead, the query is compiled to a key-only SELECT and the target table
//! is joined against it as a derived table.
//!
//! The ORM plugs in through three seams: [`EntityQuery`] (the predicate
//! compiler), [`Session`] (store resolution), and
//! [`Connection`](driver::Connection) (the database driver).

mod batch;
pub use batch::{batch_delete, batch_update};

mod scope;

pub use sweep_core::{
    driver::{self, Session},
    query::{self, EntityQuery},
    schema::{self, EntityMap},
    stmt, Error, Result,
};
pub use sweep_sql as sql;
