pub mod driver;
pub use driver::Connection;

mod error;
pub use error::Error;

pub mod query;
pub use query::EntityQuery;

pub mod schema;
pub use schema::EntityMap;

pub mod stmt;

/// A Result type alias that uses sweep's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
