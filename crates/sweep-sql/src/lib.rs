pub mod compile;
pub use compile::compile_assignments;

pub mod serializer;
pub use serializer::{ParamSet, Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;
