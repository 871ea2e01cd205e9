mod param;
pub use param::Param;

mod update_spec;
pub use update_spec::{AssignExpr, UpdateSpec};

mod value;
pub use value::Value;

mod value_expr;
pub use value_expr::ValueExpr;
