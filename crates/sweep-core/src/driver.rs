mod command;
pub use command::Command;

mod connection;
pub use connection::Connection;

mod session;
pub use session::Session;

mod transaction;
pub use transaction::TransactionId;
