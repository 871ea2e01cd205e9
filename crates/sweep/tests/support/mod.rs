// Not every test binary exercises every helper.
#![allow(dead_code)]

use sweep_core::{
    driver::{Command, Connection, Session, TransactionId},
    query::{CompiledSelect, EntityQuery},
    schema::{EntityMap, KeyMap, PropertyMap, ScalarMap},
    stmt::Param,
    Error, Result,
};

use std::time::Duration;

/// Driver calls recorded by [`MockConnection`], in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Open,
    Begin(TransactionId),
    Execute(TransactionId),
    Commit(TransactionId),
    Rollback(TransactionId),
    Close,
}

pub struct MockConnection {
    pub open: bool,
    pub events: Vec<Event>,
    pub executed: Vec<Command>,
    pub rows_affected: u64,
    pub fail_execute: bool,
    next_transaction: u64,
}

impl MockConnection {
    pub fn new(open: bool) -> MockConnection {
        MockConnection {
            open,
            events: vec![],
            executed: vec![],
            rows_affected: 0,
            fail_execute: false,
            next_transaction: 1,
        }
    }
}

impl Connection for MockConnection {
    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) -> Result<()> {
        self.open = true;
        self.events.push(Event::Open);
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
        self.events.push(Event::Close);
    }

    fn begin_transaction(&mut self) -> Result<TransactionId> {
        let id = TransactionId(self.next_transaction);
        self.next_transaction += 1;
        self.events.push(Event::Begin(id));
        Ok(id)
    }

    fn commit_transaction(&mut self, id: TransactionId) -> Result<()> {
        self.events.push(Event::Commit(id));
        Ok(())
    }

    fn rollback_transaction(&mut self, id: TransactionId) -> Result<()> {
        self.events.push(Event::Rollback(id));
        Ok(())
    }

    fn execute(&mut self, command: &Command, transaction: TransactionId) -> Result<u64> {
        self.events.push(Event::Execute(transaction));
        self.executed.push(command.clone());

        if self.fail_execute {
            return Err(Error::driver_operation_failed(std::io::Error::other(
                "violation of UNIQUE KEY constraint",
            )));
        }

        Ok(self.rows_affected)
    }
}

pub struct MockSession {
    pub connection: MockConnection,
    pub ambient: Option<TransactionId>,
    pub timeout: Option<Duration>,
}

impl MockSession {
    pub fn new(connection: MockConnection) -> MockSession {
        MockSession {
            connection,
            ambient: None,
            timeout: None,
        }
    }
}

impl Session for MockSession {
    type Connection = MockConnection;

    fn native_connection(&mut self) -> &mut MockConnection {
        &mut self.connection
    }

    fn ambient_transaction(&self) -> Option<TransactionId> {
        self.ambient
    }

    fn command_timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// A scripted predicate compiler over a single filtered entity set.
#[derive(Clone)]
pub enum ScriptedQuery {
    /// The user's filtered query, before any projection.
    Filter {
        table: String,
        filter: String,
        params: Vec<Param>,
    },

    /// A projection the compiler rendered (keys or a correlated selector).
    Compiled(CompiledSelect),
}

impl ScriptedQuery {
    pub fn filter(table: &str, filter: &str, params: Vec<Param>) -> ScriptedQuery {
        ScriptedQuery::Filter {
            table: table.to_string(),
            filter: filter.to_string(),
            params,
        }
    }
}

pub struct ScriptedSelector {
    pub sql: String,
    pub params: Vec<Param>,
}

impl EntityQuery for ScriptedQuery {
    type Selector = ScriptedSelector;

    fn select_keys(&self, keys: &[&str]) -> Result<Self> {
        match self {
            ScriptedQuery::Filter {
                table,
                filter,
                params,
            } => {
                let columns = keys
                    .iter()
                    .map(|key| format!("[{key}]"))
                    .collect::<Vec<_>>()
                    .join(", ");

                Ok(ScriptedQuery::Compiled(CompiledSelect {
                    sql: format!("SELECT {columns} FROM {table} WHERE {filter}"),
                    params: params.clone(),
                }))
            }
            ScriptedQuery::Compiled(_) => {
                Err(Error::internal("key projection of a compiled projection"))
            }
        }
    }

    fn select_value(&self, selector: &ScriptedSelector) -> Result<Self> {
        Ok(ScriptedQuery::Compiled(CompiledSelect {
            sql: selector.sql.clone(),
            params: selector.params.clone(),
        }))
    }

    fn compile(&self) -> Result<CompiledSelect> {
        match self {
            ScriptedQuery::Filter { .. } => {
                Err(Error::internal("compile of an unprojected query"))
            }
            ScriptedQuery::Compiled(select) => Ok(select.clone()),
        }
    }
}

pub fn scalar(property: &str, column: &str) -> PropertyMap {
    PropertyMap::Scalar(ScalarMap {
        property: property.to_string(),
        column: column.to_string(),
    })
}

pub fn order_map() -> EntityMap {
    EntityMap {
        entity: "Order".to_string(),
        table: "Orders".to_string(),
        keys: vec![KeyMap {
            property: "Id".to_string(),
            column: "Id".to_string(),
        }],
        properties: vec![
            scalar("Id", "Id"),
            scalar("Status", "Status"),
            scalar("Count", "Count"),
        ],
    }
}
