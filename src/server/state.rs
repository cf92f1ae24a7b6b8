use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::Config;
use crate::db::{fixtures, fixtures::Fixtures, schema};
use crate::error::{CareError, CareResult};

/// Shared handler state. The directory connection sits behind one mutex so
/// every command sees and leaves the partitions and id counter consistent.
pub struct AppState {
    pub config: Config,
    directory: Mutex<Connection>,
}

impl AppState {
    pub fn new(config: Config, fixtures: &Fixtures) -> CareResult<Arc<Self>> {
        let conn = schema::open_in_memory()?;
        fixtures::seed(&conn, fixtures)?;

        Ok(Arc::new(Self {
            config,
            directory: Mutex::new(conn),
        }))
    }

    /// Runs one command against the directory while holding its lock.
    pub fn with_directory<T>(&self, f: impl FnOnce(&Connection) -> CareResult<T>) -> CareResult<T> {
        let conn = self.directory.lock().map_err(|_| CareError::LockPoisoned)?;
        f(&conn)
    }
}
