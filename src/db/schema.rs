use rusqlite::Connection;

use crate::error::CareResult;

/// Name of the counter row that hands out family member ids.
pub const MEMBER_COUNTER: &str = "family_members";

/// Initialize the database schema. Creates all tables if they don't exist.
///
/// The partition rules of the directory live here as constraints: at most one
/// next of kin, and list members carry the flag that matches their list.
pub fn initialize(conn: &Connection) -> CareResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contracts (
            id INTEGER PRIMARY KEY NOT NULL,
            contract_number TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS family_members (
            id INTEGER PRIMARY KEY NOT NULL,
            partition TEXT NOT NULL
                CHECK (partition IN ('next_of_kin', 'starred', 'unstarred')),
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            relationship TEXT NOT NULL DEFAULT '',
            phone TEXT,
            email TEXT,
            initials TEXT NOT NULL,
            is_starred INTEGER NOT NULL DEFAULT 0,
            CHECK (partition = 'next_of_kin' OR is_starred = (partition = 'starred'))
        );

        CREATE UNIQUE INDEX IF NOT EXISTS family_members_single_next_of_kin
            ON family_members(partition) WHERE partition = 'next_of_kin';

        CREATE INDEX IF NOT EXISTS family_members_by_partition
            ON family_members(partition, position);

        CREATE TABLE IF NOT EXISTS member_accesses (
            member_id INTEGER NOT NULL REFERENCES family_members(id) ON DELETE CASCADE,
            seq INTEGER NOT NULL,
            contract_number TEXT,
            access_type TEXT NOT NULL,
            label TEXT NOT NULL,
            PRIMARY KEY (member_id, seq)
        );

        CREATE TABLE IF NOT EXISTS id_counters (
            name TEXT PRIMARY KEY NOT NULL,
            next_value INTEGER NOT NULL
        );

        INSERT OR IGNORE INTO id_counters (name, next_value) VALUES ('family_members', 1);

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Opens a fresh in-memory directory store. Contents live as long as the
/// returned connection.
pub fn open_in_memory() -> CareResult<Connection> {
    let conn = Connection::open_in_memory()?;
    initialize(&conn)?;
    Ok(conn)
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
