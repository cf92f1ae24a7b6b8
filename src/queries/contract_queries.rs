use rusqlite::Connection;

use crate::db::contract_repo;
use crate::error::CareResult;
use crate::model::{Contract, Id};

pub fn all_contracts(conn: &Connection) -> CareResult<Vec<Contract>> {
    contract_repo::find_all(conn)
}

pub fn get_contract(conn: &Connection, contract_id: Id<Contract>) -> CareResult<Option<Contract>> {
    contract_repo::find_by_id(conn, contract_id)
}
