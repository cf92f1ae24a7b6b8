use rusqlite::{params, Connection};

use crate::error::CareResult;
use crate::model::{Contract, Id};

pub fn insert(conn: &Connection, contract: &Contract) -> CareResult<()> {
    conn.execute(
        "INSERT INTO contracts (id, contract_number) VALUES (?1, ?2)",
        params![contract.id.value, contract.contract_number],
    )?;
    Ok(())
}

pub fn find_by_id(conn: &Connection, id: Id<Contract>) -> CareResult<Option<Contract>> {
    let mut stmt = conn.prepare("SELECT id, contract_number FROM contracts WHERE id = ?1")?;

    let result = stmt.query_row(params![id.value], row_to_contract);

    match result {
        Ok(contract) => Ok(Some(contract)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn find_all(conn: &Connection) -> CareResult<Vec<Contract>> {
    let mut stmt = conn.prepare("SELECT id, contract_number FROM contracts ORDER BY id")?;

    let contracts = stmt
        .query_map([], row_to_contract)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contracts)
}

fn row_to_contract(row: &rusqlite::Row) -> rusqlite::Result<Contract> {
    Ok(Contract {
        id: Id::new(row.get(0)?),
        contract_number: row.get(1)?,
    })
}
