use rusqlite::types::Type;
use rusqlite::{params, Connection};

use crate::db::schema::MEMBER_COUNTER;
use crate::error::CareResult;
use crate::model::{Access, AccessType, FamilyMember, Id, Partition};
use crate::validation;

const MEMBER_COLUMNS: &str =
    "id, partition, name, relationship, phone, email, initials, is_starred";

/// Hands out the next member id and advances the counter.
pub fn next_id(conn: &Connection) -> CareResult<Id<FamilyMember>> {
    let value = peek_next_id(conn)?;
    let following = validation::successor(value, "nextId")?;
    conn.execute(
        "UPDATE id_counters SET next_value = ?1 WHERE name = ?2",
        params![following, MEMBER_COUNTER],
    )?;
    Ok(Id::new(value))
}

/// The id the next call to [`next_id`] will return.
pub fn peek_next_id(conn: &Connection) -> CareResult<i64> {
    let value = conn.query_row(
        "SELECT next_value FROM id_counters WHERE name = ?1",
        params![MEMBER_COUNTER],
        |row| row.get(0),
    )?;
    Ok(value)
}

/// Moves the counter forward to at least `value`. Never moves it back.
pub fn advance_counter_to(conn: &Connection, value: i64) -> CareResult<()> {
    conn.execute(
        "UPDATE id_counters SET next_value = MAX(next_value, ?1) WHERE name = ?2",
        params![value, MEMBER_COUNTER],
    )?;
    Ok(())
}

/// Appends a member to the end of `partition`, along with its accesses.
pub fn insert(conn: &Connection, member: &FamilyMember, partition: Partition) -> CareResult<()> {
    conn.execute(
        "INSERT INTO family_members
             (id, partition, position, name, relationship, phone, email, initials, is_starred)
         VALUES (?1, ?2,
             (SELECT COALESCE(MAX(position), 0) + 1 FROM family_members WHERE partition = ?2),
             ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            member.id.value,
            partition.to_db_str(),
            member.name,
            member.relationship,
            member.phone,
            member.email,
            member.initials,
            member.is_starred as i32,
        ],
    )?;

    for (seq, access) in member.accesses.iter().enumerate() {
        conn.execute(
            "INSERT INTO member_accesses (member_id, seq, contract_number, access_type, label)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                member.id.value,
                seq as i64,
                access.id,
                access.access_type.to_db_str(),
                access.label,
            ],
        )?;
    }

    Ok(())
}

/// Finds a member and the partition holding it. Partitions are consulted in
/// [`Partition::SCAN_ORDER`]: starred, then unstarred, then next of kin.
pub fn find_by_id(
    conn: &Connection,
    id: Id<FamilyMember>,
) -> CareResult<Option<(Partition, FamilyMember)>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {MEMBER_COLUMNS} FROM family_members WHERE id = ?1
         ORDER BY CASE partition WHEN 'starred' THEN 0 WHEN 'unstarred' THEN 1 ELSE 2 END
         LIMIT 1"
    ))?;

    let result = stmt.query_row(params![id.value], row_to_member);

    match result {
        Ok((partition, mut member)) => {
            member.accesses = find_accesses(conn, member.id)?;
            Ok(Some((partition, member)))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Members of one partition in the order they entered it.
pub fn find_by_partition(conn: &Connection, partition: Partition) -> CareResult<Vec<FamilyMember>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {MEMBER_COLUMNS} FROM family_members WHERE partition = ?1 ORDER BY position"
    ))?;

    let rows = stmt
        .query_map(params![partition.to_db_str()], row_to_member)?
        .collect::<Result<Vec<_>, _>>()?;

    let mut members = Vec::with_capacity(rows.len());
    for (_, mut member) in rows {
        member.accesses = find_accesses(conn, member.id)?;
        members.push(member);
    }

    Ok(members)
}

/// Moves a member to the end of `partition` and sets the flag that partition
/// implies.
pub fn relocate(conn: &Connection, id: Id<FamilyMember>, partition: Partition) -> CareResult<()> {
    conn.execute(
        "UPDATE family_members SET
             partition = ?1,
             is_starred = ?2,
             position = (SELECT COALESCE(MAX(position), 0) + 1 FROM family_members WHERE partition = ?1)
         WHERE id = ?3",
        params![
            partition.to_db_str(),
            (partition == Partition::Starred) as i32,
            id.value,
        ],
    )?;
    Ok(())
}

/// Changes the flag without moving the member.
pub fn set_starred(conn: &Connection, id: Id<FamilyMember>, is_starred: bool) -> CareResult<()> {
    conn.execute(
        "UPDATE family_members SET is_starred = ?1 WHERE id = ?2",
        params![is_starred as i32, id.value],
    )?;
    Ok(())
}

pub fn count(conn: &Connection) -> CareResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM family_members", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn find_accesses(conn: &Connection, member_id: Id<FamilyMember>) -> CareResult<Vec<Access>> {
    let mut stmt = conn.prepare(
        "SELECT contract_number, access_type, label FROM member_accesses
         WHERE member_id = ?1 ORDER BY seq",
    )?;

    let accesses = stmt
        .query_map(params![member_id.value], |row| {
            let type_str: String = row.get(1)?;
            let access_type = AccessType::from_db_str(&type_str)
                .ok_or_else(|| bad_text(1, format!("Unknown access type: {}", type_str)))?;
            Ok(Access {
                id: row.get(0)?,
                access_type,
                label: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(accesses)
}

fn row_to_member(row: &rusqlite::Row) -> rusqlite::Result<(Partition, FamilyMember)> {
    let partition_str: String = row.get(1)?;
    let partition = Partition::from_db_str(&partition_str)
        .ok_or_else(|| bad_text(1, format!("Unknown partition: {}", partition_str)))?;

    let member = FamilyMember {
        id: Id::new(row.get(0)?),
        name: row.get(2)?,
        relationship: row.get(3)?,
        phone: row.get(4)?,
        email: row.get(5)?,
        initials: row.get(6)?,
        accesses: Vec::new(),
        is_starred: row.get::<_, i32>(7)? != 0,
    };

    Ok((partition, member))
}

fn bad_text(column: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, message.into())
}
