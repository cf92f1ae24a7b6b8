use rusqlite::Connection;

use crate::db::member_repo;
use crate::error::CareResult;
use crate::model::{FamilyDirectory, FamilyMember, Id, Partition};

/// The whole directory, unfiltered, in list order.
pub fn directory(conn: &Connection) -> CareResult<FamilyDirectory> {
    Ok(FamilyDirectory {
        next_of_kin: next_of_kin(conn)?,
        starred_members: member_repo::find_by_partition(conn, Partition::Starred)?,
        all_members: member_repo::find_by_partition(conn, Partition::Unstarred)?,
    })
}

pub fn next_of_kin(conn: &Connection) -> CareResult<Option<FamilyMember>> {
    Ok(member_repo::find_by_partition(conn, Partition::NextOfKin)?
        .into_iter()
        .next())
}

pub fn get_member(conn: &Connection, member_id: Id<FamilyMember>) -> CareResult<Option<FamilyMember>> {
    Ok(member_repo::find_by_id(conn, member_id)?.map(|(_, member)| member))
}
