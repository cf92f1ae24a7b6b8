use rusqlite::Connection;
use tracing::{info, warn};

use crate::db::{contract_repo, member_repo};
use crate::error::{CareError, CareResult};
use crate::model::{FamilyMember, Id, NewMember, Partition};
use crate::validation;

/// Creates a member and appends it to the unstarred list.
///
/// Blank names are rejected before an id is taken. An unknown contract is not
/// an error: the member gets a contract access entry with an empty number.
pub fn add_member(conn: &Connection, new_member: NewMember) -> CareResult<FamilyMember> {
    let first_name = validation::non_blank(&new_member.first_name, "firstName").inspect_err(|e| {
        warn!(error = %e, "rejected new family member");
    })?;
    let last_name = validation::non_blank(&new_member.last_name, "lastName").inspect_err(|e| {
        warn!(error = %e, "rejected new family member");
    })?;

    let contract_number = match new_member.contract_id {
        Some(contract_id) => contract_repo::find_by_id(conn, contract_id)?
            .map(|c| c.contract_number)
            .unwrap_or_default(),
        None => String::new(),
    };

    let tx = conn.unchecked_transaction()?;

    let id = member_repo::next_id(&tx)?;
    let mut member = FamilyMember::create(
        id,
        &first_name,
        &last_name,
        new_member.relationship,
        &contract_number,
    );
    member.phone = new_member.phone;
    member.email = new_member.email;

    member_repo::insert(&tx, &member, Partition::Unstarred)?;
    tx.commit()?;

    info!(member_id = %member.id, initials = %member.initials, "added family member");
    Ok(member)
}

/// Flips a member's star.
///
/// Starred and unstarred members move to the end of the other list. The next
/// of kin stays where it is and only its flag changes. Unknown ids leave the
/// directory untouched.
pub fn toggle_star(conn: &Connection, member_id: Id<FamilyMember>) -> CareResult<FamilyMember> {
    let tx = conn.unchecked_transaction()?;

    let (partition, mut member) = member_repo::find_by_id(&tx, member_id)?
        .ok_or_else(|| CareError::member_not_found(member_id))?;

    let (destination, is_starred) = partition.toggled(member.is_starred);
    if destination == partition {
        member_repo::set_starred(&tx, member_id, is_starred)?;
    } else {
        member_repo::relocate(&tx, member_id, destination)?;
    }
    member.is_starred = is_starred;

    tx.commit()?;

    info!(
        member_id = %member_id,
        from = partition.to_db_str(),
        to = destination.to_db_str(),
        is_starred,
        "toggled star"
    );
    Ok(member)
}
