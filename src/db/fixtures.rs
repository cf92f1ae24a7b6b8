//! Seed data for the in-memory directory.
//!
//! Fixtures share the JSON shape of the family read projection, plus the
//! contract reference list and an optional starting value for the id counter.

use std::collections::HashSet;
use std::path::Path;

use rusqlite::Connection;
use serde::Deserialize;
use tracing::info;

use crate::db::{contract_repo, member_repo};
use crate::error::{CareError, CareResult};
use crate::model::{Contract, FamilyDirectory, FamilyMember, Partition};
use crate::validation;

const BUILTIN: &str = include_str!("../../fixtures/family.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixtures {
    #[serde(default)]
    pub contracts: Vec<Contract>,
    #[serde(flatten)]
    pub directory: FamilyDirectory,
    #[serde(default)]
    pub next_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStats {
    pub contracts: usize,
    pub members: usize,
    pub next_id: i64,
}

impl Fixtures {
    /// The demo account shipped with the service.
    pub fn builtin() -> CareResult<Self> {
        Self::from_json_str(BUILTIN)
    }

    pub fn from_json_str(json: &str) -> CareResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> CareResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Loads fixtures into an initialized store.
///
/// List members get the flag their list implies. Duplicate or non-positive
/// member ids are rejected before anything is written.
pub fn seed(conn: &Connection, fixtures: &Fixtures) -> CareResult<SeedStats> {
    let directory = &fixtures.directory;

    let mut seen = HashSet::new();
    for member in directory.members() {
        validation::positive(member.id.value, "id")?;
        if !seen.insert(member.id) {
            return Err(CareError::AlreadyExists {
                entity_type: "Member".into(),
                identifier: member.id.to_string(),
            });
        }
    }
    if let Some(next_id) = fixtures.next_id {
        validation::positive(next_id, "nextId")?;
    }
    let past_largest = match directory.members().map(|m| m.id.value).max() {
        Some(largest) => validation::successor(largest, "id")?,
        None => 1,
    };

    let tx = conn.unchecked_transaction()?;

    for contract in &fixtures.contracts {
        contract_repo::insert(&tx, contract)?;
    }

    if let Some(next_of_kin) = &directory.next_of_kin {
        member_repo::insert(&tx, next_of_kin, Partition::NextOfKin)?;
    }
    for member in &directory.starred_members {
        member_repo::insert(&tx, &with_flag(member, true), Partition::Starred)?;
    }
    for member in &directory.all_members {
        member_repo::insert(&tx, &with_flag(member, false), Partition::Unstarred)?;
    }

    member_repo::advance_counter_to(&tx, past_largest.max(fixtures.next_id.unwrap_or(1)))?;
    let next_id = member_repo::peek_next_id(&tx)?;

    tx.commit()?;

    let stats = SeedStats {
        contracts: fixtures.contracts.len(),
        members: directory.len(),
        next_id,
    };
    info!(
        contracts = stats.contracts,
        members = stats.members,
        next_id = stats.next_id,
        "seeded family directory"
    );
    Ok(stats)
}

fn with_flag(member: &FamilyMember, is_starred: bool) -> FamilyMember {
    let mut member = member.clone();
    member.is_starred = is_starred;
    member
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;

    #[test]
    fn builtin_fixtures_parse() {
        let fixtures = Fixtures::builtin().unwrap();
        assert!(fixtures.directory.next_of_kin.is_some());
        assert!(!fixtures.contracts.is_empty());
    }

    #[test]
    fn builtin_fixtures_seed() {
        let conn = schema::test_connection();
        let fixtures = Fixtures::builtin().unwrap();
        let stats = seed(&conn, &fixtures).unwrap();
        assert_eq!(stats.members, fixtures.directory.len());
        assert_eq!(member_repo::count(&conn).unwrap(), stats.members);
    }

    #[test]
    fn seed_rejects_duplicate_ids() {
        let conn = schema::test_connection();
        let fixtures = Fixtures::from_json_str(
            r#"{
                "nextOfKin": {"id": 1, "name": "Leia Organa", "initials": "LO"},
                "allMembers": [{"id": 1, "name": "Han Solo", "initials": "HS"}]
            }"#,
        )
        .unwrap();

        let err = seed(&conn, &fixtures).unwrap_err();
        assert!(matches!(err, CareError::AlreadyExists { .. }));
        assert_eq!(member_repo::count(&conn).unwrap(), 0);
    }

    #[test]
    fn seed_rejects_non_positive_ids() {
        for id in [0, -4] {
            let conn = schema::test_connection();
            let json = format!(
                r#"{{ "contracts": [{{"id": 1, "contractNumber": "FU8434434"}}],
                     "allMembers": [{{"id": {}, "name": "Han Solo", "initials": "HS"}}] }}"#,
                id
            );
            let fixtures = Fixtures::from_json_str(&json).unwrap();

            let err = seed(&conn, &fixtures).unwrap_err();
            assert!(matches!(err, CareError::NonPositive { ref field } if field == "id"));
            assert_eq!(member_repo::count(&conn).unwrap(), 0);
            assert!(contract_repo::find_all(&conn).unwrap().is_empty());
        }
    }

    #[test]
    fn seed_rejects_non_positive_next_id() {
        let conn = schema::test_connection();
        let fixtures = Fixtures::from_json_str(r#"{ "nextId": 0 }"#).unwrap();
        let err = seed(&conn, &fixtures).unwrap_err();
        assert!(matches!(err, CareError::NonPositive { ref field } if field == "nextId"));
    }

    #[test]
    fn seed_rejects_id_at_top_of_range() {
        let conn = schema::test_connection();
        let json = format!(
            r#"{{ "allMembers": [{{"id": {}, "name": "Han Solo", "initials": "HS"}}] }}"#,
            i64::MAX
        );
        let fixtures = Fixtures::from_json_str(&json).unwrap();

        let err = seed(&conn, &fixtures).unwrap_err();
        assert!(matches!(err, CareError::OutOfRange { .. }));
        assert_eq!(member_repo::count(&conn).unwrap(), 0);
        assert_eq!(member_repo::peek_next_id(&conn).unwrap(), 1);
    }

    #[test]
    fn seed_sets_counter_past_largest_id() {
        let conn = schema::test_connection();
        let fixtures = Fixtures::from_json_str(
            r#"{ "allMembers": [{"id": 9, "name": "Han Solo", "initials": "HS"}] }"#,
        )
        .unwrap();
        assert_eq!(seed(&conn, &fixtures).unwrap().next_id, 10);
    }

    #[test]
    fn seed_honours_larger_explicit_next_id() {
        let conn = schema::test_connection();
        let fixtures = Fixtures::from_json_str(
            r#"{ "allMembers": [{"id": 2, "name": "Han Solo", "initials": "HS"}], "nextId": 50 }"#,
        )
        .unwrap();
        assert_eq!(seed(&conn, &fixtures).unwrap().next_id, 50);
    }

    #[test]
    fn seed_normalises_list_flags() {
        let conn = schema::test_connection();
        let fixtures = Fixtures::from_json_str(
            r#"{
                "starredMembers": [{"id": 2, "name": "Han Solo", "initials": "HS", "isStarred": false}],
                "allMembers": [{"id": 3, "name": "Lando Calrissian", "initials": "LC", "isStarred": true}]
            }"#,
        )
        .unwrap();
        seed(&conn, &fixtures).unwrap();

        let starred = member_repo::find_by_partition(&conn, Partition::Starred).unwrap();
        let unstarred = member_repo::find_by_partition(&conn, Partition::Unstarred).unwrap();
        assert!(starred[0].is_starred);
        assert!(!unstarred[0].is_starred);
    }
}
