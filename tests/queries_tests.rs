use care_center::db::fixtures::{self, Fixtures};
use care_center::db::schema;
use care_center::model::*;
use care_center::queries::*;

fn setup() -> (rusqlite::Connection, Fixtures) {
    let conn = schema::test_connection();
    let fixtures = Fixtures::builtin().unwrap();
    fixtures::seed(&conn, &fixtures).unwrap();
    (conn, fixtures)
}

// ==========================================================================
// FAMILY QUERY TESTS
// ==========================================================================

#[test]
fn directory_returns_seeded_graph_unchanged() {
    let (conn, fixtures) = setup();
    let directory = family_queries::directory(&conn).unwrap();
    assert_eq!(directory, fixtures.directory);
}

#[test]
fn directory_on_empty_store_is_empty() {
    let conn = schema::test_connection();
    let directory = family_queries::directory(&conn).unwrap();
    assert!(directory.is_empty());
    assert!(directory.next_of_kin.is_none());
}

#[test]
fn get_member_finds_any_partition() {
    let (conn, _) = setup();
    for id in [1, 2, 4] {
        let member = family_queries::get_member(&conn, Id::new(id)).unwrap();
        assert_eq!(member.map(|m| m.id), Some(Id::new(id)));
    }
}

#[test]
fn get_member_missing_returns_none() {
    let (conn, _) = setup();
    assert!(family_queries::get_member(&conn, Id::new(999)).unwrap().is_none());
}

#[test]
fn next_of_kin_is_leia() {
    let (conn, _) = setup();
    let next_of_kin = family_queries::next_of_kin(&conn).unwrap().unwrap();
    assert_eq!(next_of_kin.name, "Leia Organa");
    assert_eq!(next_of_kin.initials, "LO");
}

// ==========================================================================
// CONTRACT QUERY TESTS
// ==========================================================================

#[test]
fn all_contracts_lists_reference_data() {
    let (conn, fixtures) = setup();
    assert_eq!(contract_queries::all_contracts(&conn).unwrap(), fixtures.contracts);
}

#[test]
fn get_contract_by_id() {
    let (conn, _) = setup();
    let contract = contract_queries::get_contract(&conn, Id::new(1)).unwrap().unwrap();
    assert_eq!(contract.contract_number, "FU8434434");
    assert!(contract_queries::get_contract(&conn, Id::new(99)).unwrap().is_none());
}
