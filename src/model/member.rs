use serde::{Deserialize, Serialize};

use super::contract::Contract;
use super::ids::Id;

pub const WISHES_LABEL: &str = "My Wishes";

/// Access level granted by an access entry. Only viewers exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    Viewer,
}

impl AccessType {
    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "viewer" => Some(AccessType::Viewer),
            _ => None,
        }
    }

    /// Convert to database string representation.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AccessType::Viewer => "viewer",
        }
    }
}

/// Something a family member is allowed to see: a contract document or the
/// account holder's wishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    /// Contract number. Absent on the wishes entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub access_type: AccessType,
    pub label: String,
}

impl Access {
    pub fn contract(contract_number: &str) -> Self {
        Self {
            id: Some(contract_number.to_string()),
            access_type: AccessType::Viewer,
            label: format!("ID: {}", contract_number),
        }
    }

    pub fn wishes() -> Self {
        Self {
            id: None,
            access_type: AccessType::Viewer,
            label: WISHES_LABEL.to_string(),
        }
    }
}

/// Which slot of the directory a member occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    NextOfKin,
    Starred,
    Unstarred,
}

impl Partition {
    /// Lookup precedence when resolving an id.
    pub const SCAN_ORDER: &'static [Partition] =
        &[Partition::Starred, Partition::Unstarred, Partition::NextOfKin];

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "next_of_kin" => Some(Partition::NextOfKin),
            "starred" => Some(Partition::Starred),
            "unstarred" => Some(Partition::Unstarred),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Partition::NextOfKin => "next_of_kin",
            Partition::Starred => "starred",
            Partition::Unstarred => "unstarred",
        }
    }

    /// The star-toggle transition. Given where a member sits and its current
    /// flag, returns where it must go and the flag it must carry.
    ///
    /// List members move between `Starred` and `Unstarred`; the next of kin
    /// keeps its slot and only flips the flag.
    pub fn toggled(self, is_starred: bool) -> (Partition, bool) {
        match self {
            Partition::Starred => (Partition::Unstarred, false),
            Partition::Unstarred => (Partition::Starred, true),
            Partition::NextOfKin => (Partition::NextOfKin, !is_starred),
        }
    }
}

/// A relative or close contact attached to the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: Id<FamilyMember>,
    pub name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub initials: String,
    #[serde(default)]
    pub accesses: Vec<Access>,
    #[serde(default)]
    pub is_starred: bool,
}

impl FamilyMember {
    /// Builds an unstarred member from its name parts. The contract access
    /// entry is always present, even when `contract_number` is empty.
    pub fn create(
        id: Id<FamilyMember>,
        first_name: &str,
        last_name: &str,
        relationship: String,
        contract_number: &str,
    ) -> Self {
        Self {
            id,
            name: format!("{} {}", first_name, last_name),
            relationship,
            phone: None,
            email: None,
            initials: initials(first_name, last_name),
            accesses: vec![Access::contract(contract_number), Access::wishes()],
            is_starred: false,
        }
    }
}

/// Uppercased first character of each name.
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Validated input for creating a family member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contract_id: Option<Id<Contract>>,
}
