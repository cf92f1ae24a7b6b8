use serde::{Deserialize, Serialize};

use super::member::FamilyMember;

/// The full family graph as returned to clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyDirectory {
    #[serde(default)]
    pub next_of_kin: Option<FamilyMember>,
    #[serde(default)]
    pub starred_members: Vec<FamilyMember>,
    #[serde(default)]
    pub all_members: Vec<FamilyMember>,
}

impl FamilyDirectory {
    pub fn len(&self) -> usize {
        self.next_of_kin.iter().count() + self.starred_members.len() + self.all_members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every member, next of kin first, then starred, then the rest.
    pub fn members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.next_of_kin
            .iter()
            .chain(self.starred_members.iter())
            .chain(self.all_members.iter())
    }
}
