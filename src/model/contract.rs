use serde::{Deserialize, Serialize};

use super::ids::Id;

/// An issued service contract. Reference data, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: Id<Contract>,
    pub contract_number: String,
}

impl Contract {
    pub fn new(id: i64, contract_number: &str) -> Self {
        Self {
            id: Id::new(id),
            contract_number: contract_number.to_string(),
        }
    }
}
