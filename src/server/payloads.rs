use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Id, NewMember};
use crate::validation;

/// Envelope wrapping every JSON response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// Reads the add-member form's contract reference. Whole numbers and numeric
/// strings resolve; any other JSON value means "no contract".
pub fn contract_ref(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(validation::whole_number)),
        Value::String(s) => validation::lenient_integer(s),
        _ => None,
    }
}

/// Body of `POST /family`. Unknown fields such as `status` are ignored and
/// missing names arrive as blanks so validation can reject them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemberRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub family_status: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contract_id: Option<Value>,
}

impl From<NewMemberRequest> for NewMember {
    fn from(req: NewMemberRequest) -> Self {
        NewMember {
            contract_id: req.contract_id.as_ref().and_then(contract_ref).map(Id::new),
            first_name: req.first_name,
            last_name: req.last_name,
            relationship: req.family_status,
            email: req.email,
            phone: req.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_id_accepts_number_or_string() {
        let a: NewMemberRequest = serde_json::from_str(r#"{"contractId": 2}"#).unwrap();
        let b: NewMemberRequest = serde_json::from_str(r#"{"contractId": "2"}"#).unwrap();
        assert_eq!(NewMember::from(a).contract_id, Some(Id::new(2)));
        assert_eq!(NewMember::from(b).contract_id, Some(Id::new(2)));
    }

    #[test]
    fn unparseable_contract_id_becomes_none() {
        for raw in [r#""none""#, "true", "1.5", "{}", "[1]", "1e20", "null"] {
            let json = format!(r#"{{"contractId": {}}}"#, raw);
            let req: NewMemberRequest = serde_json::from_str(&json).unwrap();
            assert_eq!(NewMember::from(req).contract_id, None, "contractId {}", raw);
        }
    }

    #[test]
    fn whole_float_contract_id_resolves() {
        assert_eq!(contract_ref(&serde_json::json!(1.0)), Some(1));
        assert_eq!(contract_ref(&serde_json::json!("2.0")), Some(2));
    }

    #[test]
    fn family_status_maps_to_relationship() {
        let req: NewMemberRequest = serde_json::from_str(
            r#"{"status": "active", "firstName": "Leia", "lastName": "Organa", "familyStatus": "Sister"}"#,
        )
        .unwrap();
        let new_member = NewMember::from(req);
        assert_eq!(new_member.relationship, "Sister");
        assert_eq!(new_member.first_name, "Leia");
    }

    #[test]
    fn envelope_omits_missing_message() {
        let json = serde_json::to_value(ApiResponse::ok(1)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 1}));
    }
}
