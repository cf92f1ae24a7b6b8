use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use crate::error::{CareError, CareResult};
use crate::model::{Contract, FamilyDirectory, FamilyMember, Id};
use crate::ops::member_ops;
use crate::queries::{contract_queries, family_queries};

use super::payloads::{ApiResponse, NewMemberRequest};
use super::state::AppState;

type ApiResult<T> = CareResult<Json<ApiResponse<T>>>;

pub async fn family_handler(State(state): State<Arc<AppState>>) -> ApiResult<FamilyDirectory> {
    let directory = state.with_directory(family_queries::directory)?;
    debug!(members = directory.len(), "served family directory");
    Ok(Json(ApiResponse::ok(directory)))
}

pub async fn member_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<FamilyMember> {
    let member_id = parse_member_id(&raw_id)?;
    let member = state
        .with_directory(|conn| family_queries::get_member(conn, member_id))?
        .ok_or_else(|| CareError::member_not_found(member_id))?;
    Ok(Json(ApiResponse::ok(member)))
}

pub async fn toggle_star_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<FamilyMember> {
    let member_id = parse_member_id(&raw_id)?;
    let member = state.with_directory(|conn| member_ops::toggle_star(conn, member_id))?;

    let message = if member.is_starred {
        "Member starred successfully"
    } else {
        "Member unstarred successfully"
    };
    Ok(Json(ApiResponse::with_message(member, message)))
}

pub async fn add_member_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewMemberRequest>, JsonRejection>,
) -> CareResult<(StatusCode, Json<ApiResponse<FamilyMember>>)> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "malformed add-member payload");
        CareError::MalformedPayload
    })?;

    let member = state.with_directory(|conn| member_ops::add_member(conn, request.into()))?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(member, "Family member added successfully")),
    ))
}

pub async fn contracts_handler(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Contract>> {
    let contracts = state.with_directory(contract_queries::all_contracts)?;
    Ok(Json(ApiResponse::ok(contracts)))
}

pub async fn contract_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Contract> {
    let not_found = || CareError::NotFound {
        entity_type: "Contract".into(),
        id: raw_id.clone(),
    };
    let contract_id = Id::<Contract>::parse(&raw_id).map_err(|_| not_found())?;
    let contract = state
        .with_directory(|conn| contract_queries::get_contract(conn, contract_id))?
        .ok_or_else(not_found)?;
    Ok(Json(ApiResponse::ok(contract)))
}

/// A path segment that is not a number cannot name any member.
fn parse_member_id(raw: &str) -> CareResult<Id<FamilyMember>> {
    Id::parse(raw).map_err(|_| CareError::member_not_found(raw))
}
