/*
 * Responsibility
 * - /organizations, /channels の読み取り handler
 * - UI のピッカー用。posts 側のフィルタ値とは独立 (FK なし)
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::dto::reference::{ChannelResponse, OrganizationResponse},
    error::AppError,
    repos::reference_repo,
    state::AppState,
};

pub async fn list_organizations(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganizationResponse>>, AppError> {
    let rows = reference_repo::list_organizations(&state.db).await?;
    let res = rows
        .into_iter()
        .map(|o| OrganizationResponse { name: o.name })
        .collect();

    Ok(Json(res))
}

pub async fn list_channels(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChannelResponse>>, AppError> {
    let rows = reference_repo::list_channels(&state.db).await?;
    let res = rows
        .into_iter()
        .map(|c| ChannelResponse {
            name: c.name,
            description: c.description,
        })
        .collect();

    Ok(Json(res))
}
