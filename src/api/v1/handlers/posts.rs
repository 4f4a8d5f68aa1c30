/*
 * Responsibility
 * - /posts 系 handler (create / list / react)
 * - Path の :post_id は公開 ID → extractor で復号して内部 ID に変換して受け取る
 * - sanitize → repo 呼び出し → response 変換。author はここまで一度も現れない
 */
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::posts::{
            CreatePostRequest, ListPostsQuery, PostResponse, ReactRequest, ReactionCounts,
        },
        extractors::public_id::PublicPostId,
    },
    error::AppError,
    repos::post_repo::{self, ReactionKind},
    services::sanitizer,
    state::AppState,
};

fn row_to_response(state: &AppState, row: post_repo::PostRow) -> Result<PostResponse, AppError> {
    let public_id = state.id_codec.encode(row.post_id)?;

    Ok(PostResponse {
        id: public_id,
        organization: row.organization,
        channel: row.channel,
        author: row.author,
        content: row.content,
        created_at: row.created_at,
        reactions: ReactionCounts {
            not_alone: row.not_alone,
            helpful: row.helpful,
        },
    })
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let rows = post_repo::list(
        &state.db,
        query.organization.as_deref(),
        query.channel.as_deref(),
    )
    .await?;

    let mut res = Vec::with_capacity(rows.len());
    for row in rows {
        res.push(row_to_response(&state, row)?);
    }

    Ok(Json(res))
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    // Validation runs on the raw submission, before any redaction.
    req.validate()?;

    let content = sanitizer::sanitize(&req.content);

    let row = post_repo::create(&state.db, &req.organization, &req.channel, &content)
        .await
        .map_err(|e| {
            tracing::error!("post_repo::create failed: {e:?}");
            AppError::from(e)
        })?;

    // Extension point: fires after the row is durable. Never affects the
    // response.
    state.notifier.post_created(&row).await;

    let res = row_to_response(&state, row)?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn react_to_post(
    State(state): State<AppState>,
    post_id: PublicPostId,
    Json(req): Json<ReactRequest>,
) -> Result<Json<PostResponse>, AppError> {
    // Reject unknown kinds before touching the store so counters stay intact.
    let kind = ReactionKind::from_wire(&req.kind)
        .ok_or_else(|| AppError::bad_request("INVALID_REACTION_TYPE", "Invalid reaction type"))?;

    let row = post_repo::add_reaction(&state.db, post_id.id, kind)
        .await
        .map_err(|e| {
            tracing::error!("post_repo::add_reaction failed: {e:?}");
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("post"))?;

    Ok(Json(row_to_response(&state, row)?))
}
