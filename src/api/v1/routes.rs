/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /posts, /organizations, /channels を next/merge
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    posts::{create_post, list_posts, react_to_post},
    reference::{list_channels, list_organizations},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{post_id}/react", post(react_to_post))
        .route("/organizations", get(list_organizations))
        .route("/channels", get(list_channels))
}
