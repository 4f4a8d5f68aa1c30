/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: db: PgPool, id_codec: IdCodec, notifier など
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::{id_codec::IdCodec, notify::PostCreatedHook};

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub id_codec: IdCodec,
    pub notifier: Arc<dyn PostCreatedHook>,
}

impl AppState {
    pub fn new(db: sqlx::PgPool, id_codec: IdCodec, notifier: Arc<dyn PostCreatedHook>) -> Self {
        Self {
            db,
            id_codec,
            notifier,
        }
    }
}
