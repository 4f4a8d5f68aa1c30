/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - Db は接続・タイムアウトを含む storage 層の失敗 (リトライしない)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
}
