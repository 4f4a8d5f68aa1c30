/*
 * Responsibility
 * - repos の公開インターフェース (re-export)
 */
pub mod error;
pub mod post_repo;
pub mod reference_repo;
