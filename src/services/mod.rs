/*
 * Responsibility
 * - services の公開インターフェース (re-export)
 */
pub mod id_codec;
pub mod notify;
pub mod sanitizer;
