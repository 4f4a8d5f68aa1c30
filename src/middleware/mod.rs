/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - pub fn cors(...), pub fn http(...) など
 */
pub mod cors;
pub mod http;
pub mod security_headers;
