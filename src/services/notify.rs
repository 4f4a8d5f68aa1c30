//! Post-persistence notification hook.
//!
//! The create flow invokes this after a post is stored. It is an explicit
//! extension point (future: change-stream fan-out, websocket push) rather
//! than a lifecycle callback baked into the repo.
//!
//! Contract:
//! - Invoked at most once per successful create, after the row is durable.
//! - The outcome never affects the HTTP response; implementations log their
//!   own failures.
use async_trait::async_trait;

use crate::repos::post_repo::PostRow;

#[async_trait]
pub trait PostCreatedHook: Send + Sync + 'static {
    async fn post_created(&self, post: &PostRow);
}

/// Default implementation: do nothing.
pub struct NoopNotifier;

#[async_trait]
impl PostCreatedHook for NoopNotifier {
    async fn post_created(&self, _post: &PostRow) {}
}
