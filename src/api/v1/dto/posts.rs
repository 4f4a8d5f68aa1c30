/*
 * Responsibility
 * - Posts の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 * - response のフィールド名は既存クライアントの wire 形式 (createdAt, reactions.notAlone) に合わせる
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum length of the raw submission, measured on the trimmed text before
/// sanitization.
pub const MIN_CONTENT_CHARS: usize = 20;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub organization: String,
    pub channel: String,
    pub content: String,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.organization.trim().is_empty() {
            return Err(AppError::bad_request(
                "ORGANIZATION_REQUIRED",
                "Organization is required",
            ));
        }
        if self.channel.trim().is_empty() {
            return Err(AppError::bad_request(
                "CHANNEL_REQUIRED",
                "Channel is required",
            ));
        }

        let content = self.content.trim();
        if content.is_empty() {
            return Err(AppError::bad_request(
                "CONTENT_REQUIRED",
                "Content is required",
            ));
        }
        if content.chars().count() < MIN_CONTENT_CHARS {
            return Err(AppError::bad_request(
                "CONTENT_TOO_SHORT",
                "Content must be at least 20 characters long",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub organization: Option<String>,
    pub channel: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReactRequest {
    // Wire field is `type` ({"type": "notAlone"}); kept as a string here so an
    // unknown kind surfaces as INVALID_REACTION_TYPE instead of a generic
    // deserialization rejection.
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct ReactionCounts {
    #[serde(rename = "notAlone")]
    pub not_alone: i64,
    pub helpful: i64,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub organization: String,
    pub channel: String,
    pub author: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub reactions: ReactionCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(organization: &str, channel: &str, content: &str) -> CreatePostRequest {
        CreatePostRequest {
            organization: organization.into(),
            channel: channel.into(),
            content: content.into(),
        }
    }

    fn code(err: AppError) -> &'static str {
        match err {
            AppError::BadRequest { code, .. } => code,
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_well_formed_request() {
        assert!(
            req("Tech Corp", "stress", "This is long enough to pass validation.")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn rejects_missing_organization_and_channel() {
        let err = req("", "stress", "This is long enough to pass validation.")
            .validate()
            .unwrap_err();
        assert_eq!(code(err), "ORGANIZATION_REQUIRED");

        let err = req("Tech Corp", "  ", "This is long enough to pass validation.")
            .validate()
            .unwrap_err();
        assert_eq!(code(err), "CHANNEL_REQUIRED");
    }

    #[test]
    fn rejects_missing_content() {
        let err = req("Tech Corp", "stress", "   ").validate().unwrap_err();
        assert_eq!(code(err), "CONTENT_REQUIRED");
    }

    #[test]
    fn rejects_content_below_twenty_trimmed_chars() {
        // 19 chars trimmed; surrounding whitespace does not help
        let content = format!("  {}  ", "a".repeat(MIN_CONTENT_CHARS - 1));
        let err = req("Tech Corp", "stress", &content).validate().unwrap_err();
        assert_eq!(code(err), "CONTENT_TOO_SHORT");
    }

    #[test]
    fn accepts_exactly_twenty_trimmed_chars() {
        let content = "a".repeat(MIN_CONTENT_CHARS);
        assert!(req("Tech Corp", "stress", &content).validate().is_ok());
    }
}
