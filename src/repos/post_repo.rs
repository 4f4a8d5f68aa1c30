/*
 * Responsibility
 * - posts の永続化 (create / list / get / add_reaction)
 * - author は常に固定の匿名定数 (caller からは受け取らない)
 * - reaction increment は単一 UPDATE で atomic に行う
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::repos::error::RepoError;

/// Identity is deliberately never captured; every post carries this author.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous Employee";

/// Closed set of reaction kinds. Anything else is rejected before the repo
/// is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    NotAlone,
    Helpful,
}

impl ReactionKind {
    /// Parse the wire name (`notAlone` / `helpful`). Exact match only.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "notAlone" => Some(Self::NotAlone),
            "helpful" => Some(Self::Helpful),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::NotAlone => "notAlone",
            Self::Helpful => "helpful",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    #[sqlx(rename = "postId")]
    pub post_id: i64,

    pub organization: String,
    pub channel: String,
    pub author: String,
    pub content: String,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[sqlx(rename = "notAlone")]
    pub not_alone: i64,

    pub helpful: i64,
}

/// Insert a post with zeroed counters. `content` must already be sanitized;
/// the repo does not inspect it beyond the schema CHECK.
pub async fn create(
    pool: &PgPool,
    organization: &str,
    channel: &str,
    content: &str,
) -> Result<PostRow, RepoError> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (organization, channel, author, content)
        VALUES ($1, $2, $3, $4)
        RETURNING
            "postId", organization, channel, author, content, "createdAt", "notAlone", helpful
        "#,
    )
    .bind(organization)
    .bind(channel)
    .bind(ANONYMOUS_AUTHOR)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// List posts, newest first. Filters are exact string equality; a missing
/// filter means "all". No pagination by contract.
pub async fn list(
    pool: &PgPool,
    organization: Option<&str>,
    channel: Option<&str>,
) -> Result<Vec<PostRow>, RepoError> {
    let rows = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT
            "postId", organization, channel, author, content, "createdAt", "notAlone", helpful
        FROM posts
        WHERE ($1::text IS NULL OR organization = $1)
          AND ($2::text IS NULL OR channel = $2)
        ORDER BY "createdAt" DESC
        "#,
    )
    .bind(organization)
    .bind(channel)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get(pool: &PgPool, post_id: i64) -> Result<Option<PostRow>, RepoError> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT
            "postId", organization, channel, author, content, "createdAt", "notAlone", helpful
        FROM posts
        WHERE "postId" = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Atomically add 1 to the named counter and return the updated row, or
/// `None` when the post does not exist.
///
/// The increment happens inside a single UPDATE so concurrent calls are never
/// lost (no application-level read-modify-write). There is no deduplication:
/// repeated calls each add 1.
pub async fn add_reaction(
    pool: &PgPool,
    post_id: i64,
    kind: ReactionKind,
) -> Result<Option<PostRow>, RepoError> {
    // One static statement per kind keeps the column choice out of string
    // interpolation.
    let sql = match kind {
        ReactionKind::NotAlone => {
            r#"
            UPDATE posts
            SET "notAlone" = "notAlone" + 1
            WHERE "postId" = $1
            RETURNING
                "postId", organization, channel, author, content, "createdAt", "notAlone", helpful
            "#
        }
        ReactionKind::Helpful => {
            r#"
            UPDATE posts
            SET helpful = helpful + 1
            WHERE "postId" = $1
            RETURNING
                "postId", organization, channel, author, content, "createdAt", "notAlone", helpful
            "#
        }
    };

    let row = sqlx::query_as::<_, PostRow>(sql)
        .bind(post_id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_kind_parses_wire_names() {
        assert_eq!(ReactionKind::from_wire("notAlone"), Some(ReactionKind::NotAlone));
        assert_eq!(ReactionKind::from_wire("helpful"), Some(ReactionKind::Helpful));
    }

    #[test]
    fn reaction_kind_rejects_everything_else() {
        assert_eq!(ReactionKind::from_wire("bogus"), None);
        assert_eq!(ReactionKind::from_wire("NotAlone"), None);
        assert_eq!(ReactionKind::from_wire("HELPFUL"), None);
        assert_eq!(ReactionKind::from_wire(""), None);
    }

    #[test]
    fn wire_names_round_trip() {
        for kind in [ReactionKind::NotAlone, ReactionKind::Helpful] {
            assert_eq!(ReactionKind::from_wire(kind.as_wire()), Some(kind));
        }
    }
}
