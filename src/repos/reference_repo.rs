/*
 * Responsibility
 * - organizations / channels の参照データ読み出し (read-only)
 * - posts との間に FK は張らない (organization/channel は不透明な文字列)
 */
use sqlx::PgPool;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrganizationRow {
    #[sqlx(rename = "orgId")]
    pub org_id: i64,

    pub name: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChannelRow {
    #[sqlx(rename = "channelId")]
    pub channel_id: i64,

    pub name: String,
    pub description: Option<String>,
}

pub async fn list_organizations(pool: &PgPool) -> Result<Vec<OrganizationRow>, RepoError> {
    let rows = sqlx::query_as::<_, OrganizationRow>(
        r#"
        SELECT "orgId", name
        FROM organizations
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn list_channels(pool: &PgPool) -> Result<Vec<ChannelRow>, RepoError> {
    let rows = sqlx::query_as::<_, ChannelRow>(
        r#"
        SELECT "channelId", name, description
        FROM channels
        ORDER BY "channelId"
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
