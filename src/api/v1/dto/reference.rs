/*
 * Responsibility
 * - Organizations / Channels の response DTO (読み取り専用)
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OrganizationResponse {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ChannelResponse {
    pub name: String,
    pub description: Option<String>,
}
