//! Embedded analytics dashboard descriptor

use axum::response::Response;
use serde::Serialize;

use crate::api::envelope::ApiResponse;
use crate::config;

/// What the rendering surface needs to place the iframe.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardEmbed {
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub docs_url: String,
}

/// GET /api/v1/dashboard
pub async fn dashboard_embed() -> Response {
    let d = &config::get().dashboard;
    ApiResponse::ok(DashboardEmbed {
        src: d.embed_url(),
        width: d.width,
        height: d.height,
        title: d.title.clone(),
        docs_url: d.docs_url.clone(),
    })
}
