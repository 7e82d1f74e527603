use axum::{extract::State, Json};
use serde::Serialize;

use crate::{api::client::ApiClient, api::ApiError, blog::HealthStatus};

#[derive(Debug, Serialize)]
pub struct SiteHealth {
    pub status: &'static str,
    pub version: &'static str,
    pub blog: BackendHealth,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BackendHealth {
    Up(HealthStatus),
    Down { error: ApiError, message: String },
}

/// `GET /health`. The site itself is up if this answers at all; the backend part is
/// reported as-is so a dead blog service is visible without failing the probe.
pub async fn health(State(client): State<ApiClient>) -> Json<SiteHealth> {
    Json(check(&client).await)
}

pub async fn check(client: &ApiClient) -> SiteHealth {
    let blog = match client.blog_health().await {
        Ok(status) => BackendHealth::Up(status),
        Err(error) => {
            tracing::warn!("Blog backend unhealthy: {error}");
            BackendHealth::Down {
                message: error.to_string(),
                error,
            }
        }
    };
    let status = match blog {
        BackendHealth::Up(_) => "ok",
        BackendHealth::Down { .. } => "degraded",
    };
    SiteHealth {
        status,
        version: env!("CARGO_PKG_VERSION"),
        blog,
    }
}
