use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use reqwest::Client;
use serde::Serialize;

use crate::prelude::*;

/// Retry budget for a single incoming request.
pub const RETRIES: u32 = 100;

/// Fixed for the process lifetime and shared read-only across requests.
pub struct PingState {
    pub client: Client,
    pub pong_url: String,
}

impl PingState {
    pub fn new(pong_url: String) -> Self {
        Self {
            client: Client::new(),
            pong_url,
        }
    }
}

/// Metered ping outcome, serialized in wire order.
#[derive(Debug, Serialize)]
pub struct PingReport {
    pub length: usize,
    pub code: u16,
    pub retries: u32,
    pub duration: f64,
}

/// One pong fetch. A transport failure on connect, send, or body read is
/// an error; the upstream status is reported as-is, non-2xx included.
async fn fetch_pong(client: &Client, url: &str) -> Result<(String, u16)> {
    let resp = client.get(url).send().await?;
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    Ok((body, status))
}

async fn ping_handler(
    State(state): State<Arc<PingState>>,
    Path(length): Path<u64>,
) -> (StatusCode, String) {
    let url = format!("{}/pong/{}", state.pong_url, length);
    for _ in 0..RETRIES {
        // Back-to-back attempts, no delay: transport errors only consume
        // the budget, upstream error statuses are relayed like any body.
        if let Ok((body, _)) = fetch_pong(&state.client, &url).await {
            return (StatusCode::OK, body);
        }
    }
    warn!(
        "Pong at {} unreachable after {} attempts",
        state.pong_url, RETRIES
    );
    (StatusCode::SERVICE_UNAVAILABLE, "Service unavailable".into())
}

async fn mping_handler(
    State(state): State<Arc<PingState>>,
    Path(length): Path<u64>,
) -> Json<PingReport> {
    let url = format!("{}/pong/{}", state.pong_url, length);
    let start = Instant::now();
    for retries in 0..RETRIES {
        if let Ok((body, code)) = fetch_pong(&state.client, &url).await {
            return Json(PingReport {
                length: body.len(),
                code,
                retries,
                duration: start.elapsed().as_secs_f64() * 1000.0,
            });
        }
    }
    warn!(
        "Pong at {} unreachable after {} attempts",
        state.pong_url, RETRIES
    );
    Json(PingReport {
        length: 0,
        code: StatusCode::SERVICE_UNAVAILABLE.as_u16(),
        retries: RETRIES,
        duration: start.elapsed().as_secs_f64() * 1000.0,
    })
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn router(state: Arc<PingState>) -> Router {
    Router::new()
        .route("/ping/{length}", get(ping_handler))
        .route("/mping/{length}", get(mping_handler))
        .route("/health", get(health_check))
        .with_state(state)
}
