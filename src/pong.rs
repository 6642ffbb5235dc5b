use axum::Router;
use axum::extract::Path;
use axum::routing::get;

/// Builds a response of exactly `length` characters: `"po"`, then filler
/// `'o'`s, then `"ng"`. The filler count clamps at zero, so any request
/// below 4 gets the 4-character floor `"pong"`.
pub fn generate(length: u64) -> String {
    let filler = length.saturating_sub(4) as usize;
    format!("po{}ng", "o".repeat(filler))
}

async fn pong_handler(Path(length): Path<u64>) -> String {
    generate(length)
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn router() -> Router {
    Router::new()
        .route("/pong/{length}", get(pong_handler))
        .route("/health", get(health_check))
}
