use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

#[allow(clippy::collapsible_if)]
pub async fn wait_server_ready(client: &Client, base_url: &str, timeout: Duration) -> Result<()> {
    let start = tokio::time::Instant::now();
    loop {
        if let Ok(resp) = client.get(format!("{}/health", base_url)).send().await
            && resp.status().is_success()
            && resp.text().await.unwrap_or_default() == "OK"
        {
            return Ok(());
        }
        if start.elapsed() > timeout {
            return Err(Error::ServerStartTimeoutError);
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}
