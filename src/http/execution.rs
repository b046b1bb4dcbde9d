use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::{Duration, Instant};
use url::Url;

use super::outcome::RequestOutcome;

const STATUS_OK: u16 = 200;

/// Sends one GET and reads the body to the end.
///
/// The body is always drained (or the response dropped on error) before
/// returning, which hands the connection back to the pool.
pub(super) async fn execute_get(
    client: &Client,
    url: &Url,
) -> Result<(u16, Duration), reqwest::Error> {
    let start = Instant::now();
    let response = client.get(url.clone()).send().await?;
    let status = response.status().as_u16();
    drain_response_body(response).await?;
    Ok((status, start.elapsed()))
}

pub(super) fn classify(
    worker: usize,
    result: Result<(u16, Duration), reqwest::Error>,
) -> RequestOutcome {
    match result {
        Ok((STATUS_OK, elapsed)) => RequestOutcome::Success { worker, elapsed },
        Ok((status, _)) => RequestOutcome::Failure { worker, status },
        Err(err) => RequestOutcome::TransportFault {
            worker,
            error: describe_transport_error(&err),
        },
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return format!("timed out: {}", err);
    }
    if err.is_connect() {
        return format!("connect failed: {}", err);
    }
    err.to_string()
}

async fn drain_response_body(response: reqwest::Response) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        chunk?;
    }
    Ok(())
}
