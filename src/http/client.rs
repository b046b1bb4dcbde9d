use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

use super::settings::LoadSettings;

/// Builds the client shared by every worker.
///
/// Clones of the returned client share one connection pool.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialized.
pub fn build_client(settings: &LoadSettings) -> AppResult<Client> {
    let mut builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .pool_max_idle_per_host(settings.workers);
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
