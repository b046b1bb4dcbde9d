use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{LoadArgs, PositiveUsize, parse_target_url};
use crate::error::ConfigError;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values given explicitly on the command line win over the file; file values
/// win over built-in defaults.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut LoadArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> Result<(), ConfigError> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.as_deref()
    {
        args.url = parse_target_url(url).map_err(|err| ConfigError::InvalidField {
            field: "url",
            source: err,
        })?;
    }

    if !is_cli(matches, "workers")
        && let Some(workers) = config.workers
    {
        args.workers = ensure_positive_usize(workers, "workers")?;
    }

    if !is_cli(matches, "requests_per_worker")
        && let Some(requests) = config.requests
    {
        args.requests_per_worker = ensure_positive_usize(requests, "requests")?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        let timeout = timeout
            .to_duration()
            .map_err(|err| ConfigError::InvalidField {
                field: "timeout",
                source: err,
            })?;
        args.request_timeout = Some(timeout);
    }

    if !is_cli(matches, "transport_policy")
        && let Some(policy) = config.on_transport_error
    {
        args.transport_policy = policy;
    }

    if !is_cli(matches, "sequential")
        && let Some(sequential) = config.sequential
    {
        args.sequential = sequential;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> Result<PositiveUsize, ConfigError> {
    PositiveUsize::try_from(value)
        .map_err(|err| ConfigError::FieldMustBePositive { field, source: err })
}
