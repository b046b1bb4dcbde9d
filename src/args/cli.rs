use clap::Parser;
use std::time::Duration;
use url::Url;

use super::defaults::{DEFAULT_REQUESTS_PER_WORKER, DEFAULT_TARGET_URL, DEFAULT_WORKERS};
use super::parsers::{parse_duration_arg, parse_positive_usize, parse_target_url};
use super::types::{PositiveUsize, TransportPolicy};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fan out a fixed volume of concurrent HTTP GET requests and print one line per request."
)]
pub struct LoadArgs {
    /// Endpoint under test
    #[arg(long, short, default_value = DEFAULT_TARGET_URL, value_parser = parse_target_url)]
    pub url: Url,

    /// Number of concurrent workers
    #[arg(long, short, default_value = DEFAULT_WORKERS, value_parser = parse_positive_usize)]
    pub workers: PositiveUsize,

    /// Sequential requests issued by each worker
    #[arg(
        long = "requests",
        short = 'n',
        default_value = DEFAULT_REQUESTS_PER_WORKER,
        value_parser = parse_positive_usize
    )]
    pub requests_per_worker: PositiveUsize,

    /// Per-request timeout (supports ms/s/m); no timeout when unset
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// What a worker does after a transport error
    #[arg(long = "on-transport-error", value_enum, default_value_t = TransportPolicy::Continue)]
    pub transport_policy: TransportPolicy,

    /// Run workers one after another instead of concurrently
    #[arg(long)]
    pub sequential: bool,

    /// Path to config file (TOML or JSON)
    #[arg(long, short)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
