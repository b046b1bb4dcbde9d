use std::time::Duration;

use url::Url;

use crate::args::{LoadArgs, TransportPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// All workers start at once.
    Concurrent,
    /// Workers run one after another in index order.
    Sequential,
}

/// Resolved, read-only parameters of one run.
#[derive(Debug, Clone)]
pub struct LoadSettings {
    /// Endpoint under test.
    pub target_url: Url,
    /// Degree of concurrency.
    pub workers: usize,
    /// Sequential iterations per worker.
    pub requests_per_worker: usize,
    pub request_timeout: Option<Duration>,
    pub transport_policy: TransportPolicy,
    pub mode: RunMode,
}

impl LoadSettings {
    #[must_use]
    pub fn from_args(args: &LoadArgs) -> Self {
        let mode = if args.sequential {
            RunMode::Sequential
        } else {
            RunMode::Concurrent
        };
        Self {
            target_url: args.url.clone(),
            workers: args.workers.get(),
            requests_per_worker: args.requests_per_worker.get(),
            request_timeout: args.request_timeout,
            transport_policy: args.transport_policy,
            mode,
        }
    }

    #[must_use]
    pub const fn total_requests(&self) -> usize {
        self.workers.saturating_mul(self.requests_per_worker)
    }
}
