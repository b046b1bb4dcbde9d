use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, error, warn};
use url::Url;

use crate::args::TransportPolicy;
use crate::sinks::OutcomeSink;

use super::execution::{classify, execute_get};
use super::outcome::WorkerExit;

/// Read-only state shared by every worker of a run.
pub(super) struct WorkerContext {
    pub(super) client: Client,
    pub(super) target_url: Url,
    pub(super) requests_per_worker: usize,
    pub(super) transport_policy: TransportPolicy,
    pub(super) sink: Arc<dyn OutcomeSink>,
}

/// Issues the worker's requests strictly one after another.
pub(super) async fn run_worker(worker: usize, context: &WorkerContext) -> WorkerExit {
    for iteration in 0..context.requests_per_worker {
        let result = execute_get(&context.client, &context.target_url).await;
        let outcome = classify(worker, result);
        let transport_fault = outcome.is_transport_fault();

        if let Err(err) = context.sink.record(&outcome) {
            error!("Worker {} stopped: {}", worker, err);
            return WorkerExit::Faulted;
        }

        if transport_fault && context.transport_policy == TransportPolicy::AbortWorker {
            let skipped = context
                .requests_per_worker
                .saturating_sub(iteration)
                .saturating_sub(1);
            warn!(
                "Worker {} aborted after a transport error; {} requests skipped.",
                worker, skipped
            );
            return WorkerExit::Faulted;
        }
    }

    debug!("Worker {} completed.", worker);
    WorkerExit::Completed
}
