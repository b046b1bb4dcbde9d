use std::sync::Arc;

use reqwest::Client;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::sinks::OutcomeSink;

use super::outcome::{WorkerExit, WorkerReport};
use super::settings::{LoadSettings, RunMode};
use super::worker::{WorkerContext, run_worker};

/// Runs every worker and waits for all of them.
///
/// Returns one report per worker, ordered by worker index. A worker that
/// panics is reported as [`WorkerExit::Faulted`]; it never stops the others.
pub async fn run_load(
    settings: &LoadSettings,
    client: &Client,
    sink: Arc<dyn OutcomeSink>,
) -> Vec<WorkerReport> {
    let context = Arc::new(WorkerContext {
        client: client.clone(),
        target_url: settings.target_url.clone(),
        requests_per_worker: settings.requests_per_worker,
        transport_policy: settings.transport_policy,
        sink,
    });

    info!(
        "Starting {} workers x {} requests ({} total) against {} ({:?}).",
        settings.workers,
        settings.requests_per_worker,
        settings.total_requests(),
        settings.target_url,
        settings.mode
    );

    // Anything not joined successfully stays Faulted.
    let mut exits = vec![WorkerExit::Faulted; settings.workers];
    match settings.mode {
        RunMode::Concurrent => {
            let mut group = JoinSet::new();
            for worker in 0..settings.workers {
                let context = Arc::clone(&context);
                group.spawn(async move { (worker, run_worker(worker, &context).await) });
            }
            while let Some(joined) = group.join_next().await {
                match joined {
                    Ok((worker, exit)) => store_exit(&mut exits, worker, exit),
                    Err(err) => error!("Worker task failed: {}", err),
                }
            }
        }
        RunMode::Sequential => {
            for worker in 0..settings.workers {
                let context = Arc::clone(&context);
                let handle = tokio::spawn(async move { run_worker(worker, &context).await });
                match handle.await {
                    Ok(exit) => store_exit(&mut exits, worker, exit),
                    Err(err) => error!("Worker {} task failed: {}", worker, err),
                }
            }
        }
    }

    let reports: Vec<WorkerReport> = exits
        .into_iter()
        .enumerate()
        .map(|(worker, exit)| WorkerReport { worker, exit })
        .collect();
    let faulted = reports
        .iter()
        .filter(|report| report.exit == WorkerExit::Faulted)
        .count();
    info!(
        "All {} workers finished ({} faulted).",
        reports.len(),
        faulted
    );
    reports
}

fn store_exit(exits: &mut [WorkerExit], worker: usize, exit: WorkerExit) {
    if let Some(slot) = exits.get_mut(worker) {
        *slot = exit;
    }
}
