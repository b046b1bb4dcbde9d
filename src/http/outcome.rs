use std::fmt;
use std::time::Duration;

/// Result of one GET issued by one worker.
///
/// `worker` is the zero-based worker index; the rendered line numbers workers
/// from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Status 200; `elapsed` runs from send until the body was fully read.
    Success { worker: usize, elapsed: Duration },
    /// Any status other than 200.
    Failure { worker: usize, status: u16 },
    /// The exchange itself failed (connect, DNS, timeout, body read).
    TransportFault { worker: usize, error: String },
}

impl RequestOutcome {
    #[must_use]
    pub const fn worker(&self) -> usize {
        match self {
            RequestOutcome::Success { worker, .. }
            | RequestOutcome::Failure { worker, .. }
            | RequestOutcome::TransportFault { worker, .. } => *worker,
        }
    }

    #[must_use]
    pub const fn is_transport_fault(&self) -> bool {
        matches!(self, RequestOutcome::TransportFault { .. })
    }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = self.worker().saturating_add(1);
        match self {
            RequestOutcome::Success { elapsed, .. } => {
                write!(f, "Request {}: Success - {}", number, elapsed.as_secs_f64())
            }
            RequestOutcome::Failure { status, .. } => {
                write!(f, "Request {}: Failed with status code {}", number, status)
            }
            RequestOutcome::TransportFault { error, .. } => {
                write!(f, "Request {}: Transport error - {}", number, error)
            }
        }
    }
}

/// Terminal state of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// Every iteration ran.
    Completed,
    /// The worker stopped early: transport fault under `abort-worker`, a sink
    /// write failure, or a panic.
    Faulted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker: usize,
    pub exit: WorkerExit,
}
