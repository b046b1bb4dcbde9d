use std::future::Future;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, mpsc};
use std::thread;
use std::time::Duration;

use crate::args::TransportPolicy;
use crate::error::SinkError;
use crate::sinks::OutcomeSink;

use super::{LoadSettings, RequestOutcome, RunMode};

pub(super) struct ServerHandle {
    pub(super) url: String,
    hits: Arc<AtomicUsize>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ServerHandle {
    pub(super) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// How the test server answers each accepted request.
#[derive(Debug, Clone, Copy)]
pub(super) enum ServerBehavior {
    /// `200 OK` for the first `ok_limit` requests, `404` afterwards.
    Scripted { ok_limit: usize },
    /// Reads the request and never answers.
    Silent,
    /// Announces a 100-byte body, sends 5 bytes and closes.
    TruncatedBody,
}

/// Serves `200 OK` for the first `ok_limit` requests and `404` afterwards.
pub(super) fn spawn_scripted_server(ok_limit: usize) -> Result<ServerHandle, String> {
    spawn_test_server(ServerBehavior::Scripted { ok_limit })
}

pub(super) fn spawn_test_server(behavior: ServerBehavior) -> Result<ServerHandle, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);
    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let hits = Arc::clone(&server_hits);
                    thread::spawn(move || handle_client(stream, &hits, behavior));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok(ServerHandle {
        url: format!("http://{}/users/123", addr),
        hits,
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

fn handle_client(mut stream: TcpStream, hits: &AtomicUsize, behavior: ServerBehavior) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    let seq = hits.fetch_add(1, Ordering::SeqCst);
    let response: &[u8] = match behavior {
        ServerBehavior::Scripted { ok_limit } if seq < ok_limit => {
            b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK"
        }
        ServerBehavior::Scripted { .. } => {
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nNot Found"
        }
        ServerBehavior::TruncatedBody => {
            b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort"
        }
        ServerBehavior::Silent => {
            // Hold the connection open well past any client timeout used in tests.
            thread::sleep(Duration::from_secs(2));
            return;
        }
    };
    if stream.write_all(response).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// A URL on a port nothing listens on.
pub(super) fn unreachable_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/users/123", addr))
}

pub(super) fn test_settings(
    url: &str,
    workers: usize,
    requests_per_worker: usize,
) -> Result<LoadSettings, String> {
    let target_url =
        url::Url::parse(url).map_err(|err| format!("invalid test url '{}': {}", url, err))?;
    Ok(LoadSettings {
        target_url,
        workers,
        requests_per_worker,
        request_timeout: Some(Duration::from_secs(5)),
        transport_policy: TransportPolicy::Continue,
        mode: RunMode::Concurrent,
    })
}

pub(super) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

/// Keeps every outcome in arrival order.
#[derive(Default)]
pub(super) struct RecordingSink {
    outcomes: Mutex<Vec<RequestOutcome>>,
}

impl RecordingSink {
    pub(super) fn outcomes(&self) -> Vec<RequestOutcome> {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OutcomeSink for RecordingSink {
    fn record(&self, outcome: &RequestOutcome) -> Result<(), SinkError> {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(outcome.clone());
        Ok(())
    }
}

/// Panics when asked to record anything from `worker`.
pub(super) struct PanickingSink {
    pub(super) worker: usize,
    pub(super) inner: RecordingSink,
}

impl OutcomeSink for PanickingSink {
    fn record(&self, outcome: &RequestOutcome) -> Result<(), SinkError> {
        if outcome.worker() == self.worker {
            std::panic::panic_any("sink exploded");
        }
        self.inner.record(outcome)
    }
}

/// Rejects every record like a closed stdout would.
pub(super) struct BrokenSink;

impl OutcomeSink for BrokenSink {
    fn record(&self, _outcome: &RequestOutcome) -> Result<(), SinkError> {
        Err(SinkError::WriteLine {
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed"),
        })
    }
}
