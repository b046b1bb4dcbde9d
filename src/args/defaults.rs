/// User-lookup endpoint hit by the smoke test when no URL is given.
pub(crate) const DEFAULT_TARGET_URL: &str = "http://localhost:5044/users/123";
/// 200 workers x 25 requests = 5000 requests per run.
pub(crate) const DEFAULT_WORKERS: &str = "200";
pub(crate) const DEFAULT_REQUESTS_PER_WORKER: &str = "25";

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("throughput-smoke/", env!("CARGO_PKG_VERSION"));
