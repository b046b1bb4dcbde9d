mod entry;
mod logger;

use throughput::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
