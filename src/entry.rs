use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use throughput::args::LoadArgs;
use throughput::config::{apply_config, load_config};
use throughput::error::{AppError, AppResult};
use throughput::http::{LoadSettings, build_client, run_load};
use throughput::sinks::{LineSink, OutcomeSink};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose);

    if let Some(config) = load_config(args.config.as_deref())? {
        debug!("Applying config file values.");
        apply_config(&mut args, &matches, &config).map_err(AppError::config)?;
    }
    let settings = LoadSettings::from_args(&args);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&settings))
}

fn parse_args() -> AppResult<(LoadArgs, ArgMatches)> {
    let matches = LoadArgs::command().get_matches();
    let args = LoadArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(settings: &LoadSettings) -> AppResult<()> {
    let client = build_client(settings)?;
    let sink: Arc<dyn OutcomeSink> = Arc::new(LineSink::stdout());
    // Per-worker failures are reported as lines only; they never change the exit code.
    let _reports = run_load(settings, &client, sink).await;
    Ok(())
}
