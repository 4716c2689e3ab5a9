//! Check a Logstash node through its node stats API
//!
//! ```plain
//! $ check-logstash health
//! OK - Logstash is healthy
//!  \_[OK] Status is green
//!  \_[OK] Heap usage at 12.00%
//!  \_[OK] Open file descriptors at 12.00%
//!  \_[OK] CPU usage at 5.00%
//! | status=0 process.cpu.percent=5%;100;100;0;100 ...
//!
//! $ check-logstash pipeline --inflight-events-warn 5 --inflight-events-crit 10
//! $ check-logstash pipeline reload --pipeline example
//! $ check-logstash pipeline flow --warning 15 --critical 20
//! ```

mod args;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use check_logstash::checks::{health, pipeline};
use check_logstash::client::Client;
use check_logstash::config::Config;
use check_logstash::outcome::Outcome;
use check_logstash::{spawn_watchdog, Error, Status};

use crate::args::{Args, Command, PipelineCheck};

/// Read the filter from here instead of `RUST_LOG`
const LOG_ENV: &str = "CHECK_LOGSTASH_LOG";

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validate the thresholds, then run the check that was asked for
fn run(command: &Command, config: &Config) -> Result<Outcome, Error> {
    match *command {
        Command::Health(ref health_args) => {
            let thresholds = health_args.thresholds()?;
            health::run(&Client::new(config)?, &thresholds)
        }
        Command::Pipeline(ref pipe_args) => match pipe_args.check {
            None => {
                let levels = pipe_args.inflight_levels()?;
                pipeline::run_inflight(&Client::new(config)?, &pipe_args.pipeline, &levels)
            }
            Some(PipelineCheck::Reload(ref reload)) => {
                pipeline::run_reload(&Client::new(config)?, &reload.pipeline)
            }
            Some(PipelineCheck::Flow(ref flow)) => {
                let levels = flow.levels()?;
                pipeline::run_flow(&Client::new(config)?, &flow.pipeline, &levels)
            }
        },
    }
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args = match Args::from_args_safe() {
        Ok(args) => args,
        Err(e) => {
            if e.use_stderr() {
                eprintln!("{}", e.message);
                Status::Unknown.exit()
            } else {
                println!("{}", e.message);
                Status::Ok.exit()
            }
        }
    };
    init_logging(args.verbose);

    let config = args.config();
    spawn_watchdog(config.timeout, Status::Unknown);

    match run(&args.command, &config) {
        Ok(outcome) => outcome.exit(),
        Err(e) => {
            tracing::debug!(error = ?e, "check failed");
            Outcome::bare(e.status(config.unreachable_status()), e.to_string()).exit()
        }
    }
}
