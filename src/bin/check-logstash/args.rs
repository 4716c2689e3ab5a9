use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;

use check_logstash::checks::health::HealthThresholds;
use check_logstash::checks::Levels;
use check_logstash::config::Config;
use check_logstash::Error;

/// Check the health and pipelines of a Logstash node
///
/// Reads the Logstash node stats API and exits with a plugin status:
/// 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-logstash",
    setting = structopt::clap::AppSettings::ColoredHelp,
    setting = structopt::clap::AppSettings::SubcommandRequiredElseHelp
)]
pub struct Args {
    #[structopt(
        short = "H",
        long = "hostname",
        env = "CHECK_LOGSTASH_HOSTNAME",
        default_value = "localhost",
        help = "Hostname of the Logstash server"
    )]
    pub hostname: String,
    #[structopt(
        short = "p",
        long = "port",
        default_value = "9600",
        help = "Port of the Logstash server"
    )]
    pub port: u16,
    #[structopt(short = "s", long = "secure", help = "Use a HTTPS connection")]
    pub secure: bool,
    #[structopt(
        short = "i",
        long = "insecure",
        help = "Skip the verification of the server's TLS certificate"
    )]
    pub insecure: bool,
    #[structopt(
        short = "b",
        long = "bearer",
        env = "CHECK_LOGSTASH_BEARER",
        hide_env_values = true,
        help = "Specify the Bearer Token for server authentication"
    )]
    pub bearer: Option<String>,
    #[structopt(
        short = "u",
        long = "user",
        env = "CHECK_LOGSTASH_BASICAUTH",
        hide_env_values = true,
        help = "Specify the user name and password for server authentication <user:password>"
    )]
    pub user: Option<String>,
    #[structopt(
        long = "ca-file",
        env = "CHECK_LOGSTASH_CA_FILE",
        parse(from_os_str),
        help = "Specify the CA File for TLS authentication"
    )]
    pub ca_file: Option<PathBuf>,
    #[structopt(
        long = "cert-file",
        env = "CHECK_LOGSTASH_CERT_FILE",
        parse(from_os_str),
        help = "Specify the Certificate File for TLS authentication"
    )]
    pub cert_file: Option<PathBuf>,
    #[structopt(
        long = "key-file",
        env = "CHECK_LOGSTASH_KEY_FILE",
        parse(from_os_str),
        help = "Specify the Key File for TLS authentication"
    )]
    pub key_file: Option<PathBuf>,
    #[structopt(
        short = "t",
        long = "timeout",
        default_value = "30",
        help = "Timeout in seconds for the whole check, 0 to disable"
    )]
    pub timeout: u64,
    #[structopt(
        long = "unreachable-state",
        allow_hyphen_values = true,
        help = "Exit with this status if the server can't be reached, e.g. 2 for CRITICAL"
    )]
    pub unreachable_state: Option<i64>,
    #[structopt(short = "v", long = "verbose", help = "Log debug output to stderr")]
    pub verbose: bool,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Checks the health of the Logstash server
    ///
    /// The node status, heap usage, open file descriptors and CPU usage
    /// are checked. Thresholds are percentages.
    #[structopt(name = "health")]
    Health(HealthArgs),
    /// Checks the inflight events of the Logstash pipelines
    #[structopt(name = "pipeline")]
    Pipeline(PipelineArgs),
}

#[derive(Debug, StructOpt)]
pub struct HealthArgs {
    #[structopt(
        long = "file-descriptor-threshold-warn",
        default_value = "100",
        help = "The percentage relative to the process file descriptor limit on which to be a warning result"
    )]
    pub file_descriptor_warn: String,
    #[structopt(
        long = "file-descriptor-threshold-crit",
        default_value = "100",
        help = "The percentage relative to the process file descriptor limit on which to be a critical result"
    )]
    pub file_descriptor_crit: String,
    #[structopt(
        long = "heap-usage-threshold-warn",
        default_value = "70",
        help = "The percentage relative to the heap size limit on which to be a warning result"
    )]
    pub heap_warn: String,
    #[structopt(
        long = "heap-usage-threshold-crit",
        default_value = "80",
        help = "The percentage relative to the heap size limit on which to be a critical result"
    )]
    pub heap_crit: String,
    #[structopt(
        long = "cpu-usage-threshold-warn",
        default_value = "100",
        help = "The percentage of CPU usage on which to be a warning result"
    )]
    pub cpu_warn: String,
    #[structopt(
        long = "cpu-usage-threshold-crit",
        default_value = "100",
        help = "The percentage of CPU usage on which to be a critical result"
    )]
    pub cpu_crit: String,
}

#[derive(Debug, StructOpt)]
pub struct PipelineArgs {
    #[structopt(
        short = "P",
        long = "pipeline",
        default_value = "/",
        help = "Pipeline name, all pipelines by default"
    )]
    pub pipeline: String,
    #[structopt(
        long = "inflight-events-warn",
        help = "Warning threshold for inflight events to be a warning result"
    )]
    pub inflight_events_warn: Option<String>,
    #[structopt(
        long = "inflight-events-crit",
        help = "Critical threshold for inflight events to be a critical result"
    )]
    pub inflight_events_crit: Option<String>,
    #[structopt(subcommand)]
    pub check: Option<PipelineCheck>,
}

#[derive(Debug, StructOpt)]
pub enum PipelineCheck {
    /// Checks the reload configuration status of the Logstash pipelines
    #[structopt(name = "reload")]
    Reload(ReloadArgs),
    /// Checks the flow metrics of the Logstash pipelines
    ///
    /// Flow metrics are reported since Logstash 8.5.
    #[structopt(name = "flow")]
    Flow(FlowArgs),
}

#[derive(Debug, StructOpt)]
pub struct ReloadArgs {
    #[structopt(
        short = "P",
        long = "pipeline",
        default_value = "/",
        help = "Pipeline name, all pipelines by default"
    )]
    pub pipeline: String,
}

#[derive(Debug, StructOpt)]
pub struct FlowArgs {
    #[structopt(
        short = "P",
        long = "pipeline",
        default_value = "/",
        help = "Pipeline name, all pipelines by default"
    )]
    pub pipeline: String,
    #[structopt(
        short = "w",
        long = "warning",
        help = "Warning threshold for queue backpressure"
    )]
    pub warning: Option<String>,
    #[structopt(
        short = "c",
        long = "critical",
        help = "Critical threshold for queue backpressure"
    )]
    pub critical: Option<String>,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            hostname: self.hostname.clone(),
            port: self.port,
            secure: self.secure,
            insecure: self.insecure,
            bearer: self.bearer.clone(),
            basic_auth: self.user.clone(),
            ca_file: self.ca_file.clone(),
            cert_file: self.cert_file.clone(),
            key_file: self.key_file.clone(),
            timeout: Duration::from_secs(self.timeout),
            unreachable_state: self.unreachable_state,
        }
    }
}

impl HealthArgs {
    pub fn thresholds(&self) -> Result<HealthThresholds, Error> {
        Ok(HealthThresholds {
            file_descriptors: Levels::parse(
                ("--file-descriptor-threshold-warn", self.file_descriptor_warn.as_str()),
                ("--file-descriptor-threshold-crit", self.file_descriptor_crit.as_str()),
            )?,
            heap: Levels::parse(
                ("--heap-usage-threshold-warn", self.heap_warn.as_str()),
                ("--heap-usage-threshold-crit", self.heap_crit.as_str()),
            )?,
            cpu: Levels::parse(
                ("--cpu-usage-threshold-warn", self.cpu_warn.as_str()),
                ("--cpu-usage-threshold-crit", self.cpu_crit.as_str()),
            )?,
        })
    }
}

impl PipelineArgs {
    pub fn inflight_levels(&self) -> Result<Levels, Error> {
        Levels::required(
            ("--inflight-events-warn", self.inflight_events_warn.as_deref()),
            ("--inflight-events-crit", self.inflight_events_crit.as_deref()),
        )
    }
}

impl FlowArgs {
    pub fn levels(&self) -> Result<Levels, Error> {
        Levels::required(
            ("--warning", self.warning.as_deref()),
            ("--critical", self.critical.as_deref()),
        )
    }
}
