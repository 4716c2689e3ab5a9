//! Usage of check-logstash and each of its checks
//!
//! Every check exits 0 for OK, 1 for WARNING, 2 for CRITICAL and 3 for UNKNOWN.
//!
//! - [check-logstash](#check-logstash)
//! - [check-logstash health](#check-logstash-health)
//! - [check-logstash pipeline](#check-logstash-pipeline)
//! - [check-logstash pipeline reload](#check-logstash-pipeline-reload)
//! - [check-logstash pipeline flow](#check-logstash-pipeline-flow)
//!
//! # check-logstash
//!
//! Global flags go before the check name.
//!
//! ```plain
//! $ check-logstash --help
//! check-logstash 0.1.0
//! Check the health and pipelines of a Logstash node
//!
//! Reads the Logstash node stats API and exits with a plugin status: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.
//!
//! USAGE:
//!     check-logstash [FLAGS] [OPTIONS] <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help        Prints help information
//!     -i, --insecure    Skip the verification of the server's TLS certificate
//!     -s, --secure      Use a HTTPS connection
//!     -V, --version     Prints version information
//!     -v, --verbose     Log debug output to stderr
//!
//! OPTIONS:
//!     -b, --bearer <bearer>
//!             Specify the Bearer Token for server authentication [env: CHECK_LOGSTASH_BEARER]
//!
//!         --ca-file <ca-file>
//!             Specify the CA File for TLS authentication [env: CHECK_LOGSTASH_CA_FILE=]
//!
//!         --cert-file <cert-file>
//!             Specify the Certificate File for TLS authentication [env: CHECK_LOGSTASH_CERT_FILE=]
//!
//!     -H, --hostname <hostname>
//!             Hostname of the Logstash server [env: CHECK_LOGSTASH_HOSTNAME=]  [default: localhost]
//!
//!         --key-file <key-file>
//!             Specify the Key File for TLS authentication [env: CHECK_LOGSTASH_KEY_FILE=]
//!
//!     -p, --port <port>
//!             Port of the Logstash server [default: 9600]
//!
//!     -t, --timeout <timeout>
//!             Timeout in seconds for the whole check, 0 to disable [default: 30]
//!
//!         --unreachable-state <unreachable-state>
//!             Exit with this status if the server can't be reached, e.g. 2 for CRITICAL
//!
//!     -u, --user <user>
//!             Specify the user name and password for server authentication <user:password> [env:
//!             CHECK_LOGSTASH_BASICAUTH]
//!
//! SUBCOMMANDS:
//!     health      Checks the health of the Logstash server
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Checks the inflight events of the Logstash pipelines
//! ```
//!
//! # check-logstash health
//!
//! Node status, heap, CPU and open file descriptors. Thresholds are percentages.
//!
//! ```plain
//! $ check-logstash health --help
//! check-logstash-health 0.1.0
//! Checks the health of the Logstash server
//!
//! The node status, heap usage, open file descriptors and CPU usage are checked. Thresholds are percentages.
//!
//! USAGE:
//!     check-logstash health [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!         --cpu-usage-threshold-crit <cpu-crit>
//!             The percentage of CPU usage on which to be a critical result [default: 100]
//!
//!         --cpu-usage-threshold-warn <cpu-warn>
//!             The percentage of CPU usage on which to be a warning result [default: 100]
//!
//!         --file-descriptor-threshold-crit <file-descriptor-crit>
//!             The percentage relative to the process file descriptor limit on which to be a critical result [default:
//!             100]
//!
//!         --file-descriptor-threshold-warn <file-descriptor-warn>
//!             The percentage relative to the process file descriptor limit on which to be a warning result [default:
//!             100]
//!
//!         --heap-usage-threshold-crit <heap-crit>
//!             The percentage relative to the heap size limit on which to be a critical result [default: 80]
//!
//!         --heap-usage-threshold-warn <heap-warn>
//!             The percentage relative to the heap size limit on which to be a warning result [default: 70]
//! ```
//!
//! # check-logstash pipeline
//!
//! Inflight events per pipeline. Both thresholds are required.
//!
//! ```plain
//! $ check-logstash pipeline --help
//! check-logstash-pipeline 0.1.0
//! Checks the inflight events of the Logstash pipelines
//!
//! USAGE:
//!     check-logstash pipeline [OPTIONS] [SUBCOMMAND]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!         --inflight-events-crit <inflight-events-crit>
//!             Critical threshold for inflight events to be a critical result
//!
//!         --inflight-events-warn <inflight-events-warn>
//!             Warning threshold for inflight events to be a warning result
//!
//!     -P, --pipeline <pipeline>                            Pipeline name, all pipelines by default [default: /]
//!
//! SUBCOMMANDS:
//!     flow      Checks the flow metrics of the Logstash pipelines
//!     help      Prints this message or the help of the given subcommand(s)
//!     reload    Checks the reload configuration status of the Logstash pipelines
//! ```
//!
//! # check-logstash pipeline reload
//!
//! Whether the last configuration reload of each pipeline succeeded.
//!
//! ```plain
//! $ check-logstash pipeline reload --help
//! check-logstash-pipeline-reload 0.1.0
//! Checks the reload configuration status of the Logstash pipelines
//!
//! USAGE:
//!     check-logstash pipeline reload [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!     -P, --pipeline <pipeline>    Pipeline name, all pipelines by default [default: /]
//! ```
//!
//! # check-logstash pipeline flow
//!
//! Queue backpressure per pipeline, needs Logstash 8.5 or newer. Both thresholds are required.
//!
//! ```plain
//! $ check-logstash pipeline flow --help
//! check-logstash-pipeline-flow 0.1.0
//! Checks the flow metrics of the Logstash pipelines
//!
//! Flow metrics are reported since Logstash 8.5.
//!
//! USAGE:
//!     check-logstash pipeline flow [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!     -c, --critical <critical>    Critical threshold for queue backpressure
//!     -P, --pipeline <pipeline>    Pipeline name, all pipelines by default [default: /]
//!     -w, --warning <warning>      Warning threshold for queue backpressure
//! ```
