//! check-logstash: a monitoring plugin for Logstash nodes
//!
//! The plugin polls the node stats API of a single Logstash instance, checks
//! a handful of metrics against warning and critical thresholds and prints a
//! status line, per-metric details and performance data in the format that
//! Nagios, Icinga and Sensu all understand.
//!
//! The library is split the same way the binary works through a check:
//!
//! * [`threshold`] parses `[@]start:end` ranges and decides if a value
//!   violates them
//! * [`logstash`] decodes the stats API responses of Logstash 6, 7 and 8
//! * [`checks`] turns decoded stats into an [`outcome::Outcome`]
//! * [`perfdata`] renders the machine readable part of the outcome
//!
//! Usage documentation for the binary lives in [`scripts`].

use std::fmt;
use std::process;
use std::thread;
use std::time::Duration;

pub mod checks;
pub mod client;
pub mod config;
pub mod error;
pub mod logstash;
pub mod outcome;
pub mod perfdata;
pub mod scripts;
pub mod threshold;

pub use crate::error::Error;

/// All possible exit statuses for a check
///
/// The ordering is the order of badness, so `max` over a set of statuses is
/// the overall status. `Unknown` sorts last: a single sub-check that could
/// not be evaluated makes the whole check unknown.
#[must_use]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    #![cfg_attr(test, allow(dead_code))]
    /// Exit the process with the plugin exit code for this status
    pub fn exit(self) -> ! {
        process::exit(self.code())
    }

    /// The plugin exit code: 0, 1, 2 or 3
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    /// The status for an operator supplied exit code
    ///
    /// Only OK, WARNING and CRITICAL can be chosen, anything else is unknown.
    pub fn from_code(code: i64) -> Status {
        match code {
            0 => Status::Ok,
            1 => Status::Warning,
            2 => Status::Critical,
            _ => Status::Unknown,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        };
        write!(f, "{}", msg)
    }
}

/// Combine the statuses of several sub-checks into one
///
/// The result is the worst of the inputs. Nothing to look at, or anything
/// unknown, is `Unknown`.
pub fn worst_state<I: IntoIterator<Item = Status>>(states: I) -> Status {
    states.into_iter().max().unwrap_or(Status::Unknown)
}

/// Kill the process with `status` if it is still running after `timeout`
///
/// This races the check itself, it does not cancel anything in flight. A zero
/// timeout never fires and no thread is started.
pub fn spawn_watchdog(timeout: Duration, status: Status) -> Option<thread::JoinHandle<()>> {
    if timeout == Duration::from_secs(0) {
        return None;
    }
    Some(thread::spawn(move || {
        thread::sleep(timeout);
        tracing::warn!(?timeout, "check did not finish in time");
        println!("{}", timeout_message(status, timeout));
        status.exit();
    }))
}

fn timeout_message(status: Status, timeout: Duration) -> String {
    format!("{} - Timeout reached after {}s", status, timeout.as_secs())
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{spawn_watchdog, timeout_message, worst_state, Status};

    #[test]
    fn status_ordering_is_badness() {
        assert!(Status::Ok < Status::Warning);
        assert!(Status::Warning < Status::Critical);
        assert!(Status::Critical < Status::Unknown);
    }

    #[test]
    fn worst_state_of_nothing_is_unknown() {
        assert_eq!(worst_state(Vec::new()), Status::Unknown);
    }

    #[test]
    fn worst_state_picks_the_worst() {
        assert_eq!(worst_state(vec![Status::Ok]), Status::Ok);
        assert_eq!(
            worst_state(vec![Status::Ok, Status::Warning, Status::Critical]),
            Status::Critical
        );
        assert_eq!(
            worst_state(vec![Status::Critical, Status::Ok, Status::Warning]),
            Status::Critical
        );
        assert_eq!(
            worst_state(vec![Status::Warning, Status::Ok]),
            Status::Warning
        );
    }

    #[test]
    fn any_unknown_makes_everything_unknown() {
        assert_eq!(
            worst_state(vec![Status::Ok, Status::Unknown, Status::Critical]),
            Status::Unknown
        );
    }

    #[test]
    fn codes_round_trip_through_from_code() {
        for status in &[Status::Ok, Status::Warning, Status::Critical] {
            assert_eq!(Status::from_code(i64::from(status.code())), *status);
        }
        assert_eq!(Status::from_code(-123), Status::Unknown);
        assert_eq!(Status::from_code(3), Status::Unknown);
        assert_eq!(Status::from_code(4), Status::Unknown);
    }

    #[test]
    fn displays_as_plugin_labels() {
        assert_eq!(Status::Ok.to_string(), "OK");
        assert_eq!(Status::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn zero_timeout_disables_the_watchdog() {
        assert!(spawn_watchdog(Duration::from_secs(0), Status::Critical).is_none());
    }

    #[test]
    fn timeout_line_names_status_and_seconds() {
        assert_eq!(
            timeout_message(Status::Unknown, Duration::from_secs(30)),
            "UNKNOWN - Timeout reached after 30s"
        );
        assert_eq!(
            timeout_message(Status::Critical, Duration::from_millis(5500)),
            "CRITICAL - Timeout reached after 5s"
        );
    }
}
