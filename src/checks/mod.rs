//! The checks that the binary can run
//!
//! Every check has the same shape: parse thresholds, `GET` one API path,
//! decode it, classify each metric and aggregate into an
//! [`Outcome`](crate::outcome::Outcome). The `evaluate` functions do the
//! part after the request so they can be tested without a Logstash.

use crate::error::Error;
use crate::threshold::Threshold;
use crate::Status;

pub mod health;
pub mod pipeline;

/// A warning and a critical threshold for the same metric
#[derive(Debug, Clone, PartialEq)]
pub struct Levels {
    pub warn: Threshold,
    pub crit: Threshold,
}

impl Levels {
    /// Parse a pair of threshold specs, each with the flag it came from
    pub fn parse(warn: (&'static str, &str), crit: (&'static str, &str)) -> Result<Levels, Error> {
        Ok(Levels {
            warn: parse_threshold(warn.0, warn.1)?,
            crit: parse_threshold(crit.0, crit.1)?,
        })
    }

    /// Like `parse`, but both flags must have been given
    pub fn required(
        warn: (&'static str, Option<&str>),
        crit: (&'static str, Option<&str>),
    ) -> Result<Levels, Error> {
        Levels::parse(present(warn)?, present(crit)?)
    }

    /// Critical is checked first and wins, otherwise warning, otherwise ok
    pub fn classify(&self, value: f64) -> Status {
        if self.crit.violates(value) {
            Status::Critical
        } else if self.warn.violates(value) {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}

fn present<'a>(
    (flag, spec): (&'static str, Option<&'a str>),
) -> Result<(&'static str, &'a str), Error> {
    match spec {
        Some(spec) => Ok((flag, spec)),
        None => Err(Error::Config(format!("required flag \"{}\" not set", flag))),
    }
}

fn parse_threshold(flag: &'static str, spec: &str) -> Result<Threshold, Error> {
    spec.parse()
        .map_err(|source| Error::Threshold { flag, source })
}

#[cfg(test)]
mod test {
    use super::Levels;
    use crate::error::Error;
    use crate::Status;

    fn levels(warn: &str, crit: &str) -> Levels {
        Levels::parse(("--warning", warn), ("--critical", crit)).unwrap()
    }

    #[test]
    fn critical_wins_over_warning() {
        let levels = levels("25", "49");
        assert_eq!(levels.classify(50.0), Status::Critical);
        assert_eq!(levels.classify(30.0), Status::Warning);
        assert_eq!(levels.classify(20.0), Status::Ok);
    }

    #[test]
    fn critical_wins_even_when_narrower() {
        // a crit range that is stricter than warn still only checks crit first
        let levels = levels("10", "@5:6");
        assert_eq!(levels.classify(5.5), Status::Critical);
        assert_eq!(levels.classify(11.0), Status::Warning);
    }

    #[test]
    fn bad_spec_names_the_flag() {
        let err = Levels::parse(("--warning", "1"), ("--critical", "x")).unwrap_err();
        match err {
            Error::Threshold { flag, .. } => assert_eq!(flag, "--critical"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn required_flags_must_be_present() {
        let err = Levels::required(
            ("--inflight-events-warn", Some("5")),
            ("--inflight-events-crit", None),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "required flag \"--inflight-events-crit\" not set"
        );
        assert!(Levels::required(("-w", Some("5")), ("-c", Some("10"))).is_ok());
    }
}
