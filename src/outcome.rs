//! The result of running one check, and how it is printed
//!
//! ```plain
//! WARNING - Logstash may not be healthy
//!  \_[OK] Heap usage at 12.00%
//!  \_[OK] Open file descriptors at 12.00%
//!  \_[WARNING] CPU usage at 55.00%
//! | process.cpu.percent=55%;50;75;0;100 ...
//! ```

use std::fmt;

use crate::perfdata::{Perfdata, PerfdataList};
use crate::{worst_state, Status};

/// One line of detail below the summary
#[derive(Debug, Clone, PartialEq)]
pub struct SubCheck {
    pub status: Status,
    pub message: String,
}

/// Everything a check has to say
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: Status,
    pub summary: String,
    pub details: Vec<SubCheck>,
    pub perfdata: PerfdataList,
}

impl Outcome {
    /// An outcome that is just a status and a reason, e.g. for errors
    pub fn bare<S: Into<String>>(status: Status, summary: S) -> Outcome {
        Outcome {
            status,
            summary: summary.into(),
            details: Vec::new(),
            perfdata: PerfdataList::new(),
        }
    }

    /// Print the outcome and exit with its status
    pub fn exit(self) -> ! {
        println!("{}", self);
        self.status.exit()
    }
}

/// Collects sub-check results for a check routine
///
/// `finish` aggregates the statuses with [`worst_state`] and picks the
/// summary for the overall status.
#[derive(Debug, Default)]
pub struct OutcomeBuilder {
    details: Vec<SubCheck>,
    perfdata: PerfdataList,
}

/// The summary line to use for each overall status
pub struct Summaries {
    pub ok: &'static str,
    pub warning: &'static str,
    pub critical: &'static str,
    pub unknown: &'static str,
}

impl Summaries {
    fn for_status(&self, status: Status) -> &'static str {
        match status {
            Status::Ok => self.ok,
            Status::Warning => self.warning,
            Status::Critical => self.critical,
            Status::Unknown => self.unknown,
        }
    }
}

impl OutcomeBuilder {
    pub fn new() -> OutcomeBuilder {
        OutcomeBuilder::default()
    }

    pub fn sub_check<S: Into<String>>(&mut self, status: Status, message: S) {
        self.details.push(SubCheck {
            status,
            message: message.into(),
        })
    }

    pub fn perfdata(&mut self, datum: Perfdata) {
        self.perfdata.push(datum)
    }

    /// Aggregate the sub-checks, no sub-checks at all is unknown
    pub fn finish(self, summaries: &Summaries) -> Outcome {
        let status = worst_state(self.details.iter().map(|sub| sub.status));
        Outcome {
            status,
            summary: summaries.for_status(status).to_owned(),
            details: self.details,
            perfdata: self.perfdata,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.status, self.summary)?;
        for sub in &self.details {
            write!(f, "\n \\_[{}] {}", sub.status, sub.message)?;
        }
        if !self.perfdata.is_empty() {
            write!(f, "\n| {}", self.perfdata)?;
        }
        Ok(())
    }
}
