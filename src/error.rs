use std::io;
use std::path::PathBuf;

use crate::threshold;
use crate::Status;

/// Everything that stops a check from producing a real outcome
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or contradictory settings
    #[error("{0}")]
    Config(String),

    #[error("{flag}: {source}")]
    Threshold {
        flag: &'static str,
        source: threshold::ParseError,
    },

    #[error("could not read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// Connection refused, timeouts, TLS failures
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not get {url} - Error: {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not determine version")]
    Version,

    #[error("could not determine status")]
    NodeStatus,
}

impl Error {
    /// The status to exit with for this error
    ///
    /// Failing to reach Logstash at all uses the operator's `unreachable`
    /// status, everything else is unknown.
    pub fn status(&self, unreachable: Status) -> Status {
        match *self {
            Error::Transport(_) => unreachable,
            _ => Status::Unknown,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;
    use crate::Status;

    #[test]
    fn only_transport_errors_use_the_unreachable_status() {
        let err = Error::HttpStatus {
            url: "http://localhost:9600/_node/stats".into(),
            status: 404,
        };
        assert_eq!(err.status(Status::Critical), Status::Unknown);
        assert_eq!(
            err.to_string(),
            "could not get http://localhost:9600/_node/stats - Error: 404"
        );
        assert_eq!(
            Error::Version.status(Status::Warning),
            Status::Unknown
        );
        assert_eq!(
            Error::Version.to_string(),
            "could not determine version"
        );
    }
}
