//! How to reach the Logstash API

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::Error;
use crate::Status;

/// Connection settings, built once by the command line layer
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub hostname: String,
    pub port: u16,
    /// Use https
    pub secure: bool,
    /// Don't verify the server certificate
    pub insecure: bool,
    pub bearer: Option<String>,
    /// `user:password`
    pub basic_auth: Option<String>,
    pub ca_file: Option<PathBuf>,
    pub cert_file: Option<PathBuf>,
    pub key_file: Option<PathBuf>,
    pub timeout: Duration,
    /// Exit code to use when Logstash can't be reached
    pub unreachable_state: Option<i64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            hostname: "localhost".into(),
            port: 9600,
            secure: false,
            insecure: false,
            bearer: None,
            basic_auth: None,
            ca_file: None,
            cert_file: None,
            key_file: None,
            timeout: Duration::from_secs(30),
            unreachable_state: None,
        }
    }
}

impl Config {
    /// `http[s]://hostname:port/`
    pub fn base_url(&self) -> Result<Url, Error> {
        let scheme = if self.secure { "https" } else { "http" };
        let raw = format!("{}://{}:{}/", scheme, self.hostname, self.port);
        Url::parse(&raw).map_err(|e| Error::Config(format!("invalid url {}: {}", raw, e)))
    }

    /// The status to report when the API can't be reached
    pub fn unreachable_status(&self) -> Status {
        self.unreachable_state
            .map_or(Status::Unknown, Status::from_code)
    }

    /// Split `user:password`
    pub fn basic_auth_parts(&self) -> Result<Option<(&str, &str)>, Error> {
        match self.basic_auth.as_deref() {
            None | Some("") => Ok(None),
            Some(creds) => {
                let mut parts = creds.splitn(2, ':');
                match (parts.next(), parts.next()) {
                    (Some(user), Some(password)) if !user.is_empty() => Ok(Some((user, password))),
                    _ => Err(Error::Config(
                        "specify the user name and password for server authentication \
                         <user:password>"
                            .into(),
                    )),
                }
            }
        }
    }
}
