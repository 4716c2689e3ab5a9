//! Talk to the Logstash API over http(s)

use std::fs;
use std::path::Path;

use reqwest::blocking;
use reqwest::{Certificate, Identity, StatusCode};
use url::Url;

use crate::config::Config;
use crate::error::Error;

enum Auth {
    None,
    Bearer(String),
    Basic(String, String),
}

/// A configured http client for one Logstash node
pub struct Client {
    http: blocking::Client,
    base: Url,
    auth: Auth,
}

impl Client {
    pub fn new(config: &Config) -> Result<Client, Error> {
        let timeout = if config.timeout.as_secs() == 0 {
            None
        } else {
            Some(config.timeout)
        };
        let mut builder = blocking::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .danger_accept_invalid_certs(config.insecure);

        if let Some(ref ca_file) = config.ca_file {
            let pem = read_pem(ca_file)?;
            let cert = Certificate::from_pem(&pem).map_err(|e| {
                Error::Config(format!("invalid CA file {}: {}", ca_file.display(), e))
            })?;
            builder = builder.add_root_certificate(cert);
        }

        match (&config.cert_file, &config.key_file) {
            (Some(cert_file), Some(key_file)) => {
                let mut pem = read_pem(cert_file)?;
                pem.push(b'\n');
                pem.extend(read_pem(key_file)?);
                let identity = Identity::from_pem(&pem).map_err(|e| {
                    Error::Config(format!(
                        "invalid client certificate {} / {}: {}",
                        cert_file.display(),
                        key_file.display(),
                        e
                    ))
                })?;
                builder = builder.identity(identity);
            }
            (None, None) => {}
            _ => {
                return Err(Error::Config(
                    "--cert-file and --key-file must be given together".into(),
                ))
            }
        }

        let auth = if let Some((user, password)) = config.basic_auth_parts()? {
            Auth::Basic(user.to_owned(), password.to_owned())
        } else {
            match config.bearer {
                Some(ref token) if !token.is_empty() => Auth::Bearer(token.clone()),
                _ => Auth::None,
            }
        };

        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("could not set up http client: {}", e)))?;

        Ok(Client {
            http,
            base: config.base_url()?,
            auth,
        })
    }

    /// The full url for an API path given as segments
    ///
    /// A trailing empty segment leaves a trailing slash.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET an API path and return the body if Logstash answered 200
    pub fn get(&self, segments: &[&str]) -> Result<Vec<u8>, Error> {
        let url = self.url(segments);
        tracing::debug!(%url, "querying logstash");

        let request = self.http.get(url.clone());
        let request = match self.auth {
            Auth::None => request,
            Auth::Bearer(ref token) => request.bearer_auth(token),
            Auth::Basic(ref user, ref password) => request.basic_auth(user, Some(password)),
        };

        let response = request.send()?;
        let status = response.status();
        tracing::debug!(%url, %status, "logstash responded");
        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

fn read_pem(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}
