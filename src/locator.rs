//! ROM locator: existence probes and byte fetches over HTTP.
//!
//! Each call is a single attempt. Transport failures and non-2xx statuses
//! are logged and collapse into `false` / `None`; a missing file and an
//! unreachable server look the same to the caller.

use std::io::Read;

use log::{debug, error, warn};
use thiserror::Error;

use crate::rom::{self, RomDescriptor};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the locator sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    pub base_url: String,
}

impl LocatorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for a server path such as `/games/sega/sonic.smd`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Failures seen while talking to the ROM server. Never returned from the
/// public locator API, only logged.
#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("reading body of {url} failed")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Minimal HTTP surface the locator needs.
pub trait Transport {
    /// Issue a header-only request and return the status code.
    fn head(&self, url: &str) -> Result<u16, LocatorError>;
    /// Issue a full request and return the status code and body.
    fn get(&self, url: &str) -> Result<(u16, Vec<u8>), LocatorError>;
}

/// Blocking HTTP transport backed by a `ureq` agent.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn head(&self, url: &str) -> Result<u16, LocatorError> {
        match self.agent.head(url).call() {
            Ok(response) => Ok(response.status()),
            Err(ureq::Error::Status(status, _)) => Ok(status),
            Err(ureq::Error::Transport(err)) => Err(LocatorError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            }),
        }
    }

    fn get(&self, url: &str) -> Result<(u16, Vec<u8>), LocatorError> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => return Ok((status, Vec::new())),
            Err(ureq::Error::Transport(err)) => {
                return Err(LocatorError::Transport {
                    url: url.to_string(),
                    message: err.to_string(),
                });
            }
        };

        let status = response.status();
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|source| LocatorError::Body {
                url: url.to_string(),
                source,
            })?;
        Ok((status, body))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Finds and downloads ROM images from the games directory.
pub struct RomLocator<T: Transport = HttpTransport> {
    config: LocatorConfig,
    transport: T,
}

impl RomLocator<HttpTransport> {
    /// Locator talking HTTP to `config.base_url`.
    pub fn new(config: LocatorConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> RomLocator<T> {
    pub fn with_transport(config: LocatorConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Server path of a ROM.
    ///
    /// Same as [`rom::path_for`]; kept on the locator so callers holding one
    /// have the whole path/validate/probe/fetch contract in a single place.
    pub fn path_for(&self, console: &str, filename: &str) -> String {
        rom::path_for(console, filename)
    }

    /// Extension allow-list check, same as [`rom::is_valid_extension`].
    /// No request is made.
    pub fn is_valid_extension(&self, console: &str, filename: &str) -> bool {
        rom::is_valid_extension(console, filename)
    }

    /// Descriptor for a ROM without touching the network.
    pub fn describe(&self, console: &str, filename: &str) -> RomDescriptor {
        RomDescriptor::new(console, filename)
    }

    /// Whether the server has the ROM. Any failure reads as "no".
    pub fn exists(&self, console: &str, filename: &str) -> bool {
        let url = self.config.url_for(&self.path_for(console, filename));
        debug!("probing {}", url);

        match self.probe(&url) {
            Ok(()) => true,
            Err(err) => {
                debug!("ROM probe negative: {}", err);
                false
            }
        }
    }

    /// Download the ROM bytes, or `None` on any failure.
    pub fn fetch_bytes(&self, console: &str, filename: &str) -> Option<Vec<u8>> {
        let path = self.path_for(console, filename);
        let url = self.config.url_for(&path);
        debug!("fetching {}", url);

        match self.fetch(&url) {
            Ok(bytes) => {
                debug!("fetched {} bytes from {}", bytes.len(), url);
                Some(bytes)
            }
            Err(err @ LocatorError::Status { .. }) => {
                error!("Failed to load game ROM: {} ({})", path, err);
                None
            }
            Err(err) => {
                error!("Error loading game ROM: {}", err);
                None
            }
        }
    }

    /// Fetch the ROM and return its descriptor with the byte length filled in.
    pub fn locate(&self, console: &str, filename: &str) -> Option<(RomDescriptor, Vec<u8>)> {
        if !self.is_valid_extension(console, filename) {
            warn!(
                "{} does not carry a known {} ROM extension",
                filename, console
            );
        }
        let bytes = self.fetch_bytes(console, filename)?;
        let descriptor = self.describe(console, filename).with_size(bytes.len());
        Some((descriptor, bytes))
    }

    fn probe(&self, url: &str) -> Result<(), LocatorError> {
        let status = self.transport.head(url)?;
        if !is_success(status) {
            return Err(LocatorError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(())
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, LocatorError> {
        let (status, body) = self.transport.get(url)?;
        if !is_success(status) {
            return Err(LocatorError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(body)
    }
}
