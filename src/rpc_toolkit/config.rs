use crate::error::{Error, Result};
use reqwest::Url;
use std::fmt;
use std::time::Duration;

/// Endpoint used when `RPC_URL` is not set.
pub const DEFAULT_RPC_URL: &str = "https://rpc.anoncenomics.com";

/// How long a single call may take before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Where to send requests and which credentials to send with them.
///
/// Built once when the process starts and handed to [`crate::RpcClient::new`].
#[derive(Clone)]
pub struct RpcConfig {
    url: Url,
    user: String,
    pass: String,
    timeout: Duration,
}

impl RpcConfig {
    /// Validate the endpoint and credentials. Empty credentials count as missing.
    pub fn new(url: &str, user: Option<String>, pass: Option<String>) -> Result<Self> {
        let user = user
            .filter(|u| !u.is_empty())
            .ok_or(Error::MissingCredential("RPC_USER"))?;
        let pass = pass
            .filter(|p| !p.is_empty())
            .ok_or(Error::MissingCredential("RPC_PASS"))?;

        let url = Url::parse(url).map_err(|e| Error::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::InvalidUrl {
                reason: format!("unsupported scheme {:?}", url.scheme()),
                url: url.into(),
            });
        }

        Ok(RpcConfig {
            url,
            user,
            pass,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Rejects a zero timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(Error::ZeroTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pass(&self) -> &str {
        &self.pass
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for RpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcConfig")
            .field("url", &self.url.as_str())
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
