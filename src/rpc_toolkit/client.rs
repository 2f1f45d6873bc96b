use crate::config::RpcConfig;
use crate::error::{Error, Result};
use crate::request::{Request, RpcParams};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, warn};

/// Makes JSON-RPC calls to a single node over HTTP, authenticating every
/// request with the configured Basic credentials.
pub struct RpcClient {
    http: reqwest::Client,
    config: RpcConfig,
}

impl RpcClient {
    pub fn new(config: RpcConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(Error::Client)?;
        Ok(RpcClient { http, config })
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Make one call and hand back the whole decoded response body.
    ///
    /// The body is not checked for `result` or `error`; see [`crate::response`].
    pub async fn call<P: RpcParams>(&self, method: &str, params: P) -> Result<Value> {
        let request = Request::new(method, params)?;
        debug!(method, url = %self.config.url(), "sending RPC request");

        let response = self
            .http
            .post(self.config.url().clone())
            .basic_auth(self.config.user(), Some(self.config.pass()))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.request_error(method, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.request_error(method, e))?;

        if !status.is_success() {
            warn!(method, %status, "RPC endpoint returned an error status");
            return Err(Error::Http {
                method: method.to_owned(),
                status,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            method: method.to_owned(),
            source,
        })
    }

    /// Make one call and take the `result` out of the response (`null` if there isn't one).
    pub async fn call_result<P: RpcParams>(&self, method: &str, params: P) -> Result<Value> {
        let mut body = self.call(method, params).await?;
        Ok(body
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }

    fn request_error(&self, method: &str, source: reqwest::Error) -> Error {
        if source.is_timeout() {
            Error::Timeout {
                method: method.to_owned(),
                timeout: self.config.timeout(),
            }
        } else {
            Error::Transport {
                method: method.to_owned(),
                source,
            }
        }
    }
}
