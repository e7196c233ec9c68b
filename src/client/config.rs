use super::{UNUSED_PORT, resolve_url_base};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection target and client identity, in a form that can be loaded from any serde source.
///
/// Every field is optional when deserializing:
///
/// ```
/// # use alpaca_client::ClientConfig;
/// let config: ClientConfig = serde_json::from_str(r#"{ "ip": "192.168.1.89", "port": 11111 }"#)?;
/// assert_eq!(config.url_base(), "http://192.168.1.89:11111");
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Client ID sent with every request; a random one is picked when absent.
    pub client_id: Option<u32>,

    /// Use `https` instead of `http`.
    pub secure: bool,

    /// Host name. Takes precedence over `ip` and `port` when non-empty.
    pub domain: String,

    /// Bare IP address, used when `domain` is empty.
    pub ip: String,

    /// Port appended to `ip`, or [`UNUSED_PORT`].
    pub port: i32,

    /// Starting value of the client transaction counter.
    pub transaction_id: u32,

    /// Overall per-request timeout enforced by the HTTP transport.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            secure: false,
            domain: String::new(),
            ip: String::new(),
            port: UNUSED_PORT,
            transaction_id: 0,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// URL base this configuration resolves to.
    pub fn url_base(&self) -> String {
        resolve_url_base(self.secure, &self.domain, &self.ip, self.port)
    }

    pub(crate) fn build_http_client(&self) -> eyre::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build()?)
    }
}
