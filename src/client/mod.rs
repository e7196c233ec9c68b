mod config;
pub use config::ClientConfig;

mod transaction;
use transaction::{RequestTransaction, RequestWithTransaction, TransactionCounter};

#[cfg(test)]
mod tests;

use crate::api::DeviceType;
use crate::response::{Envelope, ResponseValue};
use crate::{ASCOMError, Method, OpaqueParams};
use eyre::{ContextCompat, WrapErr};
use futures::TryFutureExt;
use mime::Mime;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::Instrument;

/// Port value meaning "no explicit port".
pub const UNUSED_PORT: i32 = -1;

/// Resolve the URL base of a connection target.
///
/// A non-empty `domain` wins and `port` is ignored, as domain targets are expected
/// to sit behind a reverse proxy on the default port. Otherwise `ip` is used,
/// followed by `:port` unless `port` is [`UNUSED_PORT`].
///
/// Empty `domain` and `ip` yield a bare `http://` / `https://`; this is not
/// validated here and fails on the first request instead.
pub fn resolve_url_base(secure: bool, domain: &str, ip: &str, port: i32) -> String {
    let scheme = if secure { "https" } else { "http" };

    if !domain.is_empty() {
        format!("{scheme}://{domain}")
    } else if port == UNUSED_PORT {
        format!("{scheme}://{ip}")
    } else {
        format!("{scheme}://{ip}:{port}")
    }
}

/// The REST or device-level error observed by the last call that reached the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LastError {
    /// The last call succeeded.
    #[default]
    None,
    /// HTTP status >= 400; the body is kept verbatim.
    Rest {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// Non-zero `ErrorNumber` inside the response envelope.
    Device(ASCOMError),
}

impl LastError {
    /// HTTP status for REST errors, raw ASCOM code for device errors, `0` otherwise.
    pub fn number(&self) -> i32 {
        match self {
            Self::None => 0,
            Self::Rest { status, .. } => i32::from(*status),
            Self::Device(error) => error.code.raw(),
        }
    }

    /// Response body for REST errors, device message for device errors, empty otherwise.
    pub fn message(&self) -> &str {
        match self {
            Self::None => "",
            Self::Rest { body, .. } => body,
            Self::Device(error) => &error.message,
        }
    }

    /// Whether an error was recorded.
    pub const fn is_err(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Outcome of a call that did not produce a value.
#[derive(Debug, Error)]
pub enum CallError {
    /// The request never got a well-formed response (DNS, connect, timeout, malformed body).
    #[error("{0:#}")]
    Transport(eyre::Report),

    /// The server answered with HTTP status >= 400.
    #[error("HTTP {status}: {body}")]
    Rest {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The device reported an error inside the envelope.
    #[error(transparent)]
    Device(#[from] ASCOMError),
}

impl From<eyre::Report> for CallError {
    fn from(err: eyre::Report) -> Self {
        Self::Transport(err)
    }
}

impl CallError {
    fn to_last_error(&self) -> LastError {
        match self {
            Self::Transport(_) => LastError::None,
            Self::Rest { status, body } => LastError::Rest {
                status: *status,
                body: body.clone(),
            },
            Self::Device(error) => LastError::Device(error.clone()),
        }
    }

    /// Collapse REST and device errors into the zero value, keeping only transport errors.
    ///
    /// The details of the collapsed errors stay available via [`AlpacaClient::last_error`].
    fn into_zero<T: ResponseValue>(self) -> eyre::Result<T> {
        match self {
            Self::Transport(err) => Err(err),
            Self::Rest { .. } | Self::Device(_) => Ok(T::zero()),
        }
    }
}

#[derive(Debug)]
struct ClientState {
    transactions: TransactionCounter,
    last_error: LastError,
}

/// Client for one Alpaca server.
///
/// Shared between device handles via [`Arc`](std::sync::Arc). Calls issued through the
/// same client are serialized, so the transaction counter and the last error always
/// describe the same request.
#[derive(Debug)]
pub struct AlpacaClient {
    http: reqwest::Client,
    url_base: String,
    client_id: u32,
    state: Mutex<ClientState>,
    exchange: tokio::sync::Mutex<()>,
}

impl AlpacaClient {
    /// Create a client for the given target.
    ///
    /// Doesn't perform any network I/O; see [`resolve_url_base`] for how the target is resolved.
    pub fn new(client_id: u32, secure: bool, domain: &str, ip: &str, port: i32) -> Self {
        Self::from_parts(
            reqwest::Client::new(),
            resolve_url_base(secure, domain, ip, port),
            client_id,
        )
    }

    /// Create a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> eyre::Result<Self> {
        let client = Self::from_parts(
            config.build_http_client()?,
            config.url_base(),
            config.client_id.unwrap_or_else(rand::random),
        );
        Ok(client.with_transaction_id(config.transaction_id))
    }

    fn from_parts(http: reqwest::Client, url_base: String, client_id: u32) -> Self {
        Self {
            http,
            url_base,
            client_id,
            state: Mutex::new(ClientState {
                transactions: TransactionCounter::new(client_id, 0),
                last_error: LastError::None,
            }),
            exchange: tokio::sync::Mutex::new(()),
        }
    }

    /// Start the transaction counter at `seed` instead of `0`.
    #[must_use]
    pub fn with_transaction_id(mut self, seed: u32) -> Self {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .transactions
            .reseed(seed);
        self
    }

    /// Use a preconfigured HTTP client (TLS roots, proxies, timeouts).
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    fn state(&self) -> MutexGuard<'_, ClientState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Client ID sent with every request.
    pub const fn client_id(&self) -> u32 {
        self.client_id
    }

    /// URL base resolved at construction.
    pub fn url_base(&self) -> &str {
        &self.url_base
    }

    /// Current value of the client transaction counter.
    pub fn transaction_id(&self) -> u32 {
        self.state().transactions.current()
    }

    /// Error recorded by the last call that reached the server.
    ///
    /// Overwritten by every such call, cleared on success, and left alone by transport failures.
    pub fn last_error(&self) -> LastError {
        self.state().last_error.clone()
    }

    /// Shorthand for `self.last_error().number()`.
    pub fn error_number(&self) -> i32 {
        self.state().last_error.number()
    }

    /// Shorthand for `self.last_error().message()`.
    pub fn error_message(&self) -> String {
        self.state().last_error.message().to_owned()
    }

    /// Full URL of a device action: `{url_base}/api/v1/{device_type}/{device_number}/{action}`.
    pub fn build_url(&self, device_type: DeviceType, device_number: u32, action: &str) -> String {
        format!(
            "{url_base}/api/v1/{device_type}/{device_number}/{action}",
            url_base = self.url_base
        )
    }

    /// Perform one action and report every failure mode in the returned value.
    pub async fn call<T: ResponseValue>(
        &self,
        method: Method,
        device_type: DeviceType,
        device_number: u32,
        action: &str,
        params: &OpaqueParams,
    ) -> Result<T, CallError> {
        let _exchange = self.exchange.lock().await;

        let url = self.build_url(device_type, device_number, action);

        let request_transaction = {
            let mut state = self.state();
            match method {
                Method::Get => state.transactions.for_query(),
                Method::Put => state.transactions.for_command(),
            }
        };

        let span = tracing::debug_span!(
            "Alpaca transaction",
            %method,
            %url,
            ?params,
            client_id = request_transaction.client_id,
            client_transaction_id = request_transaction.client_transaction_id,
        );

        let outcome = self
            .send::<T>(method, &url, request_transaction, params)
            .map_err(|err| {
                tracing::error!(%err, "Alpaca request failed");
                err.wrap_err(format!("Failed to send Alpaca request to {url}"))
            })
            .instrument(span)
            .await?;

        self.state().last_error = match &outcome {
            Ok(_) => LastError::None,
            Err(error) => error.to_last_error(),
        };

        outcome
    }

    async fn send<T: ResponseValue>(
        &self,
        method: Method,
        url: &str,
        request_transaction: RequestTransaction,
        params: &OpaqueParams,
    ) -> eyre::Result<Result<T, CallError>> {
        let payload = RequestWithTransaction {
            transaction: request_transaction,
            params,
        };

        let mut request = self
            .http
            .request(method.into(), url)
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref());

        request = match method {
            Method::Get => request.query(&payload),
            Method::Put => request.form(&payload),
        };

        let response = request.send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await?;
            tracing::warn!(status = status.as_u16(), %body, "Alpaca REST error");
            return Ok(Err(CallError::Rest {
                status: status.as_u16(),
                body,
            }));
        }

        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .context("Missing Content-Type header")?
            .to_str()?
            .parse::<Mime>()?;
        eyre::ensure!(
            mime_type.essence_str() == mime::APPLICATION_JSON.as_ref(),
            "Expected JSON response, got {mime_type}"
        );
        match mime_type.get_param(mime::CHARSET) {
            Some(mime::UTF_8) | None => {}
            Some(charset) => eyre::bail!("Unsupported charset {charset}"),
        }

        let bytes = response.bytes().await?;
        let envelope =
            serde_json::from_slice::<Envelope>(&bytes).wrap_err("Malformed Alpaca response")?;

        tracing::debug!(
            server_transaction_id = envelope.server_transaction_id,
            "Received response",
        );

        match envelope.client_transaction_id {
            Some(received_client_transaction_id)
                if received_client_transaction_id
                    != request_transaction.client_transaction_id =>
            {
                tracing::warn!(
                    sent = request_transaction.client_transaction_id,
                    received = received_client_transaction_id,
                    "ClientTransactionID mismatch",
                );
            }
            _ => {}
        }

        let outcome = envelope
            .into_result::<T>()
            .wrap_err("Malformed Alpaca response value")?;

        Ok(outcome.map_err(|error| {
            tracing::warn!(%error, "Alpaca device error");
            CallError::Device(error)
        }))
    }

    /// Perform a query, returning the zero value on REST and device errors.
    ///
    /// Only transport failures are returned as errors; inspect [`Self::last_error`] right after the call
    /// to tell a genuine zero from a failed call.
    pub async fn get<T: ResponseValue>(
        &self,
        device_type: DeviceType,
        device_number: u32,
        action: &str,
        params: &OpaqueParams,
    ) -> eyre::Result<T> {
        self.call(Method::Get, device_type, device_number, action, params)
            .await
            .or_else(CallError::into_zero)
    }

    /// Perform a command, with the same error reporting as [`Self::get`].
    pub async fn put<T: ResponseValue>(
        &self,
        device_type: DeviceType,
        device_number: u32,
        action: &str,
        params: &OpaqueParams,
    ) -> eyre::Result<T> {
        self.call(Method::Put, device_type, device_number, action, params)
            .await
            .or_else(CallError::into_zero)
    }

    /// Query a boolean value.
    pub async fn get_bool_response(
        &self,
        device_type: DeviceType,
        device_number: u32,
        action: &str,
    ) -> eyre::Result<bool> {
        self.get(device_type, device_number, action, &OpaqueParams::new())
            .await
    }

    /// Query a signed 32-bit integer value.
    pub async fn get_i32_response(
        &self,
        device_type: DeviceType,
        device_number: u32,
        action: &str,
    ) -> eyre::Result<i32> {
        self.get(device_type, device_number, action, &OpaqueParams::new())
            .await
    }

    /// Query a floating-point value.
    pub async fn get_f64_response(
        &self,
        device_type: DeviceType,
        device_number: u32,
        action: &str,
    ) -> eyre::Result<f64> {
        self.get(device_type, device_number, action, &OpaqueParams::new())
            .await
    }

    /// Query a string value.
    pub async fn get_string_response(
        &self,
        device_type: DeviceType,
        device_number: u32,
        action: &str,
    ) -> eyre::Result<String> {
        self.get(device_type, device_number, action, &OpaqueParams::new())
            .await
    }
}
