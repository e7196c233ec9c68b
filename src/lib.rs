/*!
Strongly-typed client for the [ASCOM Alpaca](https://ascom-standards.org/api/) REST API.

An [`AlpacaClient`] owns the connection target, the client ID and the client transaction counter.
Device handles ([`Camera`], [`Dome`], [`ObservingConditions`], [`Switch`], [`Telescope`], or a generic
[`DeviceHandle`]) share it via [`Arc`](std::sync::Arc) and map each method onto one Alpaca endpoint.

```no_run
# async fn run() -> eyre::Result<()> {
use alpaca_client::AlpacaClient;
use std::sync::Arc;

let client = Arc::new(AlpacaClient::new(65535, false, "", "192.168.1.89", 11111));
let conditions = client.observing_conditions(0);

let humidity = conditions.humidity().await?;
if client.last_error().is_err() {
    // The server answered, but the value is a zero placeholder.
    eprintln!("humidity unavailable: {}", client.error_message());
} else {
    println!("humidity: {humidity}%");
}
# Ok(())
# }
```

## Errors

There are three kinds of failures and they are reported differently:

- transport failures (connection refused, timeout, malformed response) are returned as [`eyre::Report`];
- REST failures (HTTP status 400 or above) and device failures (non-zero `ErrorNumber` in the response
  envelope) make the call return the zero value of its result type and are recorded in
  [`AlpacaClient::last_error`] until the next call reaches the server.

[`AlpacaClient::call`] returns all three as a [`CallError`] instead.

## Features

Each device binding sits behind a Cargo feature of the same name (`camera`, `dome`,
`observing_conditions`, `switch`, `telescope`); `all-devices` (the default) enables them all.
*/

pub mod api;

mod client;
mod errors;
mod params;
mod response;

#[cfg(test)]
mod test;

#[cfg(feature = "camera")]
pub use api::Camera;
#[cfg(feature = "dome")]
pub use api::Dome;
#[cfg(feature = "observing_conditions")]
pub use api::ObservingConditions;
#[cfg(feature = "switch")]
pub use api::Switch;
#[cfg(feature = "telescope")]
pub use api::Telescope;
pub use api::{DeviceHandle, DeviceType};
pub use client::{AlpacaClient, CallError, ClientConfig, LastError, UNUSED_PORT, resolve_url_base};
pub use errors::{ASCOMError, ASCOMErrorCode};
pub use params::{ASCOMParam, Method, OpaqueParams};
pub use response::{Envelope, ResponseValue};
