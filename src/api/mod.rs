/*!
Typed bindings of the ASCOM Alpaca Device API v1.

Alpaca Device API URLs are of the form **http(s)://host:port/api/v1/{device_type}/{device_number}/{action}**,
e.g. **http://192.168.1.89:7843/api/v1/focuser/0/position**. URLs are case sensitive and always lower case;
parameter names are not case sensitive on the server side but are sent here in their documented casing.

For GET operations, parameters are placed in the URL query string and for PUT operations in the body of the message.
Every response is a JSON envelope carrying the client's and the server's transaction numbers, an error number
and message, and the value itself.

HTTP status `200` only means the request reached the device's handler; check the envelope's error fields
(surfaced here as [`LastError::Device`](crate::LastError::Device)). Status `400` means the request could not be
interpreted (e.g. an invalid device number), `500` an unrecoverable error inside the device; both carry a text
body (surfaced as [`LastError::Rest`](crate::LastError::Rest)).
*/

use crate::response::ResponseValue;
use crate::{AlpacaClient, CallError, Method, OpaqueParams};
use std::sync::Arc;

#[macro_use]
mod macros;

mod device;

/// Category of an Alpaca device, displayed as its URL path segment.
#[derive(
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Debug,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[expect(missing_docs)] // self-explanatory variants
pub enum DeviceType {
    #[display("camera")]
    Camera,
    #[display("covercalibrator")]
    CoverCalibrator,
    #[display("dome")]
    Dome,
    #[display("filterwheel")]
    FilterWheel,
    #[display("focuser")]
    Focuser,
    #[display("observingconditions")]
    ObservingConditions,
    #[display("rotator")]
    Rotator,
    #[display("safetymonitor")]
    SafetyMonitor,
    #[display("switch")]
    Switch,
    #[display("telescope")]
    Telescope,
}

/// One device on an Alpaca server: a shared client plus the device's type and index.
///
/// Methods common to all devices (`connected`, `description`...) are defined here;
/// device-specific types deref to this handle.
#[derive(Debug, Clone)]
pub struct DeviceHandle {
    client: Arc<AlpacaClient>,
    device_type: DeviceType,
    device_number: u32,
}

impl DeviceHandle {
    /// Create a handle for the `device_number`-th device of `device_type`.
    pub const fn new(client: Arc<AlpacaClient>, device_type: DeviceType, device_number: u32) -> Self {
        Self {
            client,
            device_type,
            device_number,
        }
    }

    /// The shared client.
    pub const fn client(&self) -> &Arc<AlpacaClient> {
        &self.client
    }

    /// Device category.
    pub const fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Zero-based index among devices of the same type.
    pub const fn device_number(&self) -> u32 {
        self.device_number
    }

    /// Full URL of one of this device's actions.
    pub fn build_url(&self, action: &str) -> String {
        self.client
            .build_url(self.device_type, self.device_number, action)
    }

    /// See [`AlpacaClient::call`].
    pub async fn call<T: ResponseValue>(
        &self,
        method: Method,
        action: &str,
        params: &OpaqueParams,
    ) -> Result<T, CallError> {
        self.client
            .call(method, self.device_type, self.device_number, action, params)
            .await
    }

    /// See [`AlpacaClient::get`].
    pub async fn get<T: ResponseValue>(&self, action: &str, params: &OpaqueParams) -> eyre::Result<T> {
        self.client
            .get(self.device_type, self.device_number, action, params)
            .await
    }

    /// See [`AlpacaClient::put`].
    pub async fn put<T: ResponseValue>(&self, action: &str, params: &OpaqueParams) -> eyre::Result<T> {
        self.client
            .put(self.device_type, self.device_number, action, params)
            .await
    }

    /// [`Self::get`] or [`Self::put`] depending on `method`.
    pub async fn exec<T: ResponseValue>(
        &self,
        method: Method,
        action: &str,
        params: &OpaqueParams,
    ) -> eyre::Result<T> {
        match method {
            Method::Get => self.get(action, params).await,
            Method::Put => self.put(action, params).await,
        }
    }
}

macro_rules! rpc_mod {
    ($(# $cfg:tt $name:ident in $module:ident,)*) => {
        $(
            # $cfg
            mod $module;

            # $cfg
            pub use $module::$name;

            # $cfg
            impl AlpacaClient {
                #[doc = concat!("Handle for the `device_number`-th [`", stringify!($name), "`] on this server.")]
                pub fn $module(self: &Arc<Self>, device_number: u32) -> $name {
                    $name::new(Arc::clone(self), device_number)
                }
            }
        )*
    };
}

rpc_mod! {
    #[cfg(feature = "camera")]
    Camera in camera,

    #[cfg(feature = "dome")]
    Dome in dome,

    #[cfg(feature = "observing_conditions")]
    ObservingConditions in observing_conditions,

    #[cfg(feature = "switch")]
    Switch in switch,

    #[cfg(feature = "telescope")]
    Telescope in telescope,
}

impl AlpacaClient {
    /// Generic handle for any device type, including ones without a typed binding.
    pub fn device(self: &Arc<Self>, device_type: DeviceType, device_number: u32) -> DeviceHandle {
        DeviceHandle::new(Arc::clone(self), device_type, device_number)
    }
}
