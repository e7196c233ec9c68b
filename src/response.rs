use crate::{ASCOMError, ASCOMErrorCode};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::fmt::Debug;

/// The uniform JSON wrapper of every Alpaca response.
///
/// `Value` is kept undecoded until the error fields have been checked, so an error envelope
/// decodes regardless of what it carries as a payload.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Echo of the client transaction ID, if the server sent one.
    #[serde(rename = "ClientTransactionID", default)]
    pub client_transaction_id: Option<u32>,

    /// Server-generated transaction ID, if the server sent one.
    #[serde(rename = "ServerTransactionID", default)]
    pub server_transaction_id: Option<u32>,

    /// Device-level error number, [`ASCOMErrorCode::OK`] on success.
    #[serde(rename = "ErrorNumber", default)]
    pub error_number: ASCOMErrorCode,

    /// Device-level error message, empty on success.
    #[serde(rename = "ErrorMessage", default)]
    pub error_message: Option<String>,

    /// Raw payload; `null` when the server omitted it.
    #[serde(rename = "Value", default)]
    pub value: serde_json::Value,
}

impl Envelope {
    /// The device-level error carried by this envelope, if any.
    pub fn device_error(&self) -> Option<ASCOMError> {
        (self.error_number != ASCOMErrorCode::OK).then(|| {
            ASCOMError::new(
                self.error_number,
                self.error_message.as_deref().unwrap_or_default(),
            )
        })
    }

    /// Split into the decoded value or the device-level error.
    ///
    /// The payload is only decoded on success; a missing or `null` `Value` gives the zero value.
    /// The outer error means the payload doesn't match the expected shape.
    pub fn into_result<V: ResponseValue>(self) -> serde_json::Result<Result<V, ASCOMError>> {
        if let Some(error) = self.device_error() {
            return Ok(Err(error));
        }
        if self.value.is_null() {
            return Ok(Ok(V::zero()));
        }
        serde_json::from_value::<V::Wire>(self.value).map(|wire| Ok(V::from_wire(wire)))
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A result shape an Alpaca action can decode into.
///
/// Implemented for the four primitive shapes used across device APIs
/// (`bool`, `i32`, `f64`, `String`) and for `()`, used by commands whose
/// `Value` is absent or irrelevant.
pub trait ResponseValue: sealed::Sealed + Sized + Send + 'static {
    /// Representation inside the envelope's `Value` field.
    #[doc(hidden)]
    type Wire: DeserializeOwned + Default + Debug + Send;

    #[doc(hidden)]
    fn from_wire(wire: Self::Wire) -> Self;

    /// The value handed back when the call failed at REST or device level.
    fn zero() -> Self {
        Self::from_wire(Self::Wire::default())
    }
}

macro_rules! primitive_response_values {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl ResponseValue for $ty {
                type Wire = Self;

                fn from_wire(wire: Self) -> Self {
                    wire
                }
            }
        )*
    };
}

primitive_response_values!(bool, i32, f64, String);

/// Accepts and discards any `Value`.
#[derive(Debug, Default)]
#[doc(hidden)]
pub struct Discarded;

impl<'de> Deserialize<'de> for Discarded {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer).map(|IgnoredAny| Self)
    }
}

impl sealed::Sealed for () {}

impl ResponseValue for () {
    type Wire = Discarded;

    fn from_wire(Discarded: Discarded) -> Self {}
}
