use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// HTTP verb of an Alpaca action.
///
/// Alpaca only uses two: `GET` for queries (parameters in the query string)
/// and `PUT` for commands (parameters in a form body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Method {
    /// Read-only query.
    #[display("GET")]
    Get,
    /// State-changing command.
    #[display("PUT")]
    Put,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Put => Self::PUT,
        }
    }
}

/// Conversion of a typed argument into its Alpaca wire string.
pub trait ASCOMParam {
    /// Render the value the way it's sent in a query string or form body.
    fn to_param_string(&self) -> String;
}

impl ASCOMParam for str {
    fn to_param_string(&self) -> String {
        self.to_owned()
    }
}

impl ASCOMParam for String {
    fn to_param_string(&self) -> String {
        self.clone()
    }
}

impl<T: ?Sized + ASCOMParam> ASCOMParam for &T {
    fn to_param_string(&self) -> String {
        (**self).to_param_string()
    }
}

macro_rules! simple_ascom_param {
    ($($ty:ty),*) => {
        $(
            impl ASCOMParam for $ty {
                fn to_param_string(&self) -> String {
                    ToString::to_string(self)
                }
            }
        )*
    };
}

// `bool` displays as `true`/`false`, which Alpaca servers accept in any casing.
simple_ascom_param!(bool, i32, u32, f64);

/// Call-specific parameters of an action, in insertion order.
///
/// Names are the case-sensitive Alpaca names (`Id`, `SensorName`, `Connected`...).
/// Serializes as a flat map so it can sit next to the transaction IDs
/// in both a query string and a form body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpaqueParams(Vec<(&'static str, String)>);

impl OpaqueParams {
    /// Empty parameter set.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter.
    pub fn insert(&mut self, name: &'static str, value: impl ASCOMParam) {
        debug_assert!(
            self.0.iter().all(|(existing, _)| *existing != name),
            "duplicate parameter {name}"
        );
        self.0.push((name, value.to_param_string()));
    }

    /// Builder-style [`Self::insert`].
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl ASCOMParam) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a parameter value by its exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether no parameters were added.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for OpaqueParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Build [`OpaqueParams`] from `Name: value` pairs.
///
/// Keys are the case-sensitive Alpaca names, values anything implementing [`ASCOMParam`]:
///
/// ```
/// # use alpaca_client::opaque_params;
/// let params = opaque_params! { Id: 2_i32, State: true };
/// assert_eq!(params.get("State"), Some("true"));
/// ```
#[macro_export]
macro_rules! opaque_params {
    ($($key:ident: $value:expr),* $(,)?) => {
        $crate::OpaqueParams::new()
            $(.with(stringify!($key), $value))*
    };
}
