/// Turn a declarative table of Alpaca actions into async methods.
///
/// Each entry names the action path, the HTTP verb, the wire names of its
/// parameters and the result shape (unit when omitted). Every generated method
/// goes through `DeviceHandle::exec`, so REST and device errors end up in the
/// client's last error and transport errors are returned.
///
/// The `struct` form additionally declares a device type wrapping a `DeviceHandle`.
#[cfg_attr(not(feature = "__anydevice"), allow(unused_macro_rules))]
macro_rules! rpc_methods {
    (@ret) => (());
    (@ret $return_type:ty) => ($return_type);

    (
        $(# $attr:tt)*
        $pub:vis struct $name:ident($device_type:ident) $methods:tt
    ) => {
        $(# $attr)*
        #[derive(Debug, Clone, derive_more::Deref)]
        $pub struct $name($crate::api::DeviceHandle);

        impl $name {
            #[doc = concat!("Handle for the `", stringify!($name), "` with the given index on `client`.")]
            pub const fn new(client: std::sync::Arc<$crate::AlpacaClient>, device_number: u32) -> Self {
                Self($crate::api::DeviceHandle::new(
                    client,
                    $crate::api::DeviceType::$device_type,
                    device_number,
                ))
            }

            /// The underlying generic handle.
            pub const fn handle(&self) -> &$crate::api::DeviceHandle {
                &self.0
            }
        }

        rpc_methods!(impl $name $methods);
    };

    (
        impl $ty:ty {
            $(
                $(#[doc = $doc:literal])*
                #[http($method_path:literal, method = $http_method:ident)]
                $(# $method_attr:tt)*
                fn $method_name:ident(
                    & $self:ident $(, #[http($param_query:literal)] $param:ident: $param_ty:ty)* $(,)?
                ) $(-> $return_type:ty)?;
            )*
        }
    ) => {
        impl $ty {
            $(
                $(#[doc = $doc])*
                $(# $method_attr)*
                pub async fn $method_name(
                    & $self $(, $param: $param_ty)*
                ) -> eyre::Result<rpc_methods!(@ret $($return_type)?)> {
                    $self
                        .exec(
                            $crate::Method::$http_method,
                            $method_path,
                            &$crate::OpaqueParams::new()
                                $(.with($param_query, $param))*,
                        )
                        .await
                }
            )*
        }
    };
}
