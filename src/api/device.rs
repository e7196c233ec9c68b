use super::DeviceHandle;

rpc_methods! {
    impl DeviceHandle {
        /// Invokes the named device-specific action.
        ///
        /// Actions and SupportedActions are a standardised means for drivers to extend functionality beyond the built-in capabilities of the ASCOM device interfaces.
        #[http("action", method = Put)]
        fn action(&self, #[http("Action")] action: String, #[http("Parameters")] parameters: String) -> String;

        /// Transmits an arbitrary string to the device and does not wait for a response.
        #[http("commandblind", method = Put)]
        #[deprecated(note = "Use the more flexible Action and SupportedActions mechanic.")]
        fn command_blind(&self, #[http("Command")] command: String, #[http("Raw")] raw: bool);

        /// Transmits an arbitrary string to the device and waits for a boolean response.
        #[http("commandbool", method = Put)]
        #[deprecated(note = "Use the more flexible Action and SupportedActions mechanic.")]
        fn command_bool(&self, #[http("Command")] command: String, #[http("Raw")] raw: bool) -> bool;

        /// Transmits an arbitrary string to the device and waits for a string response.
        #[http("commandstring", method = Put)]
        #[deprecated(note = "Use the more flexible Action and SupportedActions mechanic.")]
        fn command_string(&self, #[http("Command")] command: String, #[http("Raw")] raw: bool) -> String;

        /// Retrieves the connected state of the device.
        #[http("connected", method = Get)]
        fn connected(&self) -> bool;

        /// Sets the connected state of the device.
        ///
        /// Set `true` to connect to the device hardware, `false` to disconnect from it.
        #[http("connected", method = Put)]
        fn set_connected(&self, #[http("Connected")] connected: bool);

        /// Returns true while the device is connecting or disconnecting.
        ///
        /// _Platform 7 onward._
        #[http("connecting", method = Get)]
        fn connecting(&self) -> bool;

        /// Connect to the device asynchronously; completion is reported by [`Self::connecting`].
        ///
        /// _Platform 7 onward._
        #[http("connect", method = Put)]
        fn connect(&self);

        /// Disconnect from the device asynchronously; completion is reported by [`Self::connecting`].
        ///
        /// _Platform 7 onward._
        #[http("disconnect", method = Put)]
        fn disconnect(&self);

        /// The description of the device.
        #[http("description", method = Get)]
        fn description(&self) -> String;

        /// The description of the driver.
        #[http("driverinfo", method = Get)]
        fn driver_info(&self) -> String;

        /// A string containing only the major and minor version of the driver.
        #[http("driverversion", method = Get)]
        fn driver_version(&self) -> String;

        /// The version of the ASCOM device interface contract to which this device complies.
        #[http("interfaceversion", method = Get)]
        fn interface_version(&self) -> i32;

        /// The name of the device.
        #[http("name", method = Get)]
        fn name(&self) -> String;
    }
}
