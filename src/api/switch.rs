rpc_methods! {
    /// Switch Specific Methods.
    pub struct Switch(Switch) {
        /// Returns the number of switch devices managed by this driver.
        ///
        /// Devices are numbered from 0 to MaxSwitch - 1.
        #[http("maxswitch", method = Get)]
        fn max_switch(&self) -> i32;

        /// Indicates whether the given switch can operate asynchronously.
        ///
        /// _ISwitchV3 and later._
        #[http("canasync", method = Get)]
        fn can_async(&self, #[http("Id")] id: i32) -> bool;

        /// Reports if the specified switch device can be written to.
        ///
        /// This is false if the device cannot be written to, for example a limit switch or a sensor.
        #[http("canwrite", method = Get)]
        fn can_write(&self, #[http("Id")] id: i32) -> bool;

        /// Return the state of switch device id as a boolean.
        #[http("getswitch", method = Get)]
        fn get_switch(&self, #[http("Id")] id: i32) -> bool;

        /// Gets the description of the specified switch device.
        ///
        /// This is to allow a fuller description of the device to be returned, for example for a tool tip.
        #[http("getswitchdescription", method = Get)]
        fn get_switch_description(&self, #[http("Id")] id: i32) -> String;

        /// Gets the name of the specified switch device.
        #[http("getswitchname", method = Get)]
        fn get_switch_name(&self, #[http("Id")] id: i32) -> String;

        /// Gets the value of the specified switch device as a double.
        ///
        /// The value of this switch is expected to be between MinSwitchValue and MaxSwitchValue.
        #[http("getswitchvalue", method = Get)]
        fn get_switch_value(&self, #[http("Id")] id: i32) -> f64;

        /// Gets the minimum value of the specified switch device as a double.
        #[http("minswitchvalue", method = Get)]
        fn min_switch_value(&self, #[http("Id")] id: i32) -> f64;

        /// Gets the maximum value of the specified switch device as a double.
        #[http("maxswitchvalue", method = Get)]
        fn max_switch_value(&self, #[http("Id")] id: i32) -> f64;

        /// Starts an asynchronous state change; `state_change_complete` turns true once it has finished.
        ///
        /// _ISwitchV3 and later._
        #[http("setasync", method = Put)]
        fn set_async(&self, #[http("Id")] id: i32, #[http("State")] state: bool);

        /// Starts an asynchronous value change; `state_change_complete` turns true once it has finished.
        ///
        /// _ISwitchV3 and later._
        #[http("setasyncvalue", method = Put)]
        fn set_async_value(&self, #[http("Id")] id: i32, #[http("Value")] value: f64);

        /// Sets a switch controller device to the specified state, true or false.
        #[http("setswitch", method = Put)]
        fn set_switch(&self, #[http("Id")] id: i32, #[http("State")] state: bool);

        /// Sets a switch device name to the specified value.
        #[http("setswitchname", method = Put)]
        fn set_switch_name(&self, #[http("Id")] id: i32, #[http("Name")] name: String);

        /// Sets a switch device value to the specified value.
        #[http("setswitchvalue", method = Put)]
        fn set_switch_value(&self, #[http("Id")] id: i32, #[http("Value")] value: f64);

        /// True once the last asynchronous operation on the specified switch has completed.
        ///
        /// _ISwitchV3 and later._
        #[http("statechangecomplete", method = Get)]
        fn state_change_complete(&self, #[http("Id")] id: i32) -> bool;

        /// Returns the step size that this device supports (the difference between successive values of the device).
        #[http("switchstep", method = Get)]
        fn switch_step(&self, #[http("Id")] id: i32) -> f64;
    }
}
