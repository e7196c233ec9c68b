rpc_methods! {
    /// Dome Specific Methods.
    pub struct Dome(Dome) {
        /// The dome altitude (degrees, horizon zero and increasing positive to 90 zenith).
        #[http("altitude", method = Get)]
        fn altitude(&self) -> f64;

        /// Indicates whether the dome is in the home position.
        ///
        /// This is normally used following a FindHome() operation. The value is reset with any azimuth slew operation that moves the dome away from the home position.
        #[http("athome", method = Get)]
        fn at_home(&self) -> bool;

        /// True if the dome is in the programmed park position.
        #[http("atpark", method = Get)]
        fn at_park(&self) -> bool;

        /// Returns the dome azimuth (degrees, North zero and increasing clockwise, i.e., 90 East, 180 South, 270 West).
        #[http("azimuth", method = Get)]
        fn azimuth(&self) -> f64;

        /// True if the dome can move to the home position.
        #[http("canfindhome", method = Get)]
        fn can_find_home(&self) -> bool;

        /// True if the dome is capable of programmed parking (Park() method).
        #[http("canpark", method = Get)]
        fn can_park(&self) -> bool;

        /// True if driver is capable of setting the dome altitude.
        #[http("cansetaltitude", method = Get)]
        fn can_set_altitude(&self) -> bool;

        /// True if driver is capable of rotating the dome.
        #[http("cansetazimuth", method = Get)]
        fn can_set_azimuth(&self) -> bool;

        /// True if driver is capable of setting the dome park position.
        #[http("cansetpark", method = Get)]
        fn can_set_park(&self) -> bool;

        /// True if driver is capable of automatically operating shutter.
        #[http("cansetshutter", method = Get)]
        fn can_set_shutter(&self) -> bool;

        /// True if driver is capable of slaving to a telescope.
        #[http("canslave", method = Get)]
        fn can_slave(&self) -> bool;

        /// True if driver is capable of synchronizing the dome azimuth position using the SyncToAzimuth(Double) method.
        #[http("cansyncazimuth", method = Get)]
        fn can_sync_azimuth(&self) -> bool;

        /// Returns the status of the dome shutter or roll-off roof.
        ///
        /// 0 = Open, 1 = Closed, 2 = Opening, 3 = Closing, 4 = Error.
        #[http("shutterstatus", method = Get)]
        fn shutter_status(&self) -> i32;

        /// True if the dome is slaved to the telescope in its hardware, else False.
        #[http("slaved", method = Get)]
        fn slaved(&self) -> bool;

        /// Sets whether the dome is slaved to the telescope.
        #[http("slaved", method = Put)]
        fn set_slaved(&self, #[http("Slaved")] slaved: bool);

        /// True if any part of the dome is currently moving or a move command has been issued, but the dome has not yet started to move.
        #[http("slewing", method = Get)]
        fn slewing(&self) -> bool;

        /// Calling this method will immediately disable hardware slewing (Slaved will become False).
        #[http("abortslew", method = Put)]
        fn abort_slew(&self);

        /// Close the shutter or otherwise shield telescope from the sky.
        #[http("closeshutter", method = Put)]
        fn close_shutter(&self);

        /// After Home position is established initializes Azimuth to the default value and sets the AtHome flag.
        #[http("findhome", method = Put)]
        fn find_home(&self);

        /// Open shutter or otherwise expose telescope to the sky.
        #[http("openshutter", method = Put)]
        fn open_shutter(&self);

        /// After assuming programmed park position, sets AtPark flag.
        #[http("park", method = Put)]
        fn park(&self);

        /// Set the current azimuth, altitude position of dome to be the park position.
        #[http("setpark", method = Put)]
        fn set_park(&self);

        /// Slew the dome to the given altitude position.
        #[http("slewtoaltitude", method = Put)]
        fn slew_to_altitude(&self, #[http("Altitude")] altitude: f64);

        /// Slew the dome to the given azimuth position.
        #[http("slewtoazimuth", method = Put)]
        fn slew_to_azimuth(&self, #[http("Azimuth")] azimuth: f64);

        /// Synchronize the current position of the dome to the given azimuth.
        #[http("synctoazimuth", method = Put)]
        fn sync_to_azimuth(&self, #[http("Azimuth")] azimuth: f64);
    }
}
