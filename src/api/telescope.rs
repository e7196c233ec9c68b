rpc_methods! {
    /// Telescope Specific Methods.
    pub struct Telescope(Telescope) {
        /// Returns the alignment mode of the mount.
        ///
        /// 0 = Alt/Az, 1 = Polar, 2 = German Polar.
        #[http("alignmentmode", method = Get)]
        fn alignment_mode(&self) -> i32;

        /// The altitude above the local horizon of the mount's current position (degrees, positive up).
        #[http("altitude", method = Get)]
        fn altitude(&self) -> f64;

        /// The area of the telescope's aperture, taking into account any obstructions (square meters).
        #[http("aperturearea", method = Get)]
        fn aperture_area(&self) -> f64;

        /// The telescope's effective aperture diameter (meters).
        #[http("aperturediameter", method = Get)]
        fn aperture_diameter(&self) -> f64;

        /// True if the mount is stopped in the Home position.
        ///
        /// Set only following a FindHome() operation, and reset with any slew operation.
        #[http("athome", method = Get)]
        fn at_home(&self) -> bool;

        /// True if the telescope has been put into the parked state by the Park() method.
        #[http("atpark", method = Get)]
        fn at_park(&self) -> bool;

        /// The azimuth at the local horizon of the mount's current position (degrees, North-referenced, positive East/clockwise).
        #[http("azimuth", method = Get)]
        fn azimuth(&self) -> f64;

        /// True if this telescope is capable of programmed finding its home position (FindHome() method).
        #[http("canfindhome", method = Get)]
        fn can_find_home(&self) -> bool;

        /// True if this telescope is capable of programmed parking (Park() method).
        #[http("canpark", method = Get)]
        fn can_park(&self) -> bool;

        /// True if this telescope is capable of software-pulsed guiding.
        #[http("canpulseguide", method = Get)]
        fn can_pulse_guide(&self) -> bool;

        /// True if the DeclinationRate property can be changed to provide offset tracking in the declination axis.
        #[http("cansetdeclinationrate", method = Get)]
        fn can_set_declination_rate(&self) -> bool;

        /// True if the guide rate properties used for PulseGuide can be adjusted.
        #[http("cansetguiderates", method = Get)]
        fn can_set_guide_rates(&self) -> bool;

        /// True if this telescope is capable of programmed setting of its park position (SetPark() method).
        #[http("cansetpark", method = Get)]
        fn can_set_park(&self) -> bool;

        /// True if the SideOfPier property can be set, meaning that the mount can be forced to flip.
        #[http("cansetpierside", method = Get)]
        fn can_set_pier_side(&self) -> bool;

        /// True if the RightAscensionRate property can be changed to provide offset tracking in the right ascension axis.
        #[http("cansetrightascensionrate", method = Get)]
        fn can_set_right_ascension_rate(&self) -> bool;

        /// True if the Tracking property can be changed, turning telescope sidereal tracking on and off.
        #[http("cansettracking", method = Get)]
        fn can_set_tracking(&self) -> bool;

        /// True if this telescope is capable of programmed slewing (synchronous or asynchronous) to equatorial coordinates.
        #[http("canslew", method = Get)]
        fn can_slew(&self) -> bool;

        /// True if this telescope is capable of programmed slewing (synchronous or asynchronous) to local horizontal coordinates.
        #[http("canslewaltaz", method = Get)]
        fn can_slew_alt_az(&self) -> bool;

        /// True if this telescope is capable of programmed asynchronous slewing to local horizontal coordinates.
        #[http("canslewaltazasync", method = Get)]
        fn can_slew_alt_az_async(&self) -> bool;

        /// True if this telescope is capable of programmed asynchronous slewing to equatorial coordinates.
        #[http("canslewasync", method = Get)]
        fn can_slew_async(&self) -> bool;

        /// True if this telescope is capable of programmed synching to equatorial coordinates.
        #[http("cansync", method = Get)]
        fn can_sync(&self) -> bool;

        /// True if this telescope is capable of programmed synching to local horizontal coordinates.
        #[http("cansyncaltaz", method = Get)]
        fn can_sync_alt_az(&self) -> bool;

        /// True if this telescope is capable of programmed unparking (UnPark() method).
        #[http("canunpark", method = Get)]
        fn can_unpark(&self) -> bool;

        /// The declination (degrees) of the mount's current equatorial coordinates, in the coordinate system given by the EquatorialSystem property.
        #[http("declination", method = Get)]
        fn declination(&self) -> f64;

        /// The declination tracking rate (arcseconds per SI second, default = 0.0).
        #[http("declinationrate", method = Get)]
        fn declination_rate(&self) -> f64;

        /// Sets the declination tracking rate (arcseconds per SI second).
        #[http("declinationrate", method = Put)]
        fn set_declination_rate(&self, #[http("DeclinationRate")] declination_rate: f64);

        /// True if the telescope or driver applies atmospheric refraction to coordinates.
        #[http("doesrefraction", method = Get)]
        fn does_refraction(&self) -> bool;

        /// Causes the telescope or driver to apply atmospheric refraction to coordinates, or not.
        #[http("doesrefraction", method = Put)]
        fn set_does_refraction(&self, #[http("DoesRefraction")] does_refraction: bool);

        /// Returns the current equatorial coordinate system used by this telescope.
        ///
        /// 0 = Other, 1 = Topocentric, 2 = J2000, 3 = J2050, 4 = B1950.
        #[http("equatorialsystem", method = Get)]
        fn equatorial_system(&self) -> i32;

        /// The telescope's focal length in meters.
        #[http("focallength", method = Get)]
        fn focal_length(&self) -> f64;

        /// The current Declination movement rate offset for telescope guiding (degrees/sec).
        #[http("guideratedeclination", method = Get)]
        fn guide_rate_declination(&self) -> f64;

        /// The current RightAscension movement rate offset for telescope guiding (degrees/sec).
        #[http("guideraterightascension", method = Get)]
        fn guide_rate_right_ascension(&self) -> f64;

        /// True if a PulseGuide command is in progress, False otherwise.
        #[http("ispulseguiding", method = Get)]
        fn is_pulse_guiding(&self) -> bool;

        /// The right ascension (hours) of the mount's current equatorial coordinates, in the coordinate system given by the EquatorialSystem property.
        #[http("rightascension", method = Get)]
        fn right_ascension(&self) -> f64;

        /// The right ascension tracking rate (arcseconds per sidereal second, default = 0.0).
        #[http("rightascensionrate", method = Get)]
        fn right_ascension_rate(&self) -> f64;

        /// Sets the right ascension tracking rate (arcseconds per sidereal second).
        #[http("rightascensionrate", method = Put)]
        fn set_right_ascension_rate(&self, #[http("RightAscensionRate")] right_ascension_rate: f64);

        /// Indicates the pointing state of the mount.
        ///
        /// 0 = East, 1 = West, -1 = Unknown.
        #[http("sideofpier", method = Get)]
        fn side_of_pier(&self) -> i32;

        /// The local apparent sidereal time from the telescope's internal clock (hours, sidereal).
        #[http("siderealtime", method = Get)]
        fn sidereal_time(&self) -> f64;

        /// The elevation above mean sea level (meters) of the site at which the telescope is located.
        #[http("siteelevation", method = Get)]
        fn site_elevation(&self) -> f64;

        /// The geodetic(map) latitude (degrees, positive North, WGS84) of the site at which the telescope is located.
        #[http("sitelatitude", method = Get)]
        fn site_latitude(&self) -> f64;

        /// The longitude (degrees, positive East, WGS84) of the site at which the telescope is located.
        #[http("sitelongitude", method = Get)]
        fn site_longitude(&self) -> f64;

        /// True if telescope is currently moving in response to one of the Slew methods or the MoveAxis method, False at all other times.
        #[http("slewing", method = Get)]
        fn slewing(&self) -> bool;

        /// The declination (degrees, positive North) for the target of an equatorial slew or sync operation.
        #[http("targetdeclination", method = Get)]
        fn target_declination(&self) -> f64;

        /// Sets the declination (degrees, positive North) for the target of an equatorial slew or sync operation.
        #[http("targetdeclination", method = Put)]
        fn set_target_declination(&self, #[http("TargetDeclination")] target_declination: f64);

        /// The right ascension (hours) for the target of an equatorial slew or sync operation.
        #[http("targetrightascension", method = Get)]
        fn target_right_ascension(&self) -> f64;

        /// Sets the right ascension (hours) for the target of an equatorial slew or sync operation.
        #[http("targetrightascension", method = Put)]
        fn set_target_right_ascension(&self, #[http("TargetRightAscension")] target_right_ascension: f64);

        /// Returns the state of the telescope's sidereal tracking drive.
        #[http("tracking", method = Get)]
        fn tracking(&self) -> bool;

        /// Sets the state of the telescope's sidereal tracking drive.
        #[http("tracking", method = Put)]
        fn set_tracking(&self, #[http("Tracking")] tracking: bool);

        /// The current tracking rate of the telescope's sidereal drive.
        ///
        /// 0 = Sidereal, 1 = Lunar, 2 = Solar, 3 = King.
        #[http("trackingrate", method = Get)]
        fn tracking_rate(&self) -> i32;

        /// Returns the UTC date/time of the telescope's internal clock in ISO 8601 format.
        #[http("utcdate", method = Get)]
        fn utc_date(&self) -> String;

        /// Immediately Stops a slew in progress.
        #[http("abortslew", method = Put)]
        fn abort_slew(&self);

        /// True if this telescope can move the requested axis.
        ///
        /// 0 = Primary, 1 = Secondary, 2 = Tertiary.
        #[http("canmoveaxis", method = Get)]
        fn can_move_axis(&self, #[http("Axis")] axis: i32) -> bool;

        /// Locates the telescope's "home" position (synchronous).
        #[http("findhome", method = Put)]
        fn find_home(&self);

        /// Move the telescope in one axis at the given rate.
        #[http("moveaxis", method = Put)]
        fn move_axis(&self, #[http("Axis")] axis: i32, #[http("Rate")] rate: f64);

        /// Move the telescope to its park position, stop all motion (or restrict to a small safe range), and set AtPark to True.
        #[http("park", method = Put)]
        fn park(&self);

        /// Moves the scope in the given direction for the given interval or time at the rate given by the corresponding guide rate property.
        ///
        /// Direction: 0 = North, 1 = South, 2 = East, 3 = West. Duration is in milliseconds.
        #[http("pulseguide", method = Put)]
        fn pulse_guide(&self, #[http("Direction")] direction: i32, #[http("Duration")] duration: i32);

        /// Sets the telescope's park position to be its current position.
        #[http("setpark", method = Put)]
        fn set_park(&self);

        /// Move the telescope to the given local horizontal coordinates, return immediately after the slew starts.
        ///
        /// The client can poll the Slewing method to determine when the mount reaches the intended coordinates.
        #[http("slewtoaltazasync", method = Put)]
        fn slew_to_alt_az_async(&self, #[http("Azimuth")] azimuth: f64, #[http("Altitude")] altitude: f64);

        /// Move the telescope to the given equatorial coordinates, return immediately after the slew starts.
        ///
        /// The client can poll the Slewing method to determine when the mount reaches the intended coordinates.
        #[http("slewtocoordinatesasync", method = Put)]
        fn slew_to_coordinates_async(
            &self,
            #[http("RightAscension")] right_ascension: f64,
            #[http("Declination")] declination: f64,
        );

        /// Matches the scope's equatorial coordinates to the given equatorial coordinates.
        #[http("synctocoordinates", method = Put)]
        fn sync_to_coordinates(
            &self,
            #[http("RightAscension")] right_ascension: f64,
            #[http("Declination")] declination: f64,
        );

        /// Takes telescope out of the Parked state.
        #[http("unpark", method = Put)]
        fn unpark(&self);
    }
}
