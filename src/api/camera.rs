rpc_methods! {
    /// Camera Specific Methods.
    pub struct Camera(Camera) {
        /// Returns the X offset of the Bayer matrix, as defined in SensorType.
        #[http("bayeroffsetx", method = Get)]
        fn bayer_offset_x(&self) -> i32;

        /// Returns the Y offset of the Bayer matrix, as defined in SensorType.
        #[http("bayeroffsety", method = Get)]
        fn bayer_offset_y(&self) -> i32;

        /// Returns the binning factor for the X axis.
        #[http("binx", method = Get)]
        fn bin_x(&self) -> i32;

        /// Sets the binning factor for the X axis.
        #[http("binx", method = Put)]
        fn set_bin_x(&self, #[http("BinX")] bin_x: i32);

        /// Returns the binning factor for the Y axis.
        #[http("biny", method = Get)]
        fn bin_y(&self) -> i32;

        /// Sets the binning factor for the Y axis.
        #[http("biny", method = Put)]
        fn set_bin_y(&self, #[http("BinY")] bin_y: i32);

        /// Returns the current camera operational state.
        ///
        /// 0 = Idle, 1 = Waiting, 2 = Exposing, 3 = Reading, 4 = Download, 5 = Error.
        #[http("camerastate", method = Get)]
        fn camera_state(&self) -> i32;

        /// Returns the width of the CCD camera chip in unbinned pixels.
        #[http("cameraxsize", method = Get)]
        fn camera_x_size(&self) -> i32;

        /// Returns the height of the CCD camera chip in unbinned pixels.
        #[http("cameraysize", method = Get)]
        fn camera_y_size(&self) -> i32;

        /// Returns true if the camera can abort exposures; false if not.
        #[http("canabortexposure", method = Get)]
        fn can_abort_exposure(&self) -> bool;

        /// Returns a flag showing whether this camera supports asymmetric binning.
        #[http("canasymmetricbin", method = Get)]
        fn can_asymmetric_bin(&self) -> bool;

        /// Indicates whether the camera has a fast readout mode.
        #[http("canfastreadout", method = Get)]
        fn can_fast_readout(&self) -> bool;

        /// If true, the camera's cooler power setting can be read.
        #[http("cangetcoolerpower", method = Get)]
        fn can_get_cooler_power(&self) -> bool;

        /// Returns a flag indicating whether this camera supports pulse guiding.
        #[http("canpulseguide", method = Get)]
        fn can_pulse_guide(&self) -> bool;

        /// Returns a flag indicating whether this camera supports setting the CCD temperature.
        #[http("cansetccdtemperature", method = Get)]
        fn can_set_ccd_temperature(&self) -> bool;

        /// Returns a flag indicating whether this camera can stop an exposure that is in progress.
        #[http("canstopexposure", method = Get)]
        fn can_stop_exposure(&self) -> bool;

        /// Returns the current CCD temperature in degrees Celsius.
        #[http("ccdtemperature", method = Get)]
        fn ccd_temperature(&self) -> f64;

        /// Returns the current cooler on/off state.
        #[http("cooleron", method = Get)]
        fn cooler_on(&self) -> bool;

        /// Turns the camera cooler on and off.
        #[http("cooleron", method = Put)]
        fn set_cooler_on(&self, #[http("CoolerOn")] cooler_on: bool);

        /// Returns the present cooler power level, in percent.
        #[http("coolerpower", method = Get)]
        fn cooler_power(&self) -> f64;

        /// Returns the gain of the camera in photoelectrons per A/D unit.
        #[http("electronsperadu", method = Get)]
        fn electrons_per_adu(&self) -> f64;

        /// Returns the maximum exposure time supported by StartExposure.
        #[http("exposuremax", method = Get)]
        fn exposure_max(&self) -> f64;

        /// Returns the minimum exposure time supported by StartExposure.
        #[http("exposuremin", method = Get)]
        fn exposure_min(&self) -> f64;

        /// Returns the smallest increment in exposure time supported by StartExposure.
        #[http("exposureresolution", method = Get)]
        fn exposure_resolution(&self) -> f64;

        /// Returns whether Fast Readout Mode is enabled.
        #[http("fastreadout", method = Get)]
        fn fast_readout(&self) -> bool;

        /// Sets whether Fast Readout Mode is enabled.
        #[http("fastreadout", method = Put)]
        fn set_fast_readout(&self, #[http("FastReadout")] fast_readout: bool);

        /// Reports the full well capacity of the camera in electrons, at the current camera settings (binning, SetupDialog settings, etc.).
        #[http("fullwellcapacity", method = Get)]
        fn full_well_capacity(&self) -> f64;

        /// Returns the camera's gain (GAIN VALUE MODE) OR the index of the selected camera gain description in the Gains array (GAINS INDEX MODE).
        #[http("gain", method = Get)]
        fn gain(&self) -> i32;

        /// Sets the camera's gain (GAIN VALUE MODE) OR the index of the selected camera gain description in the Gains array (GAINS INDEX MODE).
        #[http("gain", method = Put)]
        fn set_gain(&self, #[http("Gain")] gain: i32);

        /// Returns the maximum value of Gain.
        #[http("gainmax", method = Get)]
        fn gain_max(&self) -> i32;

        /// Returns the minimum value of Gain.
        #[http("gainmin", method = Get)]
        fn gain_min(&self) -> i32;

        /// Returns a flag indicating whether this camera has a mechanical shutter.
        #[http("hasshutter", method = Get)]
        fn has_shutter(&self) -> bool;

        /// Returns the current heat sink temperature (called "ambient temperature" by some manufacturers) in degrees Celsius.
        #[http("heatsinktemperature", method = Get)]
        fn heat_sink_temperature(&self) -> f64;

        /// Returns a flag indicating whether the image is ready to be downloaded from the camera.
        #[http("imageready", method = Get)]
        fn image_ready(&self) -> bool;

        /// Returns a flag indicating whether the camera is currently in a PulseGuide operation.
        #[http("ispulseguiding", method = Get)]
        fn is_pulse_guiding(&self) -> bool;

        /// Reports the actual exposure duration in seconds (i.e. shutter open time).
        #[http("lastexposureduration", method = Get)]
        fn last_exposure_duration(&self) -> f64;

        /// Reports the actual exposure start in the FITS-standard CCYY-MM-DDThh:mm:ss[.sss...] format.
        #[http("lastexposurestarttime", method = Get)]
        fn last_exposure_start_time(&self) -> String;

        /// Reports the maximum ADU value the camera can produce.
        #[http("maxadu", method = Get)]
        fn max_adu(&self) -> i32;

        /// Returns the maximum allowed binning for the X camera axis.
        #[http("maxbinx", method = Get)]
        fn max_bin_x(&self) -> i32;

        /// Returns the maximum allowed binning for the Y camera axis.
        #[http("maxbiny", method = Get)]
        fn max_bin_y(&self) -> i32;

        /// Returns the current subframe width, if binning is active, value is in binned pixels.
        #[http("numx", method = Get)]
        fn num_x(&self) -> i32;

        /// Sets the current subframe width.
        #[http("numx", method = Put)]
        fn set_num_x(&self, #[http("NumX")] num_x: i32);

        /// Returns the current subframe height, if binning is active, value is in binned pixels.
        #[http("numy", method = Get)]
        fn num_y(&self) -> i32;

        /// Sets the current subframe height.
        #[http("numy", method = Put)]
        fn set_num_y(&self, #[http("NumY")] num_y: i32);

        /// Returns the camera's offset (OFFSET VALUE MODE) OR the index of the selected camera offset description in the offsets array (OFFSETS INDEX MODE).
        #[http("offset", method = Get)]
        fn offset(&self) -> i32;

        /// Sets the camera's offset (OFFSET VALUE MODE) OR the index of the selected camera offset description in the offsets array (OFFSETS INDEX MODE).
        #[http("offset", method = Put)]
        fn set_offset(&self, #[http("Offset")] offset: i32);

        /// Returns the maximum value of offset.
        #[http("offsetmax", method = Get)]
        fn offset_max(&self) -> i32;

        /// Returns the Minimum value of offset.
        #[http("offsetmin", method = Get)]
        fn offset_min(&self) -> i32;

        /// Returns the percentage of the current operation that is complete.
        #[http("percentcompleted", method = Get)]
        fn percent_completed(&self) -> i32;

        /// Returns the width of the CCD chip pixels in microns.
        #[http("pixelsizex", method = Get)]
        fn pixel_size_x(&self) -> f64;

        /// Returns the height of the CCD chip pixels in microns.
        #[http("pixelsizey", method = Get)]
        fn pixel_size_y(&self) -> f64;

        /// ReadoutMode is an index into the array ReadoutModes and returns the desired readout mode for the camera.
        #[http("readoutmode", method = Get)]
        fn readout_mode(&self) -> i32;

        /// Sets the ReadoutMode as an index into the array ReadoutModes.
        #[http("readoutmode", method = Put)]
        fn set_readout_mode(&self, #[http("ReadoutMode")] readout_mode: i32);

        /// The name of the sensor used within the camera.
        #[http("sensorname", method = Get)]
        fn sensor_name(&self) -> String;

        /// Returns a value indicating whether the sensor is monochrome, or what Bayer matrix it encodes.
        ///
        /// 0 = Monochrome, 1 = Color, 2 = RGGB, 3 = CMYG, 4 = CMYG2, 5 = LRGB.
        #[http("sensortype", method = Get)]
        fn sensor_type(&self) -> i32;

        /// Returns the current camera cooler setpoint in degrees Celsius.
        #[http("setccdtemperature", method = Get)]
        fn set_ccd_temperature(&self) -> f64;

        /// Set the camera's cooler setpoint (degrees Celsius).
        #[http("setccdtemperature", method = Put)]
        fn set_set_ccd_temperature(&self, #[http("SetCCDTemperature")] set_ccd_temperature: f64);

        /// Returns the current subframe start position for the X axis (0 based), in binned pixels.
        #[http("startx", method = Get)]
        fn start_x(&self) -> i32;

        /// Sets the current subframe X axis start position in binned pixels.
        #[http("startx", method = Put)]
        fn set_start_x(&self, #[http("StartX")] start_x: i32);

        /// Returns the current subframe start position for the Y axis (0 based), in binned pixels.
        #[http("starty", method = Get)]
        fn start_y(&self) -> i32;

        /// Sets the current subframe Y axis start position in binned pixels.
        #[http("starty", method = Put)]
        fn set_start_y(&self, #[http("StartY")] start_y: i32);

        /// The Camera's sub exposure duration in seconds.
        ///
        /// _ICameraV3 and later._
        #[http("subexposureduration", method = Get)]
        fn sub_exposure_duration(&self) -> f64;

        /// Sets image sub exposure duration in seconds.
        ///
        /// _ICameraV3 and later._
        #[http("subexposureduration", method = Put)]
        fn set_sub_exposure_duration(&self, #[http("SubExposureDuration")] sub_exposure_duration: f64);

        /// Aborts the current exposure, if any, and returns the camera to Idle state.
        #[http("abortexposure", method = Put)]
        fn abort_exposure(&self);

        /// Activates the Camera's mount control system to instruct the mount to move in a particular direction for a given period of time.
        ///
        /// Direction: 0 = North, 1 = South, 2 = East, 3 = West. Duration is in milliseconds.
        #[http("pulseguide", method = Put)]
        fn pulse_guide(&self, #[http("Direction")] direction: i32, #[http("Duration")] duration: i32);

        /// Starts an exposure. Use ImageReady to check when the exposure is complete.
        ///
        /// Duration is in seconds; `light` is false for dark frames.
        #[http("startexposure", method = Put)]
        fn start_exposure(&self, #[http("Duration")] duration: f64, #[http("Light")] light: bool);

        /// Stops the current exposure, if any.
        ///
        /// If an exposure is in progress, the readout process is initiated. Ignored if readout is already in process.
        #[http("stopexposure", method = Put)]
        fn stop_exposure(&self);
    }
}

#[cfg(test)]
mod tests {
    use crate::test::{MockResponse, MockServer};

    #[tokio::test]
    async fn reads_sensor_geometry_as_typed_values() -> eyre::Result<()> {
        let server = MockServer::start(|request| match request.action() {
            "cameraxsize" => MockResponse::ok(request, 4144),
            "pixelsizex" => MockResponse::ok(request, 4.63),
            "canabortexposure" => MockResponse::ok(request, true),
            "sensorname" => MockResponse::ok(request, "IMX294"),
            _ => MockResponse::rest_error(400, "unknown action"),
        })
        .await?;
        let camera = server.client(65535).camera(0);

        assert_eq!(camera.camera_x_size().await?, 4144);
        assert!((camera.pixel_size_x().await? - 4.63).abs() < f64::EPSILON);
        assert!(camera.can_abort_exposure().await?);
        assert_eq!(camera.sensor_name().await?, "IMX294");
        assert_eq!(camera.client().error_number(), 0);

        let requests = server.requests();
        assert_eq!(requests[0].path, "/api/v1/camera/0/cameraxsize");
        assert!(requests.iter().all(|request| request.method == "GET"));
        Ok(())
    }

    #[tokio::test]
    async fn start_exposure_sends_duration_and_light() -> eyre::Result<()> {
        let server = MockServer::start(|request| MockResponse::ok(request, ())).await?;
        let client = server.client(1);

        client.camera(1).start_exposure(2.5, false).await?;

        let request = server.last_request()?;
        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/api/v1/camera/1/startexposure");
        assert_eq!(request.param("Duration"), Some("2.5"));
        assert_eq!(request.param("Light"), Some("false"));
        assert_eq!(request.param("ClientTransactionID"), Some("1"));
        assert_eq!(client.transaction_id(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn not_connected_camera_reports_device_error() -> eyre::Result<()> {
        let server = MockServer::start(|request| {
            MockResponse::device_error(request, 0x407, "Camera is not connected")
        })
        .await?;
        let camera = server.client(1).camera(0);

        assert!(camera.ccd_temperature().await?.abs() < f64::EPSILON);
        assert_eq!(camera.client().error_number(), 0x407);
        assert_eq!(camera.client().error_message(), "Camera is not connected");
        Ok(())
    }
}
