use super::*;
use crate::opaque_params;
use crate::test::{MockResponse, MockServer};
use std::collections::BTreeSet;
use std::sync::Arc;

#[test]
fn domain_wins_over_ip_and_port() {
    for secure in [false, true] {
        let scheme = if secure { "https" } else { "http" };
        for port in [UNUSED_PORT, 0, 443, 8000] {
            assert_eq!(
                resolve_url_base(secure, "alpaca.observerly.com", "10.0.0.2", port),
                format!("{scheme}://alpaca.observerly.com")
            );
        }
    }
}

#[test]
fn ip_gets_port_unless_unused() {
    assert_eq!(
        resolve_url_base(false, "", "192.168.1.89", 11111),
        "http://192.168.1.89:11111"
    );
    assert_eq!(
        resolve_url_base(true, "", "192.168.1.89", 0),
        "https://192.168.1.89:0"
    );
    assert_eq!(
        resolve_url_base(false, "", "192.168.1.89", UNUSED_PORT),
        "http://192.168.1.89"
    );
    assert_eq!(resolve_url_base(true, "", "", UNUSED_PORT), "https://");
}

#[test]
fn new_client_for_bare_ip() {
    let client = AlpacaClient::new(65535, false, "", "0.0.0.0", 8000);

    assert_eq!(client.url_base(), "http://0.0.0.0:8000");
    assert_eq!(client.client_id(), 65535);
    assert_eq!(client.transaction_id(), 0);
    assert_eq!(client.last_error(), LastError::None);
}

#[test]
fn new_client_for_secure_domain() {
    let client = AlpacaClient::new(65535, true, "alpaca.observerly.com", "", UNUSED_PORT)
        .with_transaction_id(100);

    assert_eq!(client.url_base(), "https://alpaca.observerly.com");
    assert_eq!(client.transaction_id(), 100);
    assert_eq!(
        client.build_url(DeviceType::Telescope, 0, "connected"),
        "https://alpaca.observerly.com/api/v1/telescope/0/connected"
    );
}

#[test]
fn build_url_uses_lowercase_device_paths() {
    let client = AlpacaClient::new(1, false, "", "127.0.0.1", 11111);

    assert_eq!(
        client.build_url(DeviceType::ObservingConditions, 2, "cloudcover"),
        "http://127.0.0.1:11111/api/v1/observingconditions/2/cloudcover"
    );
    assert_eq!(
        client.build_url(DeviceType::CoverCalibrator, 0, "brightness"),
        "http://127.0.0.1:11111/api/v1/covercalibrator/0/brightness"
    );
}

#[test]
fn from_config_applies_identity_and_seed() -> eyre::Result<()> {
    let config: ClientConfig = serde_json::from_str(
        r#"{ "client_id": 42, "domain": "alpaca.example.org", "secure": true, "transaction_id": 7, "timeout_secs": 5 }"#,
    )?;
    let client = AlpacaClient::from_config(&config)?;

    assert_eq!(client.client_id(), 42);
    assert_eq!(client.url_base(), "https://alpaca.example.org");
    assert_eq!(client.transaction_id(), 7);
    Ok(())
}

#[tokio::test]
async fn get_sends_current_transaction_id_without_incrementing() -> eyre::Result<()> {
    let server = MockServer::start(|request| MockResponse::ok(request, true)).await?;
    let client = server.client_with_seed(65535, 5);

    assert!(
        client
            .get_bool_response(DeviceType::Dome, 0, "connected")
            .await?
    );

    let request = server.last_request()?;
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/v1/dome/0/connected");
    assert_eq!(request.param("ClientID"), Some("65535"));
    assert_eq!(request.param("ClientTransactionID"), Some("5"));
    assert_eq!(request.accept.as_deref(), Some("application/json"));
    assert_eq!(client.transaction_id(), 5);
    Ok(())
}

#[tokio::test]
async fn put_sends_incremented_transaction_id() -> eyre::Result<()> {
    let server = MockServer::start(|request| MockResponse::ok(request, ())).await?;
    let client = server.client_with_seed(65535, 5);

    client
        .device(DeviceType::Camera, 0)
        .set_connected(true)
        .await?;

    let request = server.last_request()?;
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/v1/camera/0/connected");
    assert_eq!(
        request.params,
        [
            ("ClientID".to_owned(), "65535".to_owned()),
            ("ClientTransactionID".to_owned(), "6".to_owned()),
            ("Connected".to_owned(), "true".to_owned()),
        ]
    );
    assert_eq!(client.transaction_id(), 6);
    Ok(())
}

#[tokio::test]
async fn transaction_id_counts_only_puts() -> eyre::Result<()> {
    let server = MockServer::start(|request| match (request.method.as_str(), request.action()) {
        ("GET", "connected") => MockResponse::ok(request, true),
        ("GET", "description") => MockResponse::ok(request, "Power box"),
        _ => MockResponse::ok(request, ()),
    })
    .await?;
    let client = server.client_with_seed(1, 10);
    let device = client.device(DeviceType::Switch, 0);

    device.set_connected(true).await?;
    let _: bool = device.connected().await?;
    let _: String = device.description().await?;
    device.set_connected(false).await?;
    let _: bool = device.connected().await?;
    device
        .exec::<()>(Method::Put, "setswitch", &opaque_params! { Id: 0_i32, State: true })
        .await?;

    assert_eq!(client.transaction_id(), 13);

    let sent = server
        .requests()
        .iter()
        .map(|request| {
            (
                request.method.clone(),
                request.param("ClientTransactionID").map(ToOwned::to_owned),
            )
        })
        .collect::<Vec<_>>();
    let expected = [
        ("PUT", "11"),
        ("GET", "11"),
        ("GET", "11"),
        ("PUT", "12"),
        ("GET", "12"),
        ("PUT", "13"),
    ]
    .map(|(method, id)| (method.to_owned(), Some(id.to_owned())));
    assert_eq!(sent, expected);
    Ok(())
}

#[tokio::test]
async fn typed_paths_decode_each_shape() -> eyre::Result<()> {
    let server = MockServer::start(|request| match request.action() {
        "bool" => MockResponse::ok(request, true),
        "int" => MockResponse::ok(request, 42),
        "float" => MockResponse::ok(request, 3.25),
        _ => MockResponse::ok(request, "x"),
    })
    .await?;
    let client = server.client(1);

    assert!(
        client
            .get_bool_response(DeviceType::Switch, 0, "bool")
            .await?
    );
    assert_eq!(
        client.get_i32_response(DeviceType::Switch, 0, "int").await?,
        42
    );
    let float = client
        .get_f64_response(DeviceType::Switch, 0, "float")
        .await?;
    assert!((float - 3.25).abs() < f64::EPSILON);
    assert_eq!(
        client
            .get_string_response(DeviceType::Switch, 0, "string")
            .await?,
        "x"
    );
    assert!(!client.last_error().is_err());
    Ok(())
}

#[tokio::test]
async fn rest_errors_set_side_channel_and_return_zero() -> eyre::Result<()> {
    let server = MockServer::start(|request| match request.action() {
        "badrequest" => MockResponse::rest_error(400, "Invalid device number"),
        _ => MockResponse::rest_error(500, "Driver crashed"),
    })
    .await?;
    let client = server.client(1);

    let value = client
        .get_i32_response(DeviceType::Camera, 9, "badrequest")
        .await?;
    assert_eq!(value, 0);
    assert_eq!(client.error_number(), 400);
    assert_eq!(client.error_message(), "Invalid device number");

    let value = client
        .get_string_response(DeviceType::Camera, 0, "sensorname")
        .await?;
    assert_eq!(value, "");
    assert_eq!(
        client.last_error(),
        LastError::Rest {
            status: 500,
            body: "Driver crashed".to_owned(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn rest_error_on_command_still_consumes_transaction_id() -> eyre::Result<()> {
    let server = MockServer::start(|_| MockResponse::rest_error(500, "Driver crashed")).await?;
    let client = server.client_with_seed(1, 20);

    client
        .put::<()>(DeviceType::Dome, 0, "slewtoazimuth", &opaque_params! { Azimuth: 90.0 })
        .await?;

    assert_eq!(
        client.last_error(),
        LastError::Rest {
            status: 500,
            body: "Driver crashed".to_owned(),
        }
    );
    assert_eq!(client.transaction_id(), 21);
    assert_eq!(
        server.last_request()?.param("ClientTransactionID"),
        Some("21")
    );
    Ok(())
}

#[tokio::test]
async fn device_errors_are_recorded() -> eyre::Result<()> {
    let server = MockServer::start(|request| {
        MockResponse::device_error(request, 0x407, "Not connected")
    })
    .await?;
    let client = server.client(1);

    assert!(
        !client
            .get_bool_response(DeviceType::Focuser, 0, "ismoving")
            .await?
    );
    assert_eq!(
        client.last_error(),
        LastError::Device(ASCOMError::new(
            crate::ASCOMErrorCode::NOT_CONNECTED,
            "Not connected"
        ))
    );
    assert_eq!(client.error_number(), 0x407);
    Ok(())
}

#[tokio::test]
async fn device_errors_keep_codes_outside_reserved_range() -> eyre::Result<()> {
    let server = MockServer::start(|request| match request.action() {
        "hresult" => MockResponse::device_error(request, -2_147_220_473, "COM failure"),
        _ => MockResponse::device_error(request, 70000, "Vendor failure"),
    })
    .await?;
    let client = server.client(1);

    assert!(
        !client
            .get_bool_response(DeviceType::Telescope, 0, "hresult")
            .await?
    );
    assert_eq!(client.error_number(), -2_147_220_473);
    assert_eq!(client.error_message(), "COM failure");

    let value = client
        .get_i32_response(DeviceType::Telescope, 0, "vendor")
        .await?;
    assert_eq!(value, 0);
    assert_eq!(client.error_number(), 70000);
    Ok(())
}

#[tokio::test]
async fn device_error_with_null_value_is_recorded() -> eyre::Result<()> {
    let server = MockServer::start(|_| {
        MockResponse::raw(
            200,
            Some("application/json"),
            r#"{"ClientTransactionID":0,"ErrorNumber":1031,"ErrorMessage":"Not connected","Value":null}"#
                .to_owned(),
        )
    })
    .await?;
    let client = server.client(1);

    assert!(
        !client
            .get_bool_response(DeviceType::Focuser, 0, "ismoving")
            .await?
    );
    assert_eq!(
        client.last_error(),
        LastError::Device(ASCOMError::new(
            crate::ASCOMErrorCode::NOT_CONNECTED,
            "Not connected"
        ))
    );
    Ok(())
}

#[tokio::test]
async fn success_clears_previous_error() -> eyre::Result<()> {
    let server = MockServer::start(|request| match request.action() {
        "fail" => MockResponse::rest_error(400, "nope"),
        _ => MockResponse::ok(request, 1.5),
    })
    .await?;
    let client = server.client(1);

    let _: f64 = client
        .get_f64_response(DeviceType::Dome, 0, "fail")
        .await?;
    assert_eq!(client.error_number(), 400);

    let _: f64 = client
        .get_f64_response(DeviceType::Dome, 0, "azimuth")
        .await?;
    assert_eq!(client.last_error(), LastError::None);
    assert_eq!(client.error_message(), "");
    Ok(())
}

#[tokio::test]
async fn malformed_responses_are_transport_errors() -> eyre::Result<()> {
    let server = MockServer::start(|request| match request.action() {
        "html" => MockResponse::raw(200, Some("text/html"), "<html></html>".to_owned()),
        "untyped" => MockResponse::raw(200, None, "{}".to_owned()),
        "garbage" => MockResponse::raw(200, Some("application/json"), "{".to_owned()),
        "wrongshape" => MockResponse::ok(request, "yes"),
        _ => MockResponse::rest_error(400, "earlier failure"),
    })
    .await?;
    let client = server.client(1);

    let _: bool = client
        .get_bool_response(DeviceType::Camera, 0, "earlier")
        .await?;
    let recorded = client.last_error();

    for action in ["html", "untyped", "garbage", "wrongshape"] {
        let result = client.get_bool_response(DeviceType::Camera, 0, action).await;
        assert!(result.is_err(), "{action} should fail");
        assert_eq!(client.last_error(), recorded);
    }
    Ok(())
}

#[tokio::test]
async fn connection_failure_is_returned_and_leaves_error_fields() -> eyre::Result<()> {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };
    let client = AlpacaClient::new(1, false, "", "127.0.0.1", i32::from(port));

    let err = client
        .get_f64_response(DeviceType::ObservingConditions, 0, "humidity")
        .await
        .expect_err("nothing listens on the port");
    assert!(format!("{err:?}").contains("Failed to send Alpaca request"));
    assert_eq!(client.last_error(), LastError::None);
    assert_eq!(client.error_number(), 0);
    Ok(())
}

#[tokio::test]
async fn missing_value_decodes_to_zero() -> eyre::Result<()> {
    let server = MockServer::start(|_| {
        MockResponse::raw(
            200,
            Some("application/json"),
            r#"{"ErrorNumber":0,"ErrorMessage":""}"#.to_owned(),
        )
    })
    .await?;
    let client = server.client(1);

    assert_eq!(
        client.get_i32_response(DeviceType::Switch, 0, "maxswitch").await?,
        0
    );
    assert!(!client.last_error().is_err());
    Ok(())
}

#[tokio::test]
async fn mismatched_transaction_echo_is_tolerated() -> eyre::Result<()> {
    let server = MockServer::start(|_| {
        MockResponse::raw(
            200,
            Some("application/json"),
            r#"{"ClientTransactionID":999,"ServerTransactionID":1,"ErrorNumber":0,"ErrorMessage":"","Value":"Dome"}"#
                .to_owned(),
        )
    })
    .await?;
    let client = server.client(1);

    assert_eq!(
        client.get_string_response(DeviceType::Dome, 0, "name").await?,
        "Dome"
    );
    Ok(())
}

#[tokio::test]
async fn call_reports_every_failure_kind() -> eyre::Result<()> {
    let server = MockServer::start(|request| match request.action() {
        "rest" => MockResponse::rest_error(400, "bad"),
        "device" => MockResponse::device_error(request, 0x400, "Not implemented"),
        "html" => MockResponse::raw(200, Some("text/html"), String::new()),
        _ => MockResponse::ok(request, 12),
    })
    .await?;
    let client = server.client(1);
    let device = client.device(DeviceType::Rotator, 0);
    let params = OpaqueParams::new();

    assert_eq!(device.call::<i32>(Method::Get, "position", &params).await?, 12);

    match device.call::<i32>(Method::Get, "rest", &params).await {
        Err(CallError::Rest { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, "bad");
        }
        other => eyre::bail!("unexpected outcome {other:?}"),
    }

    match device.call::<()>(Method::Put, "device", &params).await {
        Err(CallError::Device(error)) => {
            assert_eq!(error.code, crate::ASCOMErrorCode::NOT_IMPLEMENTED);
            assert_eq!(error.message, "Not implemented");
        }
        other => eyre::bail!("unexpected outcome {other:?}"),
    }

    assert!(matches!(
        device.call::<i32>(Method::Get, "html", &params).await,
        Err(CallError::Transport(_))
    ));
    assert_eq!(client.error_number(), 0x400);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_commands_get_unique_transaction_ids() -> eyre::Result<()> {
    let server = MockServer::start(|request| MockResponse::ok(request, ())).await?;
    let client = server.client(1);

    let tasks = (0..16)
        .map(|_| {
            let device = client.device(DeviceType::Dome, 0);
            tokio::spawn(async move { device.exec::<()>(Method::Put, "park", &OpaqueParams::new()).await })
        })
        .collect::<Vec<_>>();
    for task in tasks {
        task.await??;
    }

    let sent = server
        .requests()
        .iter()
        .filter_map(|request| request.param("ClientTransactionID")?.parse::<u32>().ok())
        .collect::<BTreeSet<_>>();
    assert_eq!(sent, (1..=16).collect::<BTreeSet<_>>());
    assert_eq!(client.transaction_id(), 16);
    Ok(())
}

#[tokio::test]
async fn shared_client_across_devices() -> eyre::Result<()> {
    let server = MockServer::start(|request| MockResponse::ok(request, ())).await?;
    let client = server.client(1);

    client.device(DeviceType::Dome, 0).set_connected(true).await?;
    client.device(DeviceType::Camera, 1).set_connected(true).await?;

    assert_eq!(client.transaction_id(), 2);
    assert_eq!(Arc::strong_count(&client), 1);
    Ok(())
}
