use alpaca_client::{AlpacaClient, ClientConfig};
use std::sync::Arc;

// Usage: observing-conditions [CONFIG_JSON]
// e.g. observing-conditions '{"ip": "127.0.0.1", "port": 32323}'
#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str::<ClientConfig>(&json)?,
        None => ClientConfig {
            ip: "127.0.0.1".to_owned(),
            port: 32323,
            timeout_secs: Some(5),
            ..ClientConfig::default()
        },
    };

    let client = Arc::new(AlpacaClient::from_config(&config)?);
    let conditions = client.observing_conditions(0);

    conditions.set_connected(true).await?;
    println!("Connected to {}", conditions.description().await?);

    let readings = [
        ("Cloud cover (%)", conditions.cloud_cover().await?, client.last_error()),
        ("Dew point (°C)", conditions.dew_point().await?, client.last_error()),
        ("Humidity (%)", conditions.humidity().await?, client.last_error()),
        ("Pressure (hPa)", conditions.pressure().await?, client.last_error()),
        ("Temperature (°C)", conditions.temperature().await?, client.last_error()),
        ("Wind speed (m/s)", conditions.wind_speed().await?, client.last_error()),
    ];

    for (label, value, error) in readings {
        if error.is_err() {
            println!("{label}: unavailable ({} {})", error.number(), error.message());
        } else {
            println!("{label}: {value}");
        }
    }

    conditions.set_connected(false).await?;
    Ok(())
}
