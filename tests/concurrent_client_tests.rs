use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

mod common;

use common::{
    bearer, charge_state_json, command_ok, setup_test_client, TEST_TOKEN, VEHICLE_ID,
};

#[tokio::test]
async fn test_concurrent_client_usage() -> Result<(), Box<dyn std::error::Error>> {
    // What it tests: Clones of one client issue reads and commands from many tasks at once; each
    // call is exactly one exchange carrying the shared default token.
    //
    // Why it's valuable: The client holds no per-request state, so concurrent use must neither
    // serialise nor coalesce requests.
    let charge_count = Arc::new(AtomicUsize::new(0));
    let charge_count_clone = Arc::clone(&charge_count);

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/1/vehicles/{VEHICLE_ID}/data_request/charge_state")))
        .and(header("authorization", bearer(TEST_TOKEN).as_str()))
        .respond_with(move |_: &Request| {
            charge_count_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200).set_body_json(json!({ "response": charge_state_json() }))
        })
        .expect(8)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/1/vehicles/{VEHICLE_ID}/command/flash_lights")))
        .and(header("authorization", bearer(TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(command_ok()))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    let mut reads = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        reads.push(tokio::spawn(async move {
            client.vehicle(VEHICLE_ID).charge_state().payload().await
        }));
    }

    let mut commands = Vec::new();
    for _ in 0..4 {
        let client = client.clone();
        commands.push(tokio::spawn(async move {
            client.vehicle(VEHICLE_ID).flash_lights().payload().await
        }));
    }

    for read in reads {
        let charge = read.await??;
        assert_eq!(charge.battery_level, 64);
    }
    for command in commands {
        assert!(command.await??.result);
    }

    assert_eq!(charge_count.load(Ordering::SeqCst), 8);

    Ok(())
}
