use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Barrier;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

mod common;

use common::{api_mock, list_json, server_json, setup_test_client, user_json};

#[tokio::test]
async fn test_concurrent_client_usage() -> Result<(), Box<dyn std::error::Error>> {
    let request_count = Arc::new(AtomicUsize::new(0));
    let request_count_clone = Arc::clone(&request_count);

    let mock_server = MockServer::start().await;

    api_mock(Mock::given(method("GET")), "servers/42")
        .respond_with(move |_: &Request| {
            request_count_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200).set_body_json(server_json(42, "Survival", "abc-123"))
        })
        .expect(4)
        .mount(&mock_server)
        .await;

    api_mock(Mock::given(method("GET")), "users")
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            vec![user_json(1, "admin")],
            1,
            50,
            1,
        )))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    // Start every task at once so the requests overlap.
    let barrier = Arc::new(Barrier::new(8));
    let mut tasks = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        let barrier = Arc::clone(&barrier);
        tasks.push(tokio::spawn(async move {
            barrier.wait().await;
            if i % 2 == 0 {
                client.servers().get(42).await.map(|s| s.attributes.id)
            } else {
                client.users().list().send().await.map(|u| u.len() as u64)
            }
        }));
    }

    for (i, task) in tasks.into_iter().enumerate() {
        let value = task.await??;
        if i % 2 == 0 {
            assert_eq!(value, 42);
        } else {
            assert_eq!(value, 1);
        }
    }

    assert_eq!(request_count.load(Ordering::SeqCst), 4);

    Ok(())
}
