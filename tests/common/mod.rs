use serde_json::{json, Value};
use wiremock::matchers::{header, path};
use wiremock::MockBuilder;

use panel_client::PanelClient;

pub const TEST_API_KEY: &str = "ptla_test-key";

#[allow(dead_code)]
/// Set up a test client pointed at the mock panel.
pub fn setup_test_client(mock_server_uri: &str) -> PanelClient {
    PanelClient::builder()
        .base_url(mock_server_uri)
        .api_key(TEST_API_KEY)
        .build()
        .expect("Failed to build PanelClient")
}

#[allow(dead_code)]
/// Full request path for an application API endpoint.
pub fn api_path(endpoint: &str) -> String {
    format!("/api/application/{endpoint}")
}

#[allow(dead_code)]
/// Matches the path plus the headers every application API request carries.
pub fn api_mock(mock: MockBuilder, endpoint: &str) -> MockBuilder {
    mock.and(path(api_path(endpoint)))
        .and(header("authorization", format!("Bearer {TEST_API_KEY}").as_str()))
        .and(header("accept", "application/json"))
}

#[allow(dead_code)]
pub fn server_json(id: u64, name: &str, uuid: &str) -> Value {
    json!({
        "object": "server",
        "attributes": {
            "id": id,
            "external_id": null,
            "uuid": uuid,
            "identifier": &uuid[..uuid.len().min(8)],
            "name": name,
            "description": "",
            "suspended": false,
            "limits": { "memory": 1024, "swap": 0, "disk": 4096, "io": 500, "cpu": 0, "threads": null },
            "feature_limits": { "databases": 1, "allocations": 1, "backups": 1 },
            "user": 1,
            "node": 1,
            "allocation": 17,
            "nest": 1,
            "egg": 5,
            "container": {
                "startup_command": "java -jar server.jar",
                "image": "quay.io/pterodactyl/core:java",
                "installed": true,
                "environment": { "SERVER_JARFILE": "server.jar" }
            },
            "updated_at": "2020-06-13T04:20:53+00:00",
            "created_at": "2019-12-23T06:46:27+00:00"
        }
    })
}

#[allow(dead_code)]
pub fn user_json(id: u64, username: &str) -> Value {
    json!({
        "object": "user",
        "attributes": {
            "id": id,
            "external_id": null,
            "uuid": format!("00000000-0000-0000-0000-{id:012}"),
            "username": username,
            "email": format!("{username}@example.com"),
            "first_name": "Test",
            "last_name": "User",
            "language": "en",
            "root_admin": false,
            "2fa": false,
            "created_at": "2020-03-07T14:22:25+00:00",
            "updated_at": "2020-03-07T14:22:25+00:00"
        }
    })
}

#[allow(dead_code)]
pub fn list_json(data: Vec<Value>, total: u64, per_page: u64, current_page: u32) -> Value {
    let total_pages = total.div_ceil(per_page.max(1)).max(1) as u32;
    let links = if current_page < total_pages {
        json!({ "next": format!("http://panel.test/api/application/things?page={}", current_page + 1) })
    } else {
        json!([])
    };
    json!({
        "object": "list",
        "data": data.clone(),
        "meta": {
            "pagination": {
                "total": total,
                "count": data.len(),
                "per_page": per_page,
                "current_page": current_page,
                "total_pages": total_pages,
                "links": links
            }
        }
    })
}
