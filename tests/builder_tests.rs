use std::time::Duration;

use panel_client::{ApiError, PanelClient};

#[test]
fn test_config_error() {
    // Builder-time validation: an unparseable base URL, a non-http scheme,
    // and a missing API key all fail before any network I/O.
    let err = PanelClient::builder()
        .base_url("invalid-url")
        .api_key("ptla_key")
        .build()
        .unwrap_err();
    match err {
        ApiError::ConfigurationError(msg) => assert!(msg.contains("Invalid base URL")),
        other => panic!("Expected ConfigurationError for invalid URL, got {other:?}"),
    }

    let err = PanelClient::builder()
        .base_url("ftp://panel.example.com")
        .api_key("ptla_key")
        .build()
        .unwrap_err();
    match err {
        ApiError::ConfigurationError(msg) => assert!(msg.contains("expected an http(s) URL")),
        other => panic!("Expected ConfigurationError for scheme, got {other:?}"),
    }

    let err = PanelClient::builder()
        .base_url("https://panel.example.com")
        .build()
        .unwrap_err();
    match err {
        ApiError::ConfigurationError(msg) => assert_eq!(msg, "API key is required"),
        other => panic!("Expected ConfigurationError for missing key, got {other:?}"),
    }
}

#[test]
fn test_builder_rejects_empty_values() {
    for base_url in ["", "   "] {
        let err = PanelClient::builder()
            .base_url(base_url)
            .api_key("ptla_key")
            .build()
            .unwrap_err();
        match err {
            ApiError::ConfigurationError(msg) => assert_eq!(msg, "Base URL is required"),
            other => panic!("Expected ConfigurationError for base URL, got {other:?}"),
        }
    }

    for api_key in ["", "   "] {
        let err = PanelClient::builder()
            .base_url("https://panel.example.com")
            .api_key(api_key)
            .build()
            .unwrap_err();
        match err {
            ApiError::ConfigurationError(msg) => assert_eq!(msg, "API key is required"),
            other => panic!("Expected ConfigurationError for API key, got {other:?}"),
        }
    }
}

#[test]
fn test_builder_rejects_key_with_control_characters() {
    // What it tests: A key that cannot be rendered as a header value is a
    // configuration error, not a header injection.
    let err = PanelClient::builder()
        .base_url("https://panel.example.com")
        .api_key("ptla_key\nX-Injected: 1")
        .build()
        .unwrap_err();
    assert!(matches!(err, ApiError::ConfigurationError(_)));
}

#[test]
fn test_builder_accepts_full_configuration() {
    let client = PanelClient::builder()
        .base_url("https://panel.example.com/")
        .api_key("ptla_key")
        .timeout(Duration::from_secs(5))
        .user_agent("inventory/1.0")
        .accept_invalid_certs(true)
        .build()
        .unwrap();

    assert_eq!(client.base_url().as_str(), "https://panel.example.com/");
}

#[test]
fn test_api_key_from_env() {
    // What it tests: The key can come from an environment variable, and a
    // missing variable names itself in the configuration error.
    std::env::set_var("PANEL_CLIENT_TEST_KEY", "ptla_from_env");
    let client = PanelClient::builder()
        .base_url("https://panel.example.com")
        .api_key_from_env("PANEL_CLIENT_TEST_KEY")
        .unwrap()
        .build();
    assert!(client.is_ok());

    let err = PanelClient::builder()
        .api_key_from_env("PANEL_CLIENT_TEST_KEY_THAT_IS_NOT_SET")
        .unwrap_err();
    match err {
        ApiError::ConfigurationError(msg) => {
            assert!(msg.contains("PANEL_CLIENT_TEST_KEY_THAT_IS_NOT_SET"))
        }
        other => panic!("Expected ConfigurationError, got {other:?}"),
    }
}

#[cfg(feature = "default-client")]
#[test]
fn test_process_wide_instance() {
    // The only test in this binary touching the shared instance.
    assert!(matches!(
        panel_client::instance(),
        Err(ApiError::ConfigurationError(_))
    ));

    let client = PanelClient::builder()
        .base_url("https://panel.example.com")
        .api_key("ptla_key")
        .build()
        .unwrap();
    panel_client::initialize(client);

    let shared = panel_client::instance().unwrap();
    assert_eq!(shared.base_url().as_str(), "https://panel.example.com/");
}
