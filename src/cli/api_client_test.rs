use crate::cli::api_client::ApiClient;

#[test]
fn test_new_with_explicit_url() {
    let client = ApiClient::new(Some("http://custom:8080".to_string()));
    assert_eq!(client.base_url(), "http://custom:8080");
}

#[test]
fn test_trailing_slash_is_trimmed() {
    let client = ApiClient::new(Some("http://custom:8080/".to_string()));
    assert_eq!(client.base_url(), "http://custom:8080");
}

#[test]
fn test_new_with_default() {
    let client = ApiClient::new(None);
    // Actual value depends on MENTORSHIP_API_URL if set
    assert!(!client.base_url().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_connection_failure() {
    let client = ApiClient::new(Some("http://127.0.0.1:1".to_string()));

    let err = client.get("/health").send().await.unwrap_err();
    let cli_err = crate::cli::error::CliError::from(err);

    assert!(matches!(
        cli_err,
        crate::cli::error::CliError::Unreachable { .. }
    ));
}
