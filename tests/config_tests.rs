//! Integration tests for client configuration.
//!
//! These tests cover construction of [`NamelyConfig`] and [`NamelyClient`]
//! from required and optional settings, and the errors raised when the
//! required credentials are missing.

use namely::{ApiVersion, ConfigError, HostUrl, NamelyClient, NamelyConfig};

const TOKEN: &str = "1abcdefghijklmnoqrstuvyxz2";

// ============================================================================
// Required Options
// ============================================================================

#[test]
fn test_config_with_required_options() {
    let config = NamelyConfig::builder()
        .access_token(TOKEN)
        .company_name("testing")
        .build()
        .unwrap();

    assert_eq!(config.access_token().as_ref(), TOKEN);
    assert_eq!(config.company_name().as_ref(), "testing");
}

#[test]
fn test_config_defaults_for_omitted_options() {
    let config = NamelyConfig::builder()
        .access_token(TOKEN)
        .company_name("testing")
        .build()
        .unwrap();

    assert_eq!(config.api_version(), &ApiVersion::V1);
    assert!(config.hide_salary());
    assert!(config.api_host().is_none());
    assert_eq!(config.base_url(), "https://testing.namely.com/api/v1");
}

// ============================================================================
// All Options
// ============================================================================

#[test]
fn test_config_with_all_options() {
    let config = NamelyConfig::builder()
        .access_token(TOKEN)
        .company_name("testing")
        .api_version("v2".parse().unwrap())
        .hide_salary(false)
        .user_agent_prefix("payroll-sync/3.1")
        .build()
        .unwrap();

    assert_eq!(config.api_version().as_str(), "v2");
    assert!(!config.hide_salary());
    assert_eq!(config.user_agent_prefix(), Some("payroll-sync/3.1"));
    assert_eq!(config.base_url(), "https://testing.namely.com/api/v2");
}

#[test]
fn test_client_exposes_config_base_url() {
    let config = NamelyConfig::builder()
        .access_token(TOKEN)
        .company_name("testing")
        .api_version("v2".parse().unwrap())
        .build()
        .unwrap();

    let client = NamelyClient::new(config).unwrap();
    assert_eq!(client.base_url(), "https://testing.namely.com/api/v2");
}

#[test]
fn test_api_host_override_replaces_company_host() {
    let config = NamelyConfig::builder()
        .access_token(TOKEN)
        .company_name("testing")
        .api_host(HostUrl::new("http://localhost:4010/").unwrap())
        .build()
        .unwrap();

    assert_eq!(config.base_url(), "http://localhost:4010/api/v1");
    assert_eq!(config.company_name().host(), "testing.namely.com");
}

#[test]
fn test_api_host_with_query_is_rejected() {
    let result = HostUrl::new("http://localhost:4010?token=x");
    assert!(matches!(result, Err(ConfigError::InvalidHostUrl { .. })));
}

// ============================================================================
// Missing Credentials
// ============================================================================

#[test]
fn test_missing_access_token_fails() {
    let result = NamelyConfig::builder().company_name("testing").build();

    let error = result.unwrap_err();
    assert_eq!(error, ConfigError::MissingAccessToken);
    assert_eq!(
        error.to_string(),
        "Namely must be initialized with an access token"
    );
}

#[test]
fn test_missing_company_name_fails() {
    let result = NamelyConfig::builder().access_token(TOKEN).build();

    let error = result.unwrap_err();
    assert_eq!(error, ConfigError::MissingCompanyName);
    assert_eq!(
        error.to_string(),
        "Namely must be initialized with a company name"
    );
}

#[test]
fn test_missing_both_reports_access_token_first() {
    let result = NamelyConfig::builder().build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingAccessToken);
}

#[test]
fn test_empty_credentials_are_missing() {
    let result = NamelyConfig::builder()
        .access_token("")
        .company_name("testing")
        .build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingAccessToken);

    let result = NamelyConfig::builder()
        .access_token(TOKEN)
        .company_name("")
        .build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingCompanyName);
}

// ============================================================================
// Versions
// ============================================================================

#[test]
fn test_invalid_api_version_is_rejected() {
    let result = "v1/profiles".parse::<ApiVersion>();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidApiVersion { version }) if version == "v1/profiles"
    ));
}

#[test]
fn test_unreleased_version_passes_through() {
    let config = NamelyConfig::builder()
        .access_token(TOKEN)
        .company_name("testing")
        .api_version("v1beta".parse().unwrap())
        .build()
        .unwrap();

    assert_eq!(config.base_url(), "https://testing.namely.com/api/v1beta");
}

#[test]
fn test_config_is_clone_send_sync() {
    fn assert_traits<T: Clone + Send + Sync>() {}
    assert_traits::<NamelyConfig>();
}
