//! Tests for the error types.

use ecobee_auth::auth::AuthError;
use ecobee_auth::error::EcobeeError;
use pretty_assertions::assert_eq;

#[test]
fn rejection_message_carries_status_and_body() {
    let err = AuthError::AuthorizationRejected {
        status: 401,
        body: "Unauthorized".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to refresh access token: 401 Unauthorized"
    );
}

#[test]
fn only_transport_failures_are_retryable() {
    let network = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();

    let cases = vec![
        (AuthError::from(network), true),
        (AuthError::Timeout(30_000), true),
        (
            AuthError::AuthorizationRejected {
                status: 500,
                body: String::new(),
            },
            false,
        ),
        (AuthError::MissingSessionCookie, false),
        (AuthError::TokenNotFound, false),
        (AuthError::ExpiryNotFound, false),
        (AuthError::InvalidExpiry("x".to_string()), false),
        (AuthError::NotImplemented("stub".to_string()), false),
    ];

    for (error, retryable) in cases {
        assert_eq!(error.is_retryable(), retryable, "{error}");
    }
}

#[test]
fn crate_error_wraps_auth_error_transparently() {
    let err: EcobeeError = AuthError::TokenNotFound.into();
    assert_eq!(
        err.to_string(),
        "Failed to refresh bearer token: no access token in response"
    );
    assert!(!err.is_retryable());
    assert!(EcobeeError::from(AuthError::Timeout(5)).is_retryable());
}

#[test]
fn configuration_error_display() {
    let err = EcobeeError::Configuration("No auth0 session cookie configured".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: No auth0 session cookie configured"
    );
}
