use crate::ApiError;

use cr_auth::AuthError;
use cr_onboarding::OnboardingError;
use cr_store::{StoreError, StoreOperation};

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "pick one".into(),
        field: Some("new_company".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "new_company");
    assert!(json["error"].get("user_persisted").is_none());
}

#[tokio::test]
async fn test_unavailable_store_returns_503_with_operation() {
    let error = ApiError::from(StoreError::unavailable(
        StoreOperation::ListCompanies,
        "connection refused",
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "STORE_UNAVAILABLE");
    assert_eq!(json["error"]["operation"], "list_companies");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("connection refused")
    );
}

#[tokio::test]
async fn test_rejected_store_returns_502() {
    let error = ApiError::from(StoreError::rejected(
        StoreOperation::InsertCompany,
        409,
        "23505",
        "duplicate key",
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "STORE_REJECTED");
}

#[tokio::test]
async fn test_save_failed_after_user_write_returns_partial_save() {
    let error = ApiError::from(OnboardingError::save_failed(
        StoreOperation::InsertMemberships,
        StoreError::unavailable(StoreOperation::InsertMemberships, "timeout"),
        true,
        Some(true),
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "PARTIAL_SAVE");
    assert_eq!(json["error"]["operation"], "insert_memberships");
    assert_eq!(json["error"]["user_persisted"], true);
    assert_eq!(json["error"]["memberships_restored"], true);
}

#[tokio::test]
async fn test_partial_save_with_untouched_memberships_serializes_null() {
    let error = ApiError::from(OnboardingError::save_failed(
        StoreOperation::InsertCompany,
        StoreError::unavailable(StoreOperation::InsertCompany, "timeout"),
        true,
        None,
    ));

    let (_, json) = body_json(error).await;

    assert_eq!(json["error"]["code"], "PARTIAL_SAVE");
    assert!(json["error"]["memberships_restored"].is_null());
    assert!(json["error"].get("memberships_restored").is_some());
}

#[tokio::test]
async fn test_save_failed_before_user_write_maps_by_store_error() {
    let error = ApiError::from(OnboardingError::save_failed(
        StoreOperation::UpsertUser,
        StoreError::unavailable(StoreOperation::UpsertUser, "timeout"),
        false,
        None,
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "STORE_UNAVAILABLE");
    assert_eq!(json["error"]["operation"], "upsert_user");
}

#[tokio::test]
async fn test_expired_token_returns_401() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_invalid_login_payload_returns_400_with_field() {
    let error = ApiError::from(AuthError::InvalidLogin {
        field: "hash".into(),
        message: "hash is required".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["field"], "hash");
}
