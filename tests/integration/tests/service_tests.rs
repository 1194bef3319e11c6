//! Service Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test service_tests

use accounts_core::{DomainError, UserId};
use accounts_service::{IssueTokenRequest, RegisterUserRequest, UpdateUserRequest};
use chrono::Duration;
use integration_tests::{check_test_env, connect, fixtures::*, Created};

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_get_user() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await.expect("Failed to connect");
    let mut created = Created::default();

    let request = unique_registration();
    let user = ctx.users().register(request.clone()).await.unwrap();
    created.users.push(user.id);

    assert_eq!(user.first_name, request.first_name);
    assert_eq!(Some(user.joined_at), request.joined_at);
    assert!(user.is_active);
    assert_eq!(ctx.users().get(user.id).await.unwrap(), user);

    created.cleanup(&ctx).await;
}

#[tokio::test]
async fn test_register_rejects_empty_name() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await.expect("Failed to connect");
    let err = ctx
        .users()
        .register(RegisterUserRequest::new("", "User"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_and_deactivate_user() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await.expect("Failed to connect");
    let mut created = Created::default();
    let users = ctx.users();

    let user = users.register(unique_registration()).await.unwrap();
    created.users.push(user.id);

    let updated = users
        .update(
            user.id,
            UpdateUserRequest {
                last_name: Some("Renamed".to_string()),
                ..UpdateUserRequest::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.last_name, "Renamed");

    let inactive = users.deactivate(user.id).await.unwrap();
    assert!(!inactive.is_active);
    assert!(users
        .list(true)
        .await
        .unwrap()
        .iter()
        .all(|u| u.id != user.id));

    created.cleanup(&ctx).await;
}

// ============================================================================
// Token Tests
// ============================================================================

#[tokio::test]
async fn test_issue_and_consume_token() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await.expect("Failed to connect");
    let mut created = Created::default();

    let user = ctx.users().register(unique_registration()).await.unwrap();
    created.users.push(user.id);

    let token = ctx
        .tokens()
        .issue(unique_token_request(user.id))
        .await
        .unwrap();
    created.tokens.push(token.id);
    assert!(token.used_at.is_none());

    let used_at = token.created_at + Duration::seconds(5);
    let used = ctx.tokens().consume(token.id, Some(used_at)).await.unwrap();
    assert_eq!(used.used_at, Some(used_at));

    let err = ctx.tokens().consume(token.id, None).await.unwrap_err();
    assert!(matches!(
        err.as_domain(),
        Some(DomainError::TokenAlreadyUsed(_))
    ));
    assert_eq!(
        ctx.tokens().get(token.id).await.unwrap().used_at,
        Some(used_at)
    );

    created.cleanup(&ctx).await;
}

#[tokio::test]
async fn test_issue_generates_code() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await.expect("Failed to connect");
    let mut created = Created::default();

    let user = ctx.users().register(unique_registration()).await.unwrap();
    created.users.push(user.id);

    let token = ctx
        .tokens()
        .issue(IssueTokenRequest::new(user.id))
        .await
        .unwrap();
    created.tokens.push(token.id);

    assert_eq!(token.token.len(), 6);
    assert!(token.token.chars().all(|c| c.is_ascii_digit()));

    created.cleanup(&ctx).await;
}

#[tokio::test]
async fn test_issue_for_unknown_user() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await.expect("Failed to connect");
    let err = ctx
        .tokens()
        .issue(IssueTokenRequest::new(UserId::new(i64::MAX)))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.error_code(), "UNKNOWN_USER");
}

#[tokio::test]
async fn test_redeem_token() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await.expect("Failed to connect");
    let mut created = Created::default();

    let user = ctx.users().register(unique_registration()).await.unwrap();
    created.users.push(user.id);

    let request = unique_token_request(user.id);
    let code = request.token.clone().unwrap();
    let token = ctx.tokens().issue(request).await.unwrap();
    created.tokens.push(token.id);

    let redeemed = ctx.tokens().redeem(user.id, &code).await.unwrap();
    assert_eq!(redeemed.id, token.id);
    assert!(redeemed.is_used());

    assert!(ctx
        .tokens()
        .redeem(user.id, &code)
        .await
        .unwrap_err()
        .is_not_found());

    created.cleanup(&ctx).await;
}

#[tokio::test]
async fn test_user_deletion_keeps_tokens() {
    if !check_test_env() {
        return;
    }

    let ctx = connect().await.expect("Failed to connect");
    let mut created = Created::default();

    let user = ctx.users().register(unique_registration()).await.unwrap();
    let token = ctx
        .tokens()
        .issue(unique_token_request(user.id))
        .await
        .unwrap();
    created.tokens.push(token.id);

    ctx.users().delete(user.id).await.unwrap();

    assert!(ctx.users().get(user.id).await.unwrap_err().is_not_found());
    assert_eq!(ctx.tokens().get(token.id).await.unwrap(), token);

    created.cleanup(&ctx).await;
}
