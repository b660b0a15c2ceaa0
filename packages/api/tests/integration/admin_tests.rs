use api::admin::server;
use api::config::AdminBootstrap;
use api::test_utils::{TestContext, TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME};

#[tokio::test]
async fn test_signin_and_require_admin() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let admin = server::require_admin(&ctx.state, &token)
        .await
        .expect("Token should be accepted");
    assert_eq!(admin.username, TEST_ADMIN_USERNAME);
}

#[tokio::test]
async fn test_signin_rejects_wrong_password_and_unknown_user() {
    let ctx = TestContext::new().await;
    ctx.admin_token().await;

    let err = server::signin(&ctx.state, TEST_ADMIN_USERNAME, "wrong-password")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid username or password");

    let err = server::signin(&ctx.state, "nobody", TEST_ADMIN_PASSWORD)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid username or password");
}

#[tokio::test]
async fn test_require_admin_rejects_bad_tokens() {
    let ctx = TestContext::new().await;
    assert!(server::require_admin(&ctx.state, "").await.is_err());
    assert!(server::require_admin(&ctx.state, "not.a.token").await.is_err());
}

#[tokio::test]
async fn test_token_for_deleted_admin_is_rejected() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    sqlx::query("DELETE FROM admins")
        .execute(&ctx.pool)
        .await
        .expect("Should delete admins");

    let err = server::require_admin(&ctx.state, &token).await.unwrap_err();
    assert_eq!(err.to_string(), "Not signed in");
}

#[tokio::test]
async fn test_bootstrap_only_runs_on_empty_table() {
    let ctx = TestContext::new().await;
    let first = AdminBootstrap {
        username: "rector".to_string(),
        password: "Str0ngPassword".to_string(),
    };
    let second = AdminBootstrap {
        username: "intruder".to_string(),
        password: "Str0ngPassword".to_string(),
    };

    assert!(server::bootstrap(&ctx.pool, &first).await.unwrap());
    assert!(!server::bootstrap(&ctx.pool, &second).await.unwrap());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert!(server::signin(&ctx.state, "rector", "Str0ngPassword").await.is_ok());
    assert!(server::signin(&ctx.state, "intruder", "Str0ngPassword").await.is_err());
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let ctx = TestContext::new().await;
    ctx.admin_token().await;

    let hash: String = sqlx::query_scalar("SELECT password_hash FROM admins WHERE username = $1")
        .bind(TEST_ADMIN_USERNAME)
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_ne!(hash, TEST_ADMIN_PASSWORD);
    assert!(hash.starts_with("$argon2"));
}
