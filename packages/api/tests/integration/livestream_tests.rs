use api::livestream::server;
use api::test_utils::TestContext;

#[tokio::test]
async fn test_no_stream_until_configured() {
    let ctx = TestContext::new().await;
    assert_eq!(server::get(&ctx.pool).await.unwrap(), None);
}

#[tokio::test]
async fn test_set_replaces_the_single_record() {
    let ctx = TestContext::new().await;

    server::set(&ctx.pool, "Sunday mass", "https://www.youtube.com/embed/a", false)
        .await
        .unwrap();
    let second = server::set(&ctx.pool, "Feast mass", "https://www.youtube.com/embed/b", true)
        .await
        .unwrap();

    let current = server::get(&ctx.pool).await.unwrap();
    assert_eq!(current, Some(second));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM livestreams")
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_set_rejects_non_http_urls() {
    let ctx = TestContext::new().await;

    let err = server::set(&ctx.pool, "Mass", "javascript:alert(1)", true)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("embed_url"));
    assert_eq!(server::get(&ctx.pool).await.unwrap(), None);
}
