use api::announcements::server;
use api::test_utils::TestContext;
use time::macros::date;

#[tokio::test]
async fn test_create_and_list_newest_first() {
    let ctx = TestContext::new().await;

    server::create(&ctx.pool, "Older", "First news", "").await.unwrap();
    let newer = server::create(&ctx.pool, "Feast day", "Procession", "2024-12-29")
        .await
        .unwrap();
    assert_eq!(newer.event_date, Some(date!(2024 - 12 - 29)));

    let listed = server::list(&ctx.pool, 10).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], newer);
    assert_eq!(listed[1].title, "Older");
    assert_eq!(listed[1].event_date, None);
}

#[tokio::test]
async fn test_create_rejects_bad_dates_and_blank_fields() {
    let ctx = TestContext::new().await;

    let err = server::create(&ctx.pool, "Title", "Body", "29/12/2024")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("event_date"));
    assert!(server::create(&ctx.pool, "", "Body", "").await.is_err());
    assert!(server::list(&ctx.pool, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete() {
    let ctx = TestContext::new().await;
    let created = server::create(&ctx.pool, "Title", "Body", "").await.unwrap();

    server::delete(&ctx.pool, created.id).await.unwrap();
    assert!(server::list(&ctx.pool, 10).await.unwrap().is_empty());
    assert!(server::delete(&ctx.pool, created.id).await.is_err());
}

#[tokio::test]
async fn test_seed_fills_empty_database_once() {
    let ctx = TestContext::new().await;

    assert!(api::db::seed::seed_if_empty(&ctx.pool).await.unwrap());
    assert!(!api::db::seed::seed_if_empty(&ctx.pool).await.unwrap());

    assert_eq!(server::list(&ctx.pool, 10).await.unwrap().len(), 2);
    let stream = api::livestream::server::get(&ctx.pool).await.unwrap();
    assert!(stream.is_some_and(|s| !s.is_live));
}
