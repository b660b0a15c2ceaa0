use api::test_utils::TestContext;
use api::testimonies::server;
use api::types::TestimonyStatus;

#[tokio::test]
async fn test_new_testimonies_wait_for_approval() {
    let ctx = TestContext::new().await;

    let testimony = server::submit(&ctx.pool, "Anthony", "Healed", "Thanks be to God")
        .await
        .expect("Submit should succeed");
    assert_eq!(testimony.status, TestimonyStatus::Pending);

    let public = server::list(&ctx.pool, Some(TestimonyStatus::Approved), 50)
        .await
        .unwrap();
    assert!(public.is_empty());

    let approved = server::set_status(&ctx.pool, testimony.id, TestimonyStatus::Approved)
        .await
        .unwrap();
    assert_eq!(approved.status, TestimonyStatus::Approved);

    let public = server::list(&ctx.pool, Some(TestimonyStatus::Approved), 50)
        .await
        .unwrap();
    assert_eq!(public, vec![approved]);
}

#[tokio::test]
async fn test_rejected_testimonies_stay_hidden() {
    let ctx = TestContext::new().await;
    let testimony = server::submit(&ctx.pool, "Anthony", "Title", "Body")
        .await
        .unwrap();
    server::set_status(&ctx.pool, testimony.id, TestimonyStatus::Rejected)
        .await
        .unwrap();

    let public = server::list(&ctx.pool, Some(TestimonyStatus::Approved), 50)
        .await
        .unwrap();
    assert!(public.is_empty());

    let all = server::list(&ctx.pool, None, 50).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, TestimonyStatus::Rejected);
}

#[tokio::test]
async fn test_submit_requires_every_field() {
    let ctx = TestContext::new().await;
    assert!(server::submit(&ctx.pool, "", "Title", "Body").await.is_err());
    assert!(server::submit(&ctx.pool, "Name", "", "Body").await.is_err());
    assert!(server::submit(&ctx.pool, "Name", "Title", "  ").await.is_err());
}

#[tokio::test]
async fn test_delete_and_missing_ids() {
    let ctx = TestContext::new().await;
    let testimony = server::submit(&ctx.pool, "Anthony", "Title", "Body")
        .await
        .unwrap();

    server::delete(&ctx.pool, testimony.id).await.unwrap();
    assert!(server::delete(&ctx.pool, testimony.id).await.is_err());
    assert!(
        server::set_status(&ctx.pool, testimony.id, TestimonyStatus::Approved)
            .await
            .is_err()
    );
}
