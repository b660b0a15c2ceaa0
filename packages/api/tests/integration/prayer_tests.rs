use api::prayers::server;
use api::types::PrayerStatus;
use api::test_utils::TestContext;

#[tokio::test]
async fn test_submit_trims_and_defaults() {
    let ctx = TestContext::new().await;

    let prayer = server::submit(&ctx.pool, "  Mary ", "", " Pray for my family ", false)
        .await
        .expect("Submit should succeed");
    assert_eq!(prayer.name, "Mary");
    assert_eq!(prayer.email, None);
    assert_eq!(prayer.request, "Pray for my family");
    assert_eq!(prayer.status, PrayerStatus::Open);
}

#[tokio::test]
async fn test_submit_validates_input() {
    let ctx = TestContext::new().await;

    let err = server::submit(&ctx.pool, " ", "", "request", false)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "name is required");

    let err = server::submit(&ctx.pool, "Mary", "not-an-email", "request", false)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "email is not a valid address");

    let long = "x".repeat(5_001);
    assert!(server::submit(&ctx.pool, "Mary", "", &long, false).await.is_err());
}

#[tokio::test]
async fn test_public_list_hides_private_requests_and_emails() {
    let ctx = TestContext::new().await;

    let public = server::submit(&ctx.pool, "Mary", "mary@example.org", "For peace", false)
        .await
        .unwrap();
    server::submit(&ctx.pool, "John", "john@example.org", "Private matter", true)
        .await
        .unwrap();

    let listed = server::list_public(&ctx.pool, 50).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, public.id);
    assert_eq!(listed[0].email, None);

    let all = server::list_all(&ctx.pool, 50).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|p| p.email.as_deref() == Some("john@example.org")));
}

#[tokio::test]
async fn test_lists_are_newest_first_and_limited() {
    let ctx = TestContext::new().await;
    for i in 0..3 {
        server::submit(&ctx.pool, "Mary", "", &format!("request {i}"), false)
            .await
            .unwrap();
    }

    let listed = server::list_public(&ctx.pool, 2).await.unwrap();
    let requests: Vec<&str> = listed.iter().map(|p| p.request.as_str()).collect();
    assert_eq!(requests, ["request 2", "request 1"]);

    // Non-positive limits are clamped to one row rather than rejected.
    assert_eq!(server::list_public(&ctx.pool, 0).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_mark_prayed_and_delete() {
    let ctx = TestContext::new().await;
    let prayer = server::submit(&ctx.pool, "Mary", "", "For healing", false)
        .await
        .unwrap();

    let updated = server::set_status(&ctx.pool, prayer.id, PrayerStatus::Prayed)
        .await
        .unwrap();
    assert_eq!(updated.status, PrayerStatus::Prayed);
    assert_eq!(updated.created_at, prayer.created_at);

    server::delete(&ctx.pool, prayer.id).await.unwrap();
    assert!(server::get(&ctx.pool, prayer.id).await.unwrap().is_none());

    let err = server::delete(&ctx.pool, prayer.id).await.unwrap_err();
    assert_eq!(err.to_string(), "Prayer request not found");
}
