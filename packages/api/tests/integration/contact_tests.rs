use api::contact::server;
use api::test_utils::{TestContext, TEST_CONTACT_INBOX};

#[tokio::test]
async fn test_submit_stores_and_notifies_inbox() {
    let ctx = TestContext::new().await;

    let stored = server::submit(
        &ctx.state,
        "Mary",
        "mary@example.org",
        "Mass timings",
        "When is the Tamil mass?",
    )
    .await
    .expect("Submit should succeed");

    let listed = server::list(&ctx.pool, 10).await.unwrap();
    assert_eq!(listed, vec![stored]);

    let sent = ctx.email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, TEST_CONTACT_INBOX);
    assert_eq!(sent[0].reply_to.as_deref(), Some("mary@example.org"));
    assert!(sent[0].subject.contains("Mass timings"));
    assert!(sent[0].text.contains("When is the Tamil mass?"));
}

#[tokio::test]
async fn test_failed_notification_does_not_fail_submission() {
    let ctx = TestContext::new().await;
    ctx.email.fail_sends(true);

    server::submit(&ctx.state, "Mary", "mary@example.org", "Hello", "Message")
        .await
        .expect("Submit should succeed even when email fails");

    assert_eq!(server::list(&ctx.pool, 10).await.unwrap().len(), 1);
    assert!(ctx.email.sent().is_empty());
}

#[tokio::test]
async fn test_submit_requires_valid_email() {
    let ctx = TestContext::new().await;

    let err = server::submit(&ctx.state, "Mary", "", "Hello", "Message")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "email is required");
    assert!(server::list(&ctx.pool, 10).await.unwrap().is_empty());
    assert!(ctx.email.sent().is_empty());
}
