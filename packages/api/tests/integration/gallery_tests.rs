use api::gallery::server;
use api::test_utils::TestContext;

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[tokio::test]
async fn test_upload_stores_file_and_row() {
    let ctx = TestContext::new().await;

    let image = server::upload(&ctx.state, " Christmas crib ", "image/png", PNG_BYTES.to_vec())
        .await
        .expect("Upload should succeed");
    assert_eq!(image.caption, "Christmas crib");
    assert_eq!(image.byte_size, PNG_BYTES.len() as i64);
    assert_eq!(image.url, format!("/uploads/gallery/{}.png", image.id));

    let on_disk = ctx.uploads_path.join(format!("gallery/{}.png", image.id));
    assert_eq!(std::fs::read(on_disk).unwrap(), PNG_BYTES);

    let listed = server::list(&ctx.pool, 10).await.unwrap();
    assert_eq!(listed, vec![image]);
}

#[tokio::test]
async fn test_upload_rejects_non_images_empty_and_oversized_files() {
    let ctx = TestContext::new().await;

    let err = server::upload(&ctx.state, "", "text/html", b"<html>".to_vec())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("images"));

    let err = server::upload(&ctx.state, "", "image/png", Vec::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "The image is empty");

    let too_big = vec![0u8; server::MAX_IMAGE_BYTES + 1];
    assert!(server::upload(&ctx.state, "", "image/jpeg", too_big).await.is_err());

    assert!(server::list(&ctx.pool, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_removes_file_and_row() {
    let ctx = TestContext::new().await;
    let image = server::upload(&ctx.state, "", "image/png", PNG_BYTES.to_vec())
        .await
        .unwrap();
    let on_disk = ctx.uploads_path.join(format!("gallery/{}.png", image.id));
    assert!(on_disk.exists());

    server::delete(&ctx.state, image.id).await.unwrap();
    assert!(!on_disk.exists());
    assert!(server::list(&ctx.pool, 10).await.unwrap().is_empty());

    let err = server::delete(&ctx.state, image.id).await.unwrap_err();
    assert_eq!(err.to_string(), "Gallery image not found");
}

#[tokio::test]
async fn test_delete_drops_row_even_when_file_removal_fails() {
    let ctx = TestContext::new().await;
    let image = server::upload(&ctx.state, "", "image/png", PNG_BYTES.to_vec())
        .await
        .unwrap();

    // A directory where the file was makes removal fail with something other than NotFound.
    let on_disk = ctx.uploads_path.join(format!("gallery/{}.png", image.id));
    std::fs::remove_file(&on_disk).unwrap();
    std::fs::create_dir(&on_disk).unwrap();

    server::delete(&ctx.state, image.id)
        .await
        .expect("Row removal should not depend on the file");
    assert!(server::list(&ctx.pool, 10).await.unwrap().is_empty());
    assert!(on_disk.is_dir());
}
