use super::*;

/// Tests editing an image keeps its upload time.
///
/// Expected: Ok(Some) with new fields and the original `uploaded_at`
#[tokio::test]
async fn keeps_upload_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let image = factory::create_gallery_image(db).await?;

    let repo = GalleryImageRepository::new(db);
    let updated = repo
        .update(
            image.id,
            GalleryImageParams {
                title: "Final".to_string(),
                image: "gallery/final.jpg".to_string(),
                description: "Trophy ceremony".to_string(),
                order: 5,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.order, 5);
    assert_eq!(updated.uploaded_at, image.uploaded_at);

    Ok(())
}
