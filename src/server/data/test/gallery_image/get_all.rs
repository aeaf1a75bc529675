use super::*;

/// Tests gallery ordering.
///
/// Verifies that images are sorted by display order, and that newer
/// uploads come first among images sharing an order.
///
/// Expected: Ok in display order
#[tokio::test]
async fn orders_by_order_then_newest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let last = factory::gallery_image::GalleryImageFactory::new(db)
        .order(2)
        .build()
        .await?;
    let older = factory::gallery_image::GalleryImageFactory::new(db)
        .order(1)
        .uploaded_at(now - Duration::days(3))
        .build()
        .await?;
    let newer = factory::gallery_image::GalleryImageFactory::new(db)
        .order(1)
        .uploaded_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = GalleryImageRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|i| i.id).collect();

    assert_eq!(ids, vec![newer.id, older.id, last.id]);

    Ok(())
}
