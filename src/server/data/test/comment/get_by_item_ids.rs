use super::*;

/// Tests loading comments for several items at once.
///
/// Expected: Ok with comments of the requested item only, oldest first
#[tokio::test]
async fn returns_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = create_item_with_booker(db).await?;
    let other_item = factory::item::create_item(db, owner.id).await?;
    let newer = CommentFactory::new(db, item.id, booker.id)
        .created(hours_from_now(-1))
        .build()
        .await?;
    let older = CommentFactory::new(db, item.id, booker.id)
        .created(hours_from_now(-2))
        .build()
        .await?;
    factory::comment::create_comment(db, other_item.id, booker.id).await?;

    let comments = CommentRepository::new(db)
        .get_by_item_ids(vec![item.id])
        .await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);
    assert!(comments.iter().all(|c| c.author_name == booker.name));

    Ok(())
}
