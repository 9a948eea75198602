use super::*;

/// Tests that a created comment carries its author's name.
///
/// Expected: Ok with author name resolved
#[tokio::test]
async fn creates_comment_with_author_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;

    let comment = CommentRepository::new(db)
        .create(
            CreateCommentParams {
                item_id: item.id,
                author_id: booker.id,
                text: "Great drill".to_string(),
            },
            now(),
        )
        .await?;

    assert!(comment.id > 0);
    assert_eq!(comment.text, "Great drill");
    assert_eq!(comment.author_name, booker.name);

    Ok(())
}
