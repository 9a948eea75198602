use super::*;

#[tokio::test]
async fn creates_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_user(db).await?;
    let created = hours_from_now(0);

    let request = ItemRequestRepository::new(db)
        .create(
            CreateItemRequestParams {
                requester_id: requester.id,
                description: "Need a ladder".to_string(),
            },
            created,
        )
        .await?;

    assert!(request.id > 0);
    assert_eq!(request.requester_id, requester.id);
    assert_eq!(request.description, "Need a ladder");
    assert_eq!(request.created, created);

    Ok(())
}
