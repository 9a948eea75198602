use super::*;
use test_utils::factory::item::ItemFactory;

/// Tests matching on name and description regardless of case.
///
/// Expected: Ok with both matching items
#[tokio::test]
async fn matches_name_or_description_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let by_name = ItemFactory::new(db, owner.id)
        .name("Power Drill")
        .description("Heavy")
        .build()
        .await?;
    let by_description = ItemFactory::new(db, owner.id)
        .name("Screwdriver")
        .description("Works like a DRILL")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Hammer")
        .description("Steel")
        .build()
        .await?;

    let items = ItemRepository::new(db).search("drill", None).await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![by_name.id, by_description.id]);

    Ok(())
}

/// Tests that unavailable items are excluded.
///
/// Expected: Ok with empty result
#[tokio::test]
async fn skips_unavailable_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    ItemFactory::new(db, owner.id)
        .name("Drill")
        .available(false)
        .build()
        .await?;

    let items = ItemRepository::new(db).search("drill", None).await?;

    assert!(items.is_empty());

    Ok(())
}

/// Tests case folding beyond ASCII.
///
/// Expected: Ok with the Cyrillic item for a lower-case query
#[tokio::test]
async fn matches_cyrillic_text_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let drill = ItemFactory::new(db, owner.id)
        .name("Дрель")
        .description("Аккумуляторная ДРЕЛЬ")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Молоток")
        .description("Стальной")
        .build()
        .await?;

    let items = ItemRepository::new(db).search("дрель", None).await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![drill.id]);

    Ok(())
}

/// Tests that paging applies to matching items only.
///
/// Expected: Ok with the second match
#[tokio::test]
async fn pages_over_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    ItemFactory::new(db, owner.id).name("Drill one").build().await?;
    ItemFactory::new(db, owner.id)
        .name("Hammer")
        .description("Steel")
        .build()
        .await?;
    let second = ItemFactory::new(db, owner.id).name("Drill two").build().await?;

    let items = ItemRepository::new(db)
        .search("drill", Some(Page { index: 1, size: 1 }))
        .await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![second.id]);

    Ok(())
}
