use super::*;

/// Tests storing a contact message.
///
/// Verifies that the message is inserted as given, including an email that is not a
/// valid address, and stamped with the supplied time.
///
/// Expected: Ok with the new id
#[tokio::test]
async fn stores_message_as_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    let repo = ContactMessageRepository::new(db);
    let id = repo
        .create(
            CreateContactMessageParams {
                name: "Dana".to_string(),
                email: "not-an-email".to_string(),
                subject: "Broken link".to_string(),
                message: "The download for Pixel Dungeon returns 404.".to_string(),
            },
            now,
        )
        .await?;

    let stored = ContactMessage::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(stored.email, "not-an-email");
    assert_eq!(stored.subject, "Broken link");
    assert_eq!(stored.created_at, now);

    Ok(())
}
