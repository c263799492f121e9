use super::*;

/// Tests listing a player's submissions.
///
/// Expected: Ok with the player's submissions, newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubmissionRepository::new(db);
    let first = repo
        .create(
            "player-1",
            SubmissionKind::Writing,
            "Chapter 1".to_string(),
            SubmissionRewards::default(),
        )
        .await?;
    let second = repo
        .create(
            "player-1",
            SubmissionKind::Writing,
            "Chapter 2".to_string(),
            SubmissionRewards::default(),
        )
        .await?;
    repo.create(
        "player-2",
        SubmissionKind::Art,
        "Sketch".to_string(),
        SubmissionRewards::default(),
    )
    .await?;

    let submissions = repo.get_by_player("player-1").await?;

    let ids: Vec<i32> = submissions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
