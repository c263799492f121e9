use super::*;

/// Tests storing a submission with its rewards.
///
/// Expected: Ok with the rewards read back unchanged
#[tokio::test]
async fn stores_rewards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rewards = SubmissionRewards {
        total_levels: 4,
        total_coins: 200,
        trainers: vec![TrainerReward {
            trainer_id: 1,
            levels: 4,
            coins: 200,
            is_owned: true,
        }],
        bonus: BonusRolls {
            boss_damage: 4,
            ..Default::default()
        },
        ..Default::default()
    };

    let repo = SubmissionRepository::new(db);
    let submission = repo
        .create("player-1", SubmissionKind::Art, "Beach day".to_string(), rewards.clone())
        .await?;

    assert_eq!(submission.kind, SubmissionKind::Art);
    assert_eq!(submission.title, "Beach day");

    let stored = repo.get_by_id(submission.id).await?.unwrap();
    assert_eq!(stored.rewards, rewards);

    Ok(())
}
