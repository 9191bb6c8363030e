//! Integration tests for `PgQuestionRepository`.

use chrono::{Duration, TimeZone, Utc};
use polls_core::error::DomainError;
use polls_core::repository::{NewQuestion, QuestionRepository};
use polls_store::pg_question_repository::PgQuestionRepository;
use sqlx::PgPool;

fn new_question(text: &str, days: i64) -> NewQuestion {
    let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
    NewQuestion {
        question_text: text.to_owned(),
        pub_date: now + Duration::days(days),
    }
}

// --- create_question + find_question ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_and_find_question(pool: PgPool) {
    let repo = PgQuestionRepository::new(pool);

    let created = repo
        .create_question(&new_question("What's up?", -1))
        .await
        .unwrap();
    let loaded = repo.find_question(created.id).await.unwrap();

    assert_eq!(loaded, Some(created));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_question_returns_none_for_unknown_id(pool: PgPool) {
    let repo = PgQuestionRepository::new(pool);

    assert_eq!(repo.find_question(12345).await.unwrap(), None);
}

// --- published_questions ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_published_questions_excludes_future_and_orders_desc(pool: PgPool) {
    let repo = PgQuestionRepository::new(pool);
    let as_of = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
    repo.create_question(&new_question("Past Question 2.", -101))
        .await
        .unwrap();
    repo.create_question(&new_question("Future Question.", 30))
        .await
        .unwrap();
    repo.create_question(&new_question("Past Question 1.", -30))
        .await
        .unwrap();

    let published = repo.published_questions(as_of, None).await.unwrap();
    let texts: Vec<&str> = published.iter().map(|q| q.question_text.as_str()).collect();
    assert_eq!(texts, vec!["Past Question 1.", "Past Question 2."]);

    let limited = repo.published_questions(as_of, Some(1)).await.unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].question_text, "Past Question 1.");
}

// --- choices and votes ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_add_choice_to_unknown_question_is_not_found(pool: PgPool) {
    let repo = PgQuestionRepository::new(pool);

    let result = repo.add_choice(999, "Yes").await;

    assert!(matches!(result, Err(DomainError::QuestionNotFound(999))));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_record_vote_increments_only_matching_choice(pool: PgPool) {
    let repo = PgQuestionRepository::new(pool);
    let first = repo
        .create_question(&new_question("First.", -1))
        .await
        .unwrap();
    let second = repo
        .create_question(&new_question("Second.", -1))
        .await
        .unwrap();
    let choice = repo.add_choice(first.id, "Yes").await.unwrap();

    assert_eq!(repo.record_vote(second.id, choice.id).await.unwrap(), None);
    let voted = repo.record_vote(first.id, choice.id).await.unwrap().unwrap();
    assert_eq!(voted.votes, 1);

    let choices = repo.choices_for(first.id).await.unwrap();
    assert_eq!(choices, vec![voted]);
}
