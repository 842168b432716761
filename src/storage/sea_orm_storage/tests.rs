//! 存储层集成测试
//!
//! 跑在内存 SQLite 上，先执行全部迁移再操作，
//! 顺带保证实体定义与迁移脚本的列保持一致。

use super::SeaOrmStorage;
use crate::models::attempts::requests::AttemptListQuery;
use crate::models::categories::defaults::CONFIG_KEY_SUBJECTS;
use crate::models::doubts::{entities::DoubtStatus, requests::SubmitDoubtRequest};
use crate::models::progress::requests::ProgressListQuery;
use crate::models::questions::{entities::Difficulty, requests::CreateQuestionRequest};
use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::models::videos::requests::CreateVideoRequest;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

async fn memory_storage() -> SeaOrmStorage {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    SeaOrmStorage { db }
}

async fn seed_user(storage: &SeaOrmStorage, username: &str) -> i64 {
    storage
        .create_user_impl(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "not-a-real-hash".to_string(),
            role: UserRole::Admin,
            profile_name: None,
            avatar_url: None,
        })
        .await
        .expect("create user")
        .id
}

async fn seed_video(storage: &SeaOrmStorage, created_by: i64) -> i64 {
    storage
        .create_video_impl(
            CreateVideoRequest {
                youtube_url: "https://youtube.com/watch?v=abc123".to_string(),
                title: None,
                description: None,
                thumbnail: None,
                class_level: "11".to_string(),
                subject: "PHYSICS".to_string(),
                chapter: None,
                topic: None,
            },
            "abc123".to_string(),
            "Kinematics intro".to_string(),
            "https://img.youtube.com/vi/abc123/maxresdefault.jpg".to_string(),
            created_by,
        )
        .await
        .expect("create video")
        .id
}

fn sample_question() -> CreateQuestionRequest {
    CreateQuestionRequest {
        question_text: "What is $2+2$?".to_string(),
        question_image: Some("https://example.com/q.png".to_string()),
        options: vec!["3".to_string(), "4".to_string()],
        correct_answer: 1,
        explanation: None,
        class_level: "7".to_string(),
        subject: "MATHEMATICS".to_string(),
        chapter: "Algebra".to_string(),
        topic: "Addition".to_string(),
        difficulty: Difficulty::Easy,
    }
}

#[tokio::test]
async fn test_create_video_records_creator() {
    let storage = memory_storage().await;
    let admin_id = seed_user(&storage, "admin_a").await;

    let video_id = seed_video(&storage, admin_id).await;
    let video = storage
        .get_video_by_id_impl(video_id)
        .await
        .expect("query video")
        .expect("video exists");

    assert_eq!(video.created_by, admin_id);
    assert_eq!(
        video.thumbnail,
        "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
    );
}

#[tokio::test]
async fn test_create_question_records_creator_and_image() {
    let storage = memory_storage().await;
    let admin_id = seed_user(&storage, "admin_b").await;

    let question = storage
        .create_question_impl(sample_question(), admin_id)
        .await
        .expect("create question");

    assert_eq!(question.created_by, admin_id);
    assert_eq!(
        question.question_image.as_deref(),
        Some("https://example.com/q.png")
    );
}

#[tokio::test]
async fn test_attempt_round_trip_keeps_time_taken() {
    let storage = memory_storage().await;
    let user_id = seed_user(&storage, "student_a").await;
    let question = storage
        .create_question_impl(sample_question(), user_id)
        .await
        .expect("create question");

    storage
        .create_attempt_impl(user_id, question.id, 1, true, Some(42))
        .await
        .expect("create attempt");

    let attempts = storage
        .list_attempts_by_user_impl(user_id, AttemptListQuery::default())
        .await
        .expect("list attempts");

    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].time_taken, Some(42));
    assert!(attempts[0].is_correct);
}

#[tokio::test]
async fn test_doubt_lifecycle() {
    let storage = memory_storage().await;
    let user_id = seed_user(&storage, "student_b").await;

    let doubt = storage
        .create_doubt_impl(
            user_id,
            SubmitDoubtRequest {
                title: "Confused about limits".to_string(),
                description: "Why does $1/x$ diverge at 0?".to_string(),
                question_id: None,
                video_id: None,
            },
        )
        .await
        .expect("create doubt");

    assert_eq!(doubt.status, DoubtStatus::Pending);
    assert!(doubt.response.is_none());

    let answered = storage
        .respond_doubt_impl(doubt.id, "See the one-sided limits.".to_string(), DoubtStatus::Resolved)
        .await
        .expect("respond doubt")
        .expect("doubt exists");

    assert_eq!(answered.status, DoubtStatus::Resolved);
    assert_eq!(answered.response.as_deref(), Some("See the one-sided limits."));
    assert!(answered.responded_at.is_some());
    assert!(answered.updated_at >= answered.created_at);
}

#[tokio::test]
async fn test_mark_watched_idempotent() {
    let storage = memory_storage().await;
    let user_id = seed_user(&storage, "student_c").await;
    let video_id = seed_video(&storage, user_id).await;

    storage
        .mark_video_watched_impl(user_id, video_id)
        .await
        .expect("first mark");
    storage
        .mark_video_watched_impl(user_id, video_id)
        .await
        .expect("second mark");

    let progress = storage
        .list_progress_by_user_impl(user_id, ProgressListQuery::default())
        .await
        .expect("list progress");

    assert_eq!(progress.len(), 1);
    assert!(progress[0].completed);
}

#[tokio::test]
async fn test_platform_config_round_trip() {
    let storage = memory_storage().await;

    let values = vec!["MATHEMATICS".to_string(), "PHYSICS".to_string()];
    storage
        .set_platform_config_impl(CONFIG_KEY_SUBJECTS, values.clone())
        .await
        .expect("set config");

    let stored = storage
        .get_platform_config_impl(CONFIG_KEY_SUBJECTS)
        .await
        .expect("get config");

    assert_eq!(stored, Some(values));
}

#[tokio::test]
async fn test_replace_chapters_is_full_replace() {
    let storage = memory_storage().await;

    storage
        .replace_chapters_impl("PHYSICS", vec!["Optics".to_string(), "Waves".to_string()])
        .await
        .expect("first replace");

    let replaced = storage
        .replace_chapters_impl("PHYSICS", vec!["Mechanics".to_string()])
        .await
        .expect("second replace");

    assert_eq!(replaced.len(), 1);
    assert_eq!(replaced[0].name, "Mechanics");

    let names: Vec<String> = storage
        .list_chapters_impl()
        .await
        .expect("list chapters")
        .into_iter()
        .filter(|c| c.subject == "PHYSICS")
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Mechanics".to_string()]);
}
