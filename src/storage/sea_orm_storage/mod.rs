//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod analytics;
mod attempts;
mod categories;
mod doubts;
mod progress;
mod questions;
mod users;
mod videos;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{ElearnError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ElearnError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ElearnError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ElearnError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ElearnError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ElearnError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    analytics::responses::{PlatformAnalytics, StudentStats, StudentWithStats},
    attempts::{entities::QuestionAttempt, requests::AttemptListQuery},
    categories::entities::Chapter,
    doubts::{
        entities::{Doubt, DoubtStatus},
        requests::{DoubtListQuery, SubmitDoubtRequest},
    },
    progress::{entities::VideoProgress, requests::ProgressListQuery},
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, QuestionListQuery, UpdateQuestionRequest},
        responses::QuestionListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateProfileRequest},
    },
    videos::{
        entities::Video,
        requests::{CreateVideoRequest, UpdateVideoRequest, VideoListQuery},
        responses::VideoListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn update_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<User>> {
        self.update_profile_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 分类模块
    async fn get_platform_config(&self, key: &str) -> Result<Option<Vec<String>>> {
        self.get_platform_config_impl(key).await
    }

    async fn set_platform_config(&self, key: &str, values: Vec<String>) -> Result<()> {
        self.set_platform_config_impl(key, values).await
    }

    async fn list_chapters(&self) -> Result<Vec<Chapter>> {
        self.list_chapters_impl().await
    }

    async fn replace_chapters(&self, subject: &str, names: Vec<String>) -> Result<Vec<Chapter>> {
        self.replace_chapters_impl(subject, names).await
    }

    // 视频模块
    async fn create_video(
        &self,
        video: CreateVideoRequest,
        youtube_id: String,
        title: String,
        thumbnail: String,
        created_by: i64,
    ) -> Result<Video> {
        self.create_video_impl(video, youtube_id, title, thumbnail, created_by)
            .await
    }

    async fn get_video_by_id(&self, id: i64) -> Result<Option<Video>> {
        self.get_video_by_id_impl(id).await
    }

    async fn list_videos(&self, query: VideoListQuery) -> Result<VideoListResponse> {
        self.list_videos_impl(query).await
    }

    async fn update_video(
        &self,
        id: i64,
        update: UpdateVideoRequest,
        youtube_id: Option<String>,
    ) -> Result<Option<Video>> {
        self.update_video_impl(id, update, youtube_id).await
    }

    async fn delete_video(&self, id: i64) -> Result<bool> {
        self.delete_video_impl(id).await
    }

    // 题目模块
    async fn create_question(
        &self,
        question: CreateQuestionRequest,
        created_by: i64,
    ) -> Result<Question> {
        self.create_question_impl(question, created_by).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn list_questions(&self, query: QuestionListQuery) -> Result<QuestionListResponse> {
        self.list_questions_impl(query).await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    // 答题模块
    async fn create_attempt(
        &self,
        user_id: i64,
        question_id: i64,
        selected_answer: i32,
        is_correct: bool,
        time_taken: Option<i32>,
    ) -> Result<QuestionAttempt> {
        self.create_attempt_impl(user_id, question_id, selected_answer, is_correct, time_taken)
            .await
    }

    async fn list_attempts_by_user(
        &self,
        user_id: i64,
        query: AttemptListQuery,
    ) -> Result<Vec<QuestionAttempt>> {
        self.list_attempts_by_user_impl(user_id, query).await
    }

    // 观看进度模块
    async fn mark_video_watched(&self, user_id: i64, video_id: i64) -> Result<VideoProgress> {
        self.mark_video_watched_impl(user_id, video_id).await
    }

    async fn list_progress_by_user(
        &self,
        user_id: i64,
        query: ProgressListQuery,
    ) -> Result<Vec<VideoProgress>> {
        self.list_progress_by_user_impl(user_id, query).await
    }

    // 疑问模块
    async fn create_doubt(&self, user_id: i64, doubt: SubmitDoubtRequest) -> Result<Doubt> {
        self.create_doubt_impl(user_id, doubt).await
    }

    async fn list_doubts_by_user(&self, user_id: i64) -> Result<Vec<Doubt>> {
        self.list_doubts_by_user_impl(user_id).await
    }

    async fn list_all_doubts(&self, query: DoubtListQuery) -> Result<Vec<Doubt>> {
        self.list_all_doubts_impl(query).await
    }

    async fn get_doubt_by_id(&self, id: i64) -> Result<Option<Doubt>> {
        self.get_doubt_by_id_impl(id).await
    }

    async fn respond_doubt(
        &self,
        id: i64,
        response: String,
        status: DoubtStatus,
    ) -> Result<Option<Doubt>> {
        self.respond_doubt_impl(id, response, status).await
    }

    async fn delete_doubt(&self, id: i64) -> Result<bool> {
        self.delete_doubt_impl(id).await
    }

    // 统计模块
    async fn platform_analytics(&self) -> Result<PlatformAnalytics> {
        self.platform_analytics_impl().await
    }

    async fn student_stats(&self, user_id: i64) -> Result<StudentStats> {
        self.student_stats_impl(user_id).await
    }

    async fn list_students_with_stats(&self) -> Result<Vec<StudentWithStats>> {
        self.list_students_with_stats_impl().await
    }
}
