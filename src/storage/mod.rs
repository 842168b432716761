use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段应已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 统计用户总数
    async fn count_users(&self) -> Result<u64>;
    // 更新个人资料
    async fn update_profile(&self, id: i64, update: UpdateProfileRequest)
    -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 分类管理方法
    // 读取 platform_config 中的列表值
    async fn get_platform_config(&self, key: &str) -> Result<Option<Vec<String>>>;
    // 写入 platform_config 中的列表值
    async fn set_platform_config(&self, key: &str, values: Vec<String>) -> Result<()>;
    // 列出全部章节
    async fn list_chapters(&self) -> Result<Vec<Chapter>>;
    // 整体替换某学科的章节
    async fn replace_chapters(&self, subject: &str, names: Vec<String>) -> Result<Vec<Chapter>>;

    /// 视频管理方法
    // 创建视频（youtube_id、title、thumbnail 已由服务层解析，created_by 取自登录态）
    async fn create_video(
        &self,
        video: CreateVideoRequest,
        youtube_id: String,
        title: String,
        thumbnail: String,
        created_by: i64,
    ) -> Result<Video>;
    // 通过ID获取视频
    async fn get_video_by_id(&self, id: i64) -> Result<Option<Video>>;
    // 列出视频
    async fn list_videos(&self, query: VideoListQuery) -> Result<VideoListResponse>;
    // 更新视频
    async fn update_video(
        &self,
        id: i64,
        update: UpdateVideoRequest,
        youtube_id: Option<String>,
    ) -> Result<Option<Video>>;
    // 删除视频
    async fn delete_video(&self, id: i64) -> Result<bool>;

    /// 题目管理方法
    // 创建题目（created_by 取自登录态）
    async fn create_question(
        &self,
        question: CreateQuestionRequest,
        created_by: i64,
    ) -> Result<Question>;
    // 通过ID获取题目
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    // 列出题目
    async fn list_questions(&self, query: QuestionListQuery) -> Result<QuestionListResponse>;
    // 更新题目
    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    // 删除题目
    async fn delete_question(&self, id: i64) -> Result<bool>;

    /// 答题记录方法
    // 记录一次答题（is_correct 由服务层判定）
    async fn create_attempt(
        &self,
        user_id: i64,
        question_id: i64,
        selected_answer: i32,
        is_correct: bool,
        time_taken: Option<i32>,
    ) -> Result<QuestionAttempt>;
    // 列出用户的答题记录
    async fn list_attempts_by_user(
        &self,
        user_id: i64,
        query: AttemptListQuery,
    ) -> Result<Vec<QuestionAttempt>>;

    /// 观看进度方法
    // 标记视频已观看（存在则刷新时间，不存在则插入）
    async fn mark_video_watched(&self, user_id: i64, video_id: i64) -> Result<VideoProgress>;
    // 列出用户的观看记录
    async fn list_progress_by_user(
        &self,
        user_id: i64,
        query: ProgressListQuery,
    ) -> Result<Vec<VideoProgress>>;

    /// 疑问管理方法
    // 学生提交疑问
    async fn create_doubt(&self, user_id: i64, doubt: SubmitDoubtRequest) -> Result<Doubt>;
    // 列出学生自己的疑问
    async fn list_doubts_by_user(&self, user_id: i64) -> Result<Vec<Doubt>>;
    // 管理员列出全部疑问
    async fn list_all_doubts(&self, query: DoubtListQuery) -> Result<Vec<Doubt>>;
    // 通过ID获取疑问
    async fn get_doubt_by_id(&self, id: i64) -> Result<Option<Doubt>>;
    // 管理员回复疑问
    async fn respond_doubt(
        &self,
        id: i64,
        response: String,
        status: DoubtStatus,
    ) -> Result<Option<Doubt>>;
    // 删除疑问
    async fn delete_doubt(&self, id: i64) -> Result<bool>;

    /// 统计分析方法
    // 管理端平台统计
    async fn platform_analytics(&self) -> Result<PlatformAnalytics>;
    // 学生个人学习统计
    async fn student_stats(&self, user_id: i64) -> Result<StudentStats>;
    // 管理端学生列表（带统计）
    async fn list_students_with_stats(&self) -> Result<Vec<StudentWithStats>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
