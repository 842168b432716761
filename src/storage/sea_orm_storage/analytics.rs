//! 统计分析存储操作
//!
//! 聚合查询集中在这里，分布类数据先按维度 group by 再在内存中排序。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::entity::{doubts, question_attempts, questions, users, video_progress, videos};
use crate::errors::{ElearnError, Result};
use crate::models::analytics::responses::{
    DistributionEntry, PlatformAnalytics, PlatformOverview, RecentActivity, StudentStats,
    StudentWithStats, TopPerformer,
};
use crate::models::doubts::entities::DoubtStatus;
use crate::models::users::entities::UserRole;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

const RECENT_ACTIVITY_DAYS: i64 = 7;
const TOP_PERFORMERS_LIMIT: usize = 10;

impl SeaOrmStorage {
    /// 管理端平台统计
    pub async fn platform_analytics_impl(&self) -> Result<PlatformAnalytics> {
        let overview = self.platform_overview().await?;
        let recent_activity = self.recent_activity().await?;

        let videos_by_class = self
            .distribution::<videos::Entity>(videos::Column::ClassLevel)
            .await?;
        let videos_by_subject = self
            .distribution::<videos::Entity>(videos::Column::Subject)
            .await?;
        let questions_by_class = self
            .distribution::<questions::Entity>(questions::Column::ClassLevel)
            .await?;
        let questions_by_subject = self
            .distribution::<questions::Entity>(questions::Column::Subject)
            .await?;
        let questions_by_difficulty = self
            .distribution::<questions::Entity>(questions::Column::Difficulty)
            .await?;

        let top_performers = self.top_performers().await?;

        Ok(PlatformAnalytics {
            overview,
            recent_activity,
            videos_by_class,
            videos_by_subject,
            questions_by_class,
            questions_by_subject,
            questions_by_difficulty,
            top_performers,
        })
    }

    async fn platform_overview(&self) -> Result<PlatformOverview> {
        let total_students = Users::find()
            .filter(users::Column::Role.eq(UserRole::Student.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计学生数失败: {e}")))?;

        let total_videos = Videos::find()
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计视频数失败: {e}")))?;

        let total_questions = Questions::find()
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计题目数失败: {e}")))?;

        let total_attempts = QuestionAttempts::find()
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计答题数失败: {e}")))?;

        let correct_attempts = QuestionAttempts::find()
            .filter(question_attempts::Column::IsCorrect.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计答对数失败: {e}")))?;

        let videos_watched = VideoProgress::find()
            .filter(video_progress::Column::Completed.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计观看记录失败: {e}")))?;

        let pending_doubts = Doubts::find()
            .filter(doubts::Column::Status.eq(DoubtStatus::Pending.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计待回复疑问失败: {e}")))?;

        let resolved_doubts = Doubts::find()
            .filter(doubts::Column::Status.eq(DoubtStatus::Resolved.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计已解决疑问失败: {e}")))?;

        Ok(PlatformOverview {
            total_students,
            total_videos,
            total_questions,
            total_attempts,
            correct_attempts,
            overall_accuracy: StudentStats::compute_accuracy(correct_attempts, total_attempts),
            videos_watched,
            pending_doubts,
            resolved_doubts,
        })
    }

    async fn recent_activity(&self) -> Result<RecentActivity> {
        let cutoff =
            (chrono::Utc::now() - chrono::Duration::days(RECENT_ACTIVITY_DAYS)).timestamp();

        let new_students = Users::find()
            .filter(users::Column::Role.eq(UserRole::Student.to_string()))
            .filter(users::Column::CreatedAt.gte(cutoff))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计新学生失败: {e}")))?;

        let attempts = QuestionAttempts::find()
            .filter(question_attempts::Column::AttemptedAt.gte(cutoff))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计近期答题失败: {e}")))?;

        let videos_watched = VideoProgress::find()
            .filter(video_progress::Column::Completed.eq(true))
            .filter(video_progress::Column::LastWatchedAt.gte(cutoff))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计近期观看失败: {e}")))?;

        Ok(RecentActivity {
            new_students,
            attempts,
            videos_watched,
        })
    }

    /// 按单列分组计数，结果按计数倒序
    async fn distribution<E>(&self, column: impl ColumnTrait) -> Result<Vec<DistributionEntry>>
    where
        E: EntityTrait,
    {
        let rows: Vec<(String, i64)> = E::find()
            .select_only()
            .column(column)
            .column_as(column.count(), "count")
            .group_by(column)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("分组统计失败: {e}")))?;

        let mut entries: Vec<DistributionEntry> = rows
            .into_iter()
            .map(|(key, count)| DistributionEntry {
                key,
                count: count.max(0) as u64,
            })
            .collect();

        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        Ok(entries)
    }

    /// 答对数前十的学生，并列时按用户 ID 升序
    async fn top_performers(&self) -> Result<Vec<TopPerformer>> {
        let rows: Vec<(i64, i64)> = QuestionAttempts::find()
            .select_only()
            .column(question_attempts::Column::UserId)
            .column_as(question_attempts::Column::Id.count(), "count")
            .filter(question_attempts::Column::IsCorrect.eq(true))
            .group_by(question_attempts::Column::UserId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计答对数失败: {e}")))?;

        let mut ranked: Vec<(i64, u64)> = rows
            .into_iter()
            .map(|(user_id, count)| (user_id, count.max(0) as u64))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(TOP_PERFORMERS_LIMIT);

        let user_ids: Vec<i64> = ranked.iter().map(|(id, _)| *id).collect();
        let user_models = Users::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询用户失败: {e}")))?;

        let user_map: HashMap<i64, crate::models::users::entities::User> = user_models
            .into_iter()
            .map(|m| (m.id, m.into_user()))
            .collect();

        Ok(ranked
            .into_iter()
            .filter_map(|(user_id, correct_answers)| {
                user_map.get(&user_id).map(|user| TopPerformer {
                    user_id,
                    username: user.username.clone(),
                    profile_name: user.profile.profile_name.clone(),
                    correct_answers,
                })
            })
            .collect())
    }

    /// 学生个人学习统计
    pub async fn student_stats_impl(&self, user_id: i64) -> Result<StudentStats> {
        let total_videos = Videos::find()
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计视频数失败: {e}")))?;

        let videos_watched = VideoProgress::find()
            .filter(video_progress::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计观看记录失败: {e}")))?;

        let total_questions = Questions::find()
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计题目数失败: {e}")))?;

        let questions_solved = QuestionAttempts::find()
            .filter(question_attempts::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计答题数失败: {e}")))?;

        let correct_answers = QuestionAttempts::find()
            .filter(question_attempts::Column::UserId.eq(user_id))
            .filter(question_attempts::Column::IsCorrect.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计答对数失败: {e}")))?;

        let pending_doubts = Doubts::find()
            .filter(doubts::Column::UserId.eq(user_id))
            .filter(doubts::Column::Status.eq(DoubtStatus::Pending.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计待回复疑问失败: {e}")))?;

        Ok(StudentStats {
            total_videos,
            videos_watched,
            total_questions,
            questions_solved,
            correct_answers,
            accuracy: StudentStats::compute_accuracy(correct_answers, questions_solved),
            pending_doubts,
        })
    }

    /// 管理端学生列表（带统计，按注册时间倒序）
    pub async fn list_students_with_stats_impl(&self) -> Result<Vec<StudentWithStats>> {
        let students = Users::find()
            .filter(users::Column::Role.eq(UserRole::Student.to_string()))
            .order_by_desc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询学生列表失败: {e}")))?;

        // 三个分组查询一次取全量统计，避免每个学生单独查询
        let attempt_rows: Vec<(i64, i64)> = QuestionAttempts::find()
            .select_only()
            .column(question_attempts::Column::UserId)
            .column_as(question_attempts::Column::Id.count(), "count")
            .group_by(question_attempts::Column::UserId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计答题数失败: {e}")))?;

        let correct_rows: Vec<(i64, i64)> = QuestionAttempts::find()
            .select_only()
            .column(question_attempts::Column::UserId)
            .column_as(question_attempts::Column::Id.count(), "count")
            .filter(question_attempts::Column::IsCorrect.eq(true))
            .group_by(question_attempts::Column::UserId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计答对数失败: {e}")))?;

        let watched_rows: Vec<(i64, i64)> = VideoProgress::find()
            .select_only()
            .column(video_progress::Column::UserId)
            .column_as(video_progress::Column::Id.count(), "count")
            .group_by(video_progress::Column::UserId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计观看记录失败: {e}")))?;

        let attempts: HashMap<i64, u64> = attempt_rows
            .into_iter()
            .map(|(id, c)| (id, c.max(0) as u64))
            .collect();
        let corrects: HashMap<i64, u64> = correct_rows
            .into_iter()
            .map(|(id, c)| (id, c.max(0) as u64))
            .collect();
        let watched: HashMap<i64, u64> = watched_rows
            .into_iter()
            .map(|(id, c)| (id, c.max(0) as u64))
            .collect();

        Ok(students
            .into_iter()
            .map(|m| {
                let user = m.into_user();
                let questions_attempted = attempts.get(&user.id).copied().unwrap_or(0);
                let correct_answers = corrects.get(&user.id).copied().unwrap_or(0);
                let videos_watched = watched.get(&user.id).copied().unwrap_or(0);

                StudentWithStats {
                    accuracy: StudentStats::compute_accuracy(
                        correct_answers,
                        questions_attempted,
                    ),
                    questions_attempted,
                    correct_answers,
                    videos_watched,
                    user,
                }
            })
            .collect())
    }
}
