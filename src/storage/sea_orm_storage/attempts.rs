//! 答题记录存储操作

use super::SeaOrmStorage;
use crate::entity::question_attempts::{ActiveModel, Column, Entity as QuestionAttempts};
use crate::errors::{ElearnError, Result};
use crate::models::attempts::{entities::QuestionAttempt, requests::AttemptListQuery};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 记录一次答题
    pub async fn create_attempt_impl(
        &self,
        user_id: i64,
        question_id: i64,
        selected_answer: i32,
        is_correct: bool,
        time_taken: Option<i32>,
    ) -> Result<QuestionAttempt> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            question_id: Set(question_id),
            selected_answer: Set(selected_answer),
            is_correct: Set(is_correct),
            time_taken: Set(time_taken),
            attempted_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("记录答题失败: {e}")))?;

        Ok(result.into_attempt())
    }

    /// 列出用户的答题记录（按时间倒序）
    pub async fn list_attempts_by_user_impl(
        &self,
        user_id: i64,
        query: AttemptListQuery,
    ) -> Result<Vec<QuestionAttempt>> {
        let mut finder = QuestionAttempts::find().filter(Column::UserId.eq(user_id));

        if let Some(question_id) = query.question_id {
            finder = finder.filter(Column::QuestionId.eq(question_id));
        }

        let result = finder
            .order_by_desc(Column::AttemptedAt)
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_attempt()).collect())
    }
}
