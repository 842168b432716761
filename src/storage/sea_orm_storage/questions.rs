//! 题目存储操作

use super::SeaOrmStorage;
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::{ElearnError, Result};
use crate::models::questions::{
    entities::Question,
    requests::{CreateQuestionRequest, QuestionListQuery, UpdateQuestionRequest},
    responses::QuestionListResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建题目
    pub async fn create_question_impl(
        &self,
        req: CreateQuestionRequest,
        created_by: i64,
    ) -> Result<Question> {
        let now = chrono::Utc::now().timestamp();
        let options = serde_json::to_string(&req.options)
            .map_err(|e| ElearnError::serialization(format!("序列化选项失败: {e}")))?;

        let model = ActiveModel {
            question_text: Set(req.question_text),
            question_image: Set(req.question_image),
            options: Set(options),
            correct_answer: Set(req.correct_answer),
            explanation: Set(req.explanation),
            class_level: Set(req.class_level),
            subject: Set(req.subject),
            chapter: Set(req.chapter),
            topic: Set(req.topic),
            difficulty: Set(req.difficulty.to_string()),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("创建题目失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 通过 ID 获取题目
    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 列出题目（精确匹配筛选，按创建时间倒序）
    pub async fn list_questions_impl(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse> {
        let mut select = Questions::find();

        if let Some(ref class_level) = query.class_level {
            select = select.filter(Column::ClassLevel.eq(class_level));
        }
        if let Some(ref subject) = query.subject {
            select = select.filter(Column::Subject.eq(subject));
        }
        if let Some(ref chapter) = query.chapter {
            select = select.filter(Column::Chapter.eq(chapter));
        }
        if let Some(ref topic) = query.topic {
            select = select.filter(Column::Topic.eq(topic));
        }
        if let Some(difficulty) = query.difficulty {
            select = select.filter(Column::Difficulty.eq(difficulty.to_string()));
        }

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计题目数失败: {e}")))?;

        select = select.order_by_desc(Column::CreatedAt);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let questions = select
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询题目列表失败: {e}")))?;

        Ok(QuestionListResponse {
            questions: questions.into_iter().map(|m| m.into_question()).collect(),
            total,
        })
    }

    /// 更新题目（options / correct_answer 的联合校验在服务层完成）
    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        // 先检查题目是否存在
        let existing = self.get_question_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(question_text) = update.question_text {
            model.question_text = Set(question_text);
        }
        if let Some(question_image) = update.question_image {
            model.question_image = Set(Some(question_image));
        }
        if let Some(options) = update.options {
            let serialized = serde_json::to_string(&options)
                .map_err(|e| ElearnError::serialization(format!("序列化选项失败: {e}")))?;
            model.options = Set(serialized);
        }
        if let Some(correct_answer) = update.correct_answer {
            model.correct_answer = Set(correct_answer);
        }
        if let Some(explanation) = update.explanation {
            model.explanation = Set(Some(explanation));
        }
        if let Some(class_level) = update.class_level {
            model.class_level = Set(class_level);
        }
        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }
        if let Some(chapter) = update.chapter {
            model.chapter = Set(chapter);
        }
        if let Some(topic) = update.topic {
            model.topic = Set(topic);
        }
        if let Some(difficulty) = update.difficulty {
            model.difficulty = Set(difficulty.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("更新题目失败: {e}")))?;

        self.get_question_by_id_impl(id).await
    }

    /// 删除题目
    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
