//! 学生疑问存储操作

use super::SeaOrmStorage;
use crate::entity::doubts::{ActiveModel, Column, Entity as Doubts};
use crate::errors::{ElearnError, Result};
use crate::models::doubts::{
    entities::{Doubt, DoubtStatus},
    requests::{DoubtListQuery, SubmitDoubtRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 学生提交疑问
    pub async fn create_doubt_impl(
        &self,
        user_id: i64,
        req: SubmitDoubtRequest,
    ) -> Result<Doubt> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            title: Set(req.title),
            description: Set(req.description),
            question_id: Set(req.question_id),
            video_id: Set(req.video_id),
            status: Set(DoubtStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("创建疑问失败: {e}")))?;

        Ok(result.into_doubt())
    }

    /// 列出学生自己的疑问（按创建时间倒序）
    pub async fn list_doubts_by_user_impl(&self, user_id: i64) -> Result<Vec<Doubt>> {
        let result = Doubts::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询疑问失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_doubt()).collect())
    }

    /// 管理员列出全部疑问（按创建时间倒序，可按状态过滤）
    pub async fn list_all_doubts_impl(&self, query: DoubtListQuery) -> Result<Vec<Doubt>> {
        let mut finder = Doubts::find();

        if let Some(status) = query.status {
            finder = finder.filter(Column::Status.eq(status.to_string()));
        }

        let result = finder
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询疑问失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_doubt()).collect())
    }

    /// 通过 ID 获取疑问
    pub async fn get_doubt_by_id_impl(&self, id: i64) -> Result<Option<Doubt>> {
        let result = Doubts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询疑问失败: {e}")))?;

        Ok(result.map(|m| m.into_doubt()))
    }

    /// 管理员回复疑问
    pub async fn respond_doubt_impl(
        &self,
        id: i64,
        response: String,
        status: DoubtStatus,
    ) -> Result<Option<Doubt>> {
        // 先检查疑问是否存在
        let existing = self.get_doubt_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            response: Set(Some(response)),
            status: Set(status.to_string()),
            responded_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("回复疑问失败: {e}")))?;

        self.get_doubt_by_id_impl(id).await
    }

    /// 删除疑问
    pub async fn delete_doubt_impl(&self, id: i64) -> Result<bool> {
        let result = Doubts::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("删除疑问失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
