//! 视频观看进度存储操作

use super::SeaOrmStorage;
use crate::entity::video_progress::{ActiveModel, Column, Entity as VideoProgressEntity};
use crate::errors::{ElearnError, Result};
use crate::models::progress::{entities::VideoProgress, requests::ProgressListQuery};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 标记视频已观看
    ///
    /// 已有记录时只刷新 completed 与 last_watched_at，否则插入新记录。
    pub async fn mark_video_watched_impl(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<VideoProgress> {
        let now = chrono::Utc::now().timestamp();

        let existing = VideoProgressEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::VideoId.eq(video_id))
            .one(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询观看记录失败: {e}")))?;

        let result = match existing {
            Some(record) => {
                let model = ActiveModel {
                    id: Set(record.id),
                    completed: Set(true),
                    last_watched_at: Set(now),
                    ..Default::default()
                };
                model.update(&self.db).await.map_err(|e| {
                    ElearnError::database_operation(format!("更新观看记录失败: {e}"))
                })?
            }
            None => {
                let model = ActiveModel {
                    user_id: Set(user_id),
                    video_id: Set(video_id),
                    watched_duration: Set(0),
                    completed: Set(true),
                    last_watched_at: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    ElearnError::database_operation(format!("插入观看记录失败: {e}"))
                })?
            }
        };

        Ok(result.into_progress())
    }

    /// 列出用户的观看记录（按最近观看倒序）
    pub async fn list_progress_by_user_impl(
        &self,
        user_id: i64,
        query: ProgressListQuery,
    ) -> Result<Vec<VideoProgress>> {
        let mut finder = VideoProgressEntity::find().filter(Column::UserId.eq(user_id));

        if let Some(video_id) = query.video_id {
            finder = finder.filter(Column::VideoId.eq(video_id));
        }

        let result = finder
            .order_by_desc(Column::LastWatchedAt)
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询观看记录失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_progress()).collect())
    }
}
