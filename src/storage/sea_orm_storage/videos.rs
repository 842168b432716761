//! 视频存储操作

use super::SeaOrmStorage;
use crate::entity::videos::{ActiveModel, Column, Entity as Videos};
use crate::errors::{ElearnError, Result};
use crate::models::videos::{
    entities::Video,
    requests::{CreateVideoRequest, UpdateVideoRequest, VideoListQuery},
    responses::VideoListResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建视频
    pub async fn create_video_impl(
        &self,
        req: CreateVideoRequest,
        youtube_id: String,
        title: String,
        thumbnail: String,
        created_by: i64,
    ) -> Result<Video> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(title),
            description: Set(req.description),
            youtube_url: Set(req.youtube_url),
            youtube_id: Set(youtube_id),
            thumbnail: Set(thumbnail),
            class_level: Set(req.class_level),
            subject: Set(req.subject),
            chapter: Set(req.chapter),
            topic: Set(req.topic),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("创建视频失败: {e}")))?;

        Ok(result.into_video())
    }

    /// 通过 ID 获取视频
    pub async fn get_video_by_id_impl(&self, id: i64) -> Result<Option<Video>> {
        let result = Videos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询视频失败: {e}")))?;

        Ok(result.map(|m| m.into_video()))
    }

    /// 列出视频（精确匹配筛选，按创建时间倒序）
    pub async fn list_videos_impl(&self, query: VideoListQuery) -> Result<VideoListResponse> {
        let mut select = Videos::find();

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

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("统计视频数失败: {e}")))?;

        select = select.order_by_desc(Column::CreatedAt);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let videos = select
            .all(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("查询视频列表失败: {e}")))?;

        Ok(VideoListResponse {
            videos: videos.into_iter().map(|m| m.into_video()).collect(),
            total,
        })
    }

    /// 更新视频（youtube_url 变化时由服务层传入新的 youtube_id）
    pub async fn update_video_impl(
        &self,
        id: i64,
        update: UpdateVideoRequest,
        youtube_id: Option<String>,
    ) -> Result<Option<Video>> {
        // 先检查视频是否存在
        let existing = self.get_video_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(youtube_url) = update.youtube_url {
            model.youtube_url = Set(youtube_url);
        }
        if let Some(youtube_id) = youtube_id {
            model.youtube_id = Set(youtube_id);
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(thumbnail) = update.thumbnail {
            model.thumbnail = Set(thumbnail);
        }
        if let Some(class_level) = update.class_level {
            model.class_level = Set(class_level);
        }
        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }
        if let Some(chapter) = update.chapter {
            model.chapter = Set(Some(chapter));
        }
        if let Some(topic) = update.topic {
            model.topic = Set(Some(topic));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("更新视频失败: {e}")))?;

        self.get_video_by_id_impl(id).await
    }

    /// 删除视频
    pub async fn delete_video_impl(&self, id: i64) -> Result<bool> {
        let result = Videos::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ElearnError::database_operation(format!("删除视频失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
