//! 视频课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub youtube_id: String,
    pub thumbnail: String,
    pub class_level: String,
    pub subject: String,
    pub chapter: Option<String>,
    pub topic: Option<String>,
    pub created_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::video_progress::Entity")]
    VideoProgress,
    #[sea_orm(has_many = "super::doubts::Entity")]
    Doubts,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::video_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VideoProgress.def()
    }
}

impl Related<super::doubts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doubts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_video(self) -> crate::models::videos::entities::Video {
        use chrono::{DateTime, Utc};

        crate::models::videos::entities::Video {
            id: self.id,
            title: self.title,
            description: self.description,
            youtube_url: self.youtube_url,
            youtube_id: self.youtube_id,
            thumbnail: self.thumbnail,
            class_level: self.class_level,
            subject: self.subject,
            chapter: self.chapter,
            topic: self.topic,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
