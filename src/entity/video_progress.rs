//! 视频观看进度实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "video_progress")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub video_id: i64,
    pub watched_duration: i32,
    pub completed: bool,
    pub last_watched_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::videos::Entity",
        from = "Column::VideoId",
        to = "super::videos::Column::Id"
    )]
    Video,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::videos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_progress(self) -> crate::models::progress::entities::VideoProgress {
        use chrono::{DateTime, Utc};

        crate::models::progress::entities::VideoProgress {
            id: self.id,
            user_id: self.user_id,
            video_id: self.video_id,
            watched_duration: self.watched_duration,
            completed: self.completed,
            last_watched_at: DateTime::<Utc>::from_timestamp(self.last_watched_at, 0)
                .unwrap_or_default(),
        }
    }
}
