//! 答题记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "question_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    pub selected_answer: i32,
    pub is_correct: bool,
    pub time_taken: Option<i32>,
    pub attempted_at: i64,
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
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id"
    )]
    Question,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attempt(self) -> crate::models::attempts::entities::QuestionAttempt {
        use chrono::{DateTime, Utc};

        crate::models::attempts::entities::QuestionAttempt {
            id: self.id,
            user_id: self.user_id,
            question_id: self.question_id,
            selected_answer: self.selected_answer,
            is_correct: self.is_correct,
            time_taken: self.time_taken,
            attempted_at: DateTime::<Utc>::from_timestamp(self.attempted_at, 0)
                .unwrap_or_default(),
        }
    }
}
