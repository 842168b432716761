//! 题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub question_text: String,
    pub question_image: Option<String>,
    // JSON 数组字符串，例如 ["A", "B", "C", "D"]
    pub options: String,
    pub correct_answer: i32,
    pub explanation: Option<String>,
    pub class_level: String,
    pub subject: String,
    pub chapter: String,
    pub topic: String,
    pub difficulty: String,
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
    #[sea_orm(has_many = "super::question_attempts::Entity")]
    QuestionAttempts,
    #[sea_orm(has_many = "super::doubts::Entity")]
    Doubts,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::question_attempts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionAttempts.def()
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
    pub fn into_question(self) -> crate::models::questions::entities::Question {
        use crate::models::questions::entities::{Difficulty, Question};
        use chrono::{DateTime, Utc};

        Question {
            id: self.id,
            question_text: self.question_text,
            question_image: self.question_image,
            options: serde_json::from_str(&self.options).unwrap_or_default(),
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            class_level: self.class_level,
            subject: self.subject,
            chapter: self.chapter,
            topic: self.topic,
            difficulty: self
                .difficulty
                .parse::<Difficulty>()
                .unwrap_or(Difficulty::Medium),
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
