use serde::Deserialize;
use ts_rs::TS;

use crate::models::questions::entities::Difficulty;

// 创建题目请求
//
// options 至少两项，correct_answer 必须落在 options 下标范围内。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct CreateQuestionRequest {
    pub question_text: String,
    pub question_image: Option<String>,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub explanation: Option<String>,
    pub class_level: String,
    pub subject: String,
    pub chapter: String,
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

// 更新题目请求，仅提供的字段会被更新
//
// options 与 correct_answer 一起校验：以更新后的取值为准。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct UpdateQuestionRequest {
    pub question_text: Option<String>,
    pub question_image: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<i32>,
    pub explanation: Option<String>,
    pub class_level: Option<String>,
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
}

// 题目列表筛选条件，全部为精确匹配
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct QuestionListQuery {
    pub class_level: Option<String>,
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub limit: Option<u64>,
}
