use serde::Serialize;
use ts_rs::TS;

use crate::models::questions::entities::Question;

// 题目列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total: u64,
}
