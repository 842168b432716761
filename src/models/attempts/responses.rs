use serde::Serialize;
use ts_rs::TS;

use crate::models::attempts::entities::QuestionAttempt;

// 提交答案响应：回传判题结果与解析
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attempt.ts")]
pub struct SubmitAttemptResponse {
    pub attempt: QuestionAttempt,
    pub is_correct: bool,
    pub correct_answer: i32,
    pub explanation: Option<String>,
}
