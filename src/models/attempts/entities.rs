use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 答题记录
//
// is_correct 由服务端根据题目正确答案计算，不信任客户端。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attempt.ts")]
pub struct QuestionAttempt {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    pub selected_answer: i32,
    pub is_correct: bool,
    pub time_taken: Option<i32>,
    pub attempted_at: chrono::DateTime<chrono::Utc>,
}
