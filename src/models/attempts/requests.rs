use serde::Deserialize;
use ts_rs::TS;

// 提交答案请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attempt.ts")]
pub struct SubmitAttemptRequest {
    pub question_id: i64,
    pub selected_answer: i32,
    // 作答用时（秒），前端计时，可缺省
    pub time_taken: Option<i32>,
}

// 答题记录查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attempt.ts")]
pub struct AttemptListQuery {
    pub question_id: Option<i64>,
}
