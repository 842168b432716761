use serde::Deserialize;
use ts_rs::TS;

// 提交疑问请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/doubt.ts")]
pub struct SubmitDoubtRequest {
    pub title: String,
    pub description: String,
    pub question_id: Option<i64>,
    pub video_id: Option<i64>,
}

// 管理员回复疑问请求
//
// status 缺省时置为 RESOLVED。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/doubt.ts")]
pub struct RespondDoubtRequest {
    pub response: String,
    pub status: Option<crate::models::doubts::entities::DoubtStatus>,
}

// 管理端疑问列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/doubt.ts")]
pub struct DoubtListQuery {
    pub status: Option<crate::models::doubts::entities::DoubtStatus>,
}
