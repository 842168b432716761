use serde::Deserialize;
use ts_rs::TS;

// 标记视频已观看请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct MarkWatchedRequest {
    pub video_id: i64,
}

// 观看记录查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct ProgressListQuery {
    pub video_id: Option<i64>,
}
