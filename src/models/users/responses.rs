use serde::Serialize;
use ts_rs::TS;

use super::entities::User;

// 个人资料响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct ProfileResponse {
    pub user: User,
}
