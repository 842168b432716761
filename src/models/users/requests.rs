use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;

// 创建用户请求（注册 / 启动时管理员初始化）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub profile_name: Option<String>,
    pub avatar_url: Option<String>,
}

fn default_role() -> UserRole {
    UserRole::Student
}

// 更新个人资料请求
//
// preferred_class_level 会在服务层按当前分类校验，
// preferred_batch 只接受 JEE / WBJEE / BOARDS。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateProfileRequest {
    pub profile_name: Option<String>,
    pub avatar_url: Option<String>,
    pub preferred_class_level: Option<String>,
    pub preferred_batch: Option<String>,
}
