use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码，粗分类与 HTTP 状态对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求错误
    BadRequest = 40000,
    InvalidTaxonomy = 40001,
    InvalidYoutubeUrl = 40002,
    InvalidAnswerIndex = 40003,
    InvalidCategoryKind = 40004,

    // 401xx 认证错误
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403xx 权限错误
    PermissionDenied = 40300,

    // 404xx 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    VideoNotFound = 40402,
    QuestionNotFound = 40403,
    DoubtNotFound = 40404,

    // 409xx 冲突
    UserAlreadyExists = 40900,

    // 500xx 服务器错误
    InternalServerError = 50000,
}
