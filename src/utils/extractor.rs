//! 路径参数安全提取器
//!
//! 非法的路径 ID 直接返回 400 JSON 响应，避免 actix 默认的纯文本错误。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_id_error(what: &str) -> actix_web::Error {
    let body = serde_json::to_string(&ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid {what} id in path"),
    ))
    .unwrap_or_default();
    ErrorBadRequest(body)
}

macro_rules! define_id_extractor {
    ($name:ident, $what:literal) => {
        /// 从路径尾段解析 i64 ID
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get("id")
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(bad_id_error($what)),
                })
            }
        }

        impl std::ops::Deref for $name {
            type Target = i64;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

define_id_extractor!(SafeVideoIdI64, "video");
define_id_extractor!(SafeQuestionIdI64, "question");
define_id_extractor!(SafeDoubtIdI64, "doubt");
