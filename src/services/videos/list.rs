use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::videos::VideoListQuery;
use crate::models::{ApiResponse, ErrorCode};

use super::VideoService;

// 推荐列表默认条数
const RECOMMENDED_LIMIT: u64 = 6;

pub async fn handle_list_videos(
    service: &VideoService,
    query: VideoListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_videos(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Videos retrieved",
        ))),
        Err(e) => {
            tracing::error!("Failed to list videos: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list videos",
                )),
            )
        }
    }
}

// 首页推荐：偏好年级优先，未设置偏好时取最新
pub async fn handle_recommended_videos(
    service: &VideoService,
    mut query: VideoListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if query.class_level.is_none() {
        query.class_level = RequireJWT::extract_user_claims(request)
            .and_then(|user| user.preferred_class_level);
    }
    query.limit = Some(query.limit.unwrap_or(RECOMMENDED_LIMIT));

    match storage.list_videos(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Recommended videos retrieved",
        ))),
        Err(e) => {
            tracing::error!("Failed to list recommended videos: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list videos",
                )),
            )
        }
    }
}
