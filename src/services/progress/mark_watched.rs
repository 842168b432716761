use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::progress::MarkWatchedRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::ProgressService;

// 重复标记不报错，只刷新观看时间
pub async fn handle_mark_watched(
    service: &ProgressService,
    mark_request: MarkWatchedRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    match storage.get_video_by_id(mark_request.video_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::VideoNotFound,
                "Video not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to get video {}: {}", mark_request.video_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to mark video as watched",
                )),
            );
        }
    }

    match storage.mark_video_watched(user_id, mark_request.video_id).await {
        Ok(progress) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            progress,
            "Video marked as watched",
        ))),
        Err(e) => {
            tracing::error!(
                "Failed to mark video {} watched for user {}: {}",
                mark_request.video_id,
                user_id,
                e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to mark video as watched",
                )),
            )
        }
    }
}
