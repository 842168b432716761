use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::VideoService;

pub async fn handle_get_video(
    service: &VideoService,
    video_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_video_by_id(video_id).await {
        Ok(Some(video)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            video,
            "Video retrieved",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::VideoNotFound,
            "Video not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to get video {}: {}", video_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get video",
                )),
            )
        }
    }
}
