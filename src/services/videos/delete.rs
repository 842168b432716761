use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::VideoService;

pub async fn handle_delete_video(
    service: &VideoService,
    video_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_video(video_id).await {
        Ok(true) => {
            tracing::info!("Video {} deleted", video_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Video deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::VideoNotFound,
            "Video not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to delete video {}: {}", video_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete video",
                )),
            )
        }
    }
}
