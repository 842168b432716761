use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::videos::UpdateVideoRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::youtube;

use super::VideoService;

pub async fn handle_update_video(
    service: &VideoService,
    video_id: i64,
    update_request: UpdateVideoRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 换了 URL 就重新解析视频 ID
    let youtube_id = match &update_request.youtube_url {
        Some(url) => match youtube::extract_youtube_id(url) {
            Some(id) => Some(id),
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidYoutubeUrl,
                    "Could not extract a video ID from the given YouTube URL",
                )));
            }
        },
        None => None,
    };

    match storage
        .update_video(video_id, update_request, youtube_id)
        .await
    {
        Ok(Some(video)) => {
            tracing::info!("Video {} updated", video.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(video, "Video updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::VideoNotFound,
            "Video not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to update video {}: {}", video_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update video",
                )),
            )
        }
    }
}
