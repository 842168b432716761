use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::videos::CreateVideoRequest;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::taxonomy;
use crate::utils::youtube;

use super::VideoService;

pub async fn handle_create_video(
    service: &VideoService,
    create_request: CreateVideoRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(created_by) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    // 1. 解析 YouTube 视频 ID
    let Some(youtube_id) = youtube::extract_youtube_id(&create_request.youtube_url) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidYoutubeUrl,
            "Could not extract a video ID from the given YouTube URL",
        )));
    };

    // 2. 分类必须落在当前配置里
    match taxonomy::taxonomy_error(
        &storage,
        &create_request.class_level,
        &create_request.subject,
    )
    .await
    {
        Ok(None) => {}
        Ok(Some(message)) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::InvalidTaxonomy, message)));
        }
        Err(e) => {
            tracing::error!("Failed to load taxonomy config: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create video",
                )),
            );
        }
    }

    // 3. 缺失的标题 / 缩略图走 oEmbed 补全
    let (title, thumbnail) = youtube::resolve_metadata(
        &youtube_id,
        create_request.title.clone(),
        create_request.thumbnail.clone(),
    )
    .await;

    match storage
        .create_video(create_request, youtube_id, title, thumbnail, created_by)
        .await
    {
        Ok(video) => {
            tracing::info!("Video created: {} ({})", video.title, video.youtube_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(video, "Video created")))
        }
        Err(e) => {
            tracing::error!("Failed to create video: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create video",
                )),
            )
        }
    }
}
