use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::progress::ProgressListQuery;
use crate::models::{ApiResponse, ErrorCode};

use super::ProgressService;

pub async fn handle_list_progress(
    service: &ProgressService,
    query: ProgressListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    match storage.list_progress_by_user(user_id, query).await {
        Ok(progress) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            progress,
            "Watch history retrieved",
        ))),
        Err(e) => {
            tracing::error!("Failed to list progress for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list watch history",
                )),
            )
        }
    }
}
