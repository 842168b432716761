use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::attempts::AttemptListQuery;
use crate::models::{ApiResponse, ErrorCode};

use super::AttemptService;

pub async fn handle_list_attempts(
    service: &AttemptService,
    query: AttemptListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    match storage.list_attempts_by_user(user_id, query).await {
        Ok(attempts) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            attempts,
            "Attempts retrieved",
        ))),
        Err(e) => {
            tracing::error!("Failed to list attempts for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list attempts",
                )),
            )
        }
    }
}
