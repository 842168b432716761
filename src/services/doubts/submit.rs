use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::doubts::SubmitDoubtRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::DoubtService;

pub async fn handle_submit_doubt(
    service: &DoubtService,
    submit_request: SubmitDoubtRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    if submit_request.title.trim().is_empty() || submit_request.description.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "title and description are required",
        )));
    }

    match storage.create_doubt(user_id, submit_request).await {
        Ok(doubt) => {
            tracing::info!("Doubt {} submitted by user {}", doubt.id, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(doubt, "Doubt submitted")))
        }
        Err(e) => {
            tracing::error!("Failed to create doubt: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to submit doubt",
                )),
            )
        }
    }
}
