use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::doubts::{DoubtStatus, RespondDoubtRequest};
use crate::models::{ApiResponse, ErrorCode};

use super::DoubtService;

// 回复即默认把状态置为已解决，除非显式指定
pub async fn handle_respond_doubt(
    service: &DoubtService,
    doubt_id: i64,
    respond_request: RespondDoubtRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if respond_request.response.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "response is required",
        )));
    }

    let status = respond_request.status.unwrap_or(DoubtStatus::Resolved);
    let response = respond_request.response.trim().to_string();

    match storage.respond_doubt(doubt_id, response, status).await
    {
        Ok(Some(doubt)) => {
            tracing::info!("Doubt {} answered", doubt.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(doubt, "Doubt answered")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DoubtNotFound,
            "Doubt not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to respond to doubt {}: {}", doubt_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to respond to doubt",
                )),
            )
        }
    }
}
