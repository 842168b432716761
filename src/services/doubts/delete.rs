use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::DoubtService;

pub async fn handle_delete_doubt(
    service: &DoubtService,
    doubt_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_doubt(doubt_id).await {
        Ok(true) => {
            tracing::info!("Doubt {} deleted", doubt_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Doubt deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DoubtNotFound,
            "Doubt not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to delete doubt {}: {}", doubt_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete doubt",
                )),
            )
        }
    }
}
