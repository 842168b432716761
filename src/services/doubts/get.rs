use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::DoubtService;

// 学生只能查看自己的疑问，管理员不受限
pub async fn handle_get_doubt(
    service: &DoubtService,
    doubt_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    match storage.get_doubt_by_id(doubt_id).await {
        Ok(Some(doubt)) => {
            if doubt.user_id != user.id && user.role != UserRole::Admin {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::PermissionDenied,
                    "You can only view your own doubts",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(doubt, "Doubt retrieved")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DoubtNotFound,
            "Doubt not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to get doubt {}: {}", doubt_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get doubt",
                )),
            )
        }
    }
}
