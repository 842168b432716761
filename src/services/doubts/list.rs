use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::doubts::DoubtListQuery;
use crate::models::{ApiResponse, ErrorCode};

use super::DoubtService;

pub async fn handle_list_my_doubts(
    service: &DoubtService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    match storage.list_doubts_by_user(user_id).await {
        Ok(doubts) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            doubts,
            "Doubts retrieved",
        ))),
        Err(e) => {
            tracing::error!("Failed to list doubts for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list doubts",
                )),
            )
        }
    }
}

pub async fn handle_list_all_doubts(
    service: &DoubtService,
    query: DoubtListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_all_doubts(query).await {
        Ok(doubts) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            doubts,
            "Doubts retrieved",
        ))),
        Err(e) => {
            tracing::error!("Failed to list all doubts: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list doubts",
                )),
            )
        }
    }
}
