use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::AnalyticsService;

pub async fn handle_platform_analytics(
    service: &AnalyticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.platform_analytics().await {
        Ok(analytics) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            analytics,
            "Analytics retrieved",
        ))),
        Err(e) => {
            tracing::error!("Failed to compute platform analytics: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to compute analytics",
                )),
            )
        }
    }
}
