use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::categories::defaults::{CONFIG_KEY_CLASSES, VALID_BATCHES, default_classes};
use crate::models::users::requests::UpdateProfileRequest;
use crate::models::users::responses::ProfileResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::AuthService;

// 更新个人资料，学习偏好要落在当前分类配置里
pub async fn handle_update_profile(
    service: &AuthService,
    update_request: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    // 校验偏好年级是否在当前配置的分类里
    if let Some(class_level) = &update_request.preferred_class_level {
        let classes = match storage.get_platform_config(CONFIG_KEY_CLASSES).await {
            Ok(Some(values)) => values,
            Ok(None) => default_classes(),
            Err(e) => {
                tracing::error!("Failed to load class config: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Profile update failed",
                    )),
                );
            }
        };

        if !classes.iter().any(|c| c == class_level) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidTaxonomy,
                format!("Unknown class level: {class_level}"),
            )));
        }
    }

    if let Some(batch) = &update_request.preferred_batch {
        if !VALID_BATCHES.contains(&batch.as_str()) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!(
                    "Invalid batch: {batch}. Supported batches: {}",
                    VALID_BATCHES.join(", ")
                ),
            )));
        }
    }

    match storage.update_profile(user_id, update_request).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProfileResponse { user },
            "Profile updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to update profile: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Profile update failed",
                )),
            )
        }
    }
}
