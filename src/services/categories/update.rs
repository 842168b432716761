use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::categories::defaults::{CONFIG_KEY_CLASSES, CONFIG_KEY_SUBJECTS};
use crate::models::categories::{CategoryKind, UpdateCategoryRequest};
use crate::models::{ApiResponse, ErrorCode};

use super::CategoryService;

pub async fn handle_update_categories(
    service: &CategoryService,
    update_request: UpdateCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 空白项直接剔除
    let values: Vec<String> = update_request
        .values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();

    if values.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Category values cannot be empty",
        )));
    }

    match update_request.kind {
        CategoryKind::Classes => {
            match storage
                .set_platform_config(CONFIG_KEY_CLASSES, values.clone())
                .await
            {
                Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                    values,
                    "Classes updated",
                ))),
                Err(e) => Ok(internal_error(e)),
            }
        }
        CategoryKind::Subjects => {
            match storage
                .set_platform_config(CONFIG_KEY_SUBJECTS, values.clone())
                .await
            {
                Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                    values,
                    "Subjects updated",
                ))),
                Err(e) => Ok(internal_error(e)),
            }
        }
        CategoryKind::Chapters => {
            let Some(subject) = update_request
                .subject
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
            else {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidCategoryKind,
                    "Updating chapters requires a subject",
                )));
            };

            match storage.replace_chapters(subject, values).await {
                Ok(chapters) => {
                    let names: Vec<String> = chapters.into_iter().map(|c| c.name).collect();
                    Ok(HttpResponse::Ok().json(ApiResponse::success(names, "Chapters updated")))
                }
                Err(e) => Ok(internal_error(e)),
            }
        }
    }
}

fn internal_error(e: crate::errors::ElearnError) -> HttpResponse {
    tracing::error!("Failed to update categories: {}", e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Failed to update categories",
    ))
}
