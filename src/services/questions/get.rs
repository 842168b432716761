use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::QuestionService;

pub async fn handle_get_question(
    service: &QuestionService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let is_admin = RequireJWT::extract_user_role(request) == Some(UserRole::Admin);

    match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => {
            let question = if is_admin { question } else { question.redacted() };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                question,
                "Question retrieved",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to get question {}: {}", question_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get question",
                )),
            )
        }
    }
}
