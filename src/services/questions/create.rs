use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::questions::CreateQuestionRequest;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::taxonomy;

use super::QuestionService;

// 选择题至少两个选项
pub const MIN_OPTIONS: usize = 2;

pub async fn handle_create_question(
    service: &QuestionService,
    create_request: CreateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(created_by) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    if create_request.question_text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "question_text is required",
        )));
    }

    if create_request.options.len() < MIN_OPTIONS {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("A question needs at least {MIN_OPTIONS} options"),
        )));
    }

    // 正确答案必须指向一个存在的选项
    if create_request.correct_answer < 0
        || create_request.correct_answer as usize >= create_request.options.len()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidAnswerIndex,
            format!(
                "correct_answer must be between 0 and {}",
                create_request.options.len() - 1
            ),
        )));
    }

    if create_request.chapter.trim().is_empty() || create_request.topic.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "chapter and topic are required",
        )));
    }

    // 分类必须落在当前配置里
    match taxonomy::taxonomy_error(
        &storage,
        &create_request.class_level,
        &create_request.subject,
    )
    .await
    {
        Ok(None) => {}
        Ok(Some(message)) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::InvalidTaxonomy, message)));
        }
        Err(e) => {
            tracing::error!("Failed to load taxonomy config: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create question",
                )),
            );
        }
    }

    match storage.create_question(create_request, created_by).await {
        Ok(question) => {
            tracing::info!("Question {} created", question.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(question, "Question created")))
        }
        Err(e) => {
            tracing::error!("Failed to create question: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create question",
                )),
            )
        }
    }
}
