use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::questions::UpdateQuestionRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::QuestionService;
use super::create::MIN_OPTIONS;

pub async fn handle_update_question(
    service: &QuestionService,
    question_id: i64,
    update_request: UpdateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(options) = &update_request.options {
        if options.len() < MIN_OPTIONS {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("A question needs at least {MIN_OPTIONS} options"),
            )));
        }
    }

    // 答案索引要和更新后的选项数量一致，只改其一时取当前记录校验
    let current = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "Question not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to get question {}: {}", question_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update question",
                )),
            );
        }
    };

    let option_count = update_request
        .options
        .as_ref()
        .map(|o| o.len())
        .unwrap_or(current.options.len());
    let correct_answer = update_request
        .correct_answer
        .unwrap_or(current.correct_answer);

    if correct_answer < 0 || correct_answer as usize >= option_count {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidAnswerIndex,
            format!("correct_answer must be between 0 and {}", option_count - 1),
        )));
    }

    match storage.update_question(question_id, update_request).await {
        Ok(Some(question)) => {
            tracing::info!("Question {} updated", question.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(question, "Question updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to update question {}: {}", question_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update question",
                )),
            )
        }
    }
}
