use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::attempts::{SubmitAttemptRequest, SubmitAttemptResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::AttemptService;

// 判分只信数据库里的正确答案，客户端提交的只有选项下标
pub async fn handle_submit_attempt(
    service: &AttemptService,
    submit_request: SubmitAttemptRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not authenticated",
        )));
    };

    let question = match storage.get_question_by_id(submit_request.question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "Question not found",
            )));
        }
        Err(e) => {
            tracing::error!(
                "Failed to get question {}: {}",
                submit_request.question_id,
                e
            );
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to submit attempt",
                )),
            );
        }
    };

    if submit_request.selected_answer < 0
        || submit_request.selected_answer as usize >= question.options.len()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidAnswerIndex,
            format!(
                "selected_answer must be between 0 and {}",
                question.options.len() - 1
            ),
        )));
    }

    let is_correct = submit_request.selected_answer == question.correct_answer;

    match storage
        .create_attempt(
            user_id,
            question.id,
            submit_request.selected_answer,
            is_correct,
            submit_request.time_taken,
        )
        .await
    {
        Ok(attempt) => {
            let response = SubmitAttemptResponse {
                attempt,
                is_correct,
                correct_answer: question.correct_answer,
                explanation: question.explanation,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Attempt recorded")))
        }
        Err(e) => {
            tracing::error!("Failed to record attempt: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to submit attempt",
                )),
            )
        }
    }
}
