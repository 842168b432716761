use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::questions::QuestionListQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::QuestionService;

pub async fn handle_list_questions(
    service: &QuestionService,
    query: QuestionListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let is_admin = RequireJWT::extract_user_role(request) == Some(UserRole::Admin);

    match storage.list_questions(query).await {
        Ok(mut response) => {
            // 学生侧屏蔽答案与解析
            if !is_admin {
                response.questions = response
                    .questions
                    .into_iter()
                    .map(|q| q.redacted())
                    .collect();
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Questions retrieved",
            )))
        }
        Err(e) => {
            tracing::error!("Failed to list questions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list questions",
                )),
            )
        }
    }
}
