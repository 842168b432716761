use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attempts::{AttemptListQuery, SubmitAttemptRequest};
use crate::services::AttemptService;

// 懒加载的全局 AttemptService 实例
static ATTEMPT_SERVICE: Lazy<AttemptService> = Lazy::new(AttemptService::new_lazy);

pub async fn submit_attempt(
    req: HttpRequest,
    attempt_data: web::Json<SubmitAttemptRequest>,
) -> ActixResult<HttpResponse> {
    ATTEMPT_SERVICE
        .submit_attempt(attempt_data.into_inner(), &req)
        .await
}

pub async fn list_attempts(
    request: HttpRequest,
    query: web::Query<AttemptListQuery>,
) -> ActixResult<HttpResponse> {
    ATTEMPT_SERVICE
        .list_attempts(query.into_inner(), &request)
        .await
}

// 配置路由
pub fn configure_attempts_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attempts")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::post().to(submit_attempt))
                    .route(web::get().to(list_attempts)),
            ),
    );
}
