use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::progress::{MarkWatchedRequest, ProgressListQuery};
use crate::services::ProgressService;

// 懒加载的全局 ProgressService 实例
static PROGRESS_SERVICE: Lazy<ProgressService> = Lazy::new(ProgressService::new_lazy);

pub async fn mark_watched(
    req: HttpRequest,
    mark_data: web::Json<MarkWatchedRequest>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .mark_watched(mark_data.into_inner(), &req)
        .await
}

pub async fn list_progress(
    request: HttpRequest,
    query: web::Query<ProgressListQuery>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .list_progress(query.into_inner(), &request)
        .await
}

// 配置路由
pub fn configure_progress_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/video-progress")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::post().to(mark_watched))
                    .route(web::get().to(list_progress)),
            ),
    );
}
