use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::doubts::{DoubtListQuery, RespondDoubtRequest, SubmitDoubtRequest};
use crate::models::users::entities::UserRole;
use crate::services::DoubtService;
use crate::utils::SafeDoubtIdI64;

// 懒加载的全局 DoubtService 实例
static DOUBT_SERVICE: Lazy<DoubtService> = Lazy::new(DoubtService::new_lazy);

pub async fn submit_doubt(
    req: HttpRequest,
    doubt_data: web::Json<SubmitDoubtRequest>,
) -> ActixResult<HttpResponse> {
    DOUBT_SERVICE.submit_doubt(doubt_data.into_inner(), &req).await
}

pub async fn list_my_doubts(request: HttpRequest) -> ActixResult<HttpResponse> {
    DOUBT_SERVICE.list_my_doubts(&request).await
}

pub async fn list_all_doubts(
    request: HttpRequest,
    query: web::Query<DoubtListQuery>,
) -> ActixResult<HttpResponse> {
    DOUBT_SERVICE
        .list_all_doubts(query.into_inner(), &request)
        .await
}

pub async fn get_doubt(req: HttpRequest, doubt_id: SafeDoubtIdI64) -> ActixResult<HttpResponse> {
    DOUBT_SERVICE.get_doubt(doubt_id.0, &req).await
}

pub async fn respond_doubt(
    req: HttpRequest,
    doubt_id: SafeDoubtIdI64,
    respond_data: web::Json<RespondDoubtRequest>,
) -> ActixResult<HttpResponse> {
    DOUBT_SERVICE
        .respond_doubt(doubt_id.0, respond_data.into_inner(), &req)
        .await
}

pub async fn delete_doubt(req: HttpRequest, doubt_id: SafeDoubtIdI64) -> ActixResult<HttpResponse> {
    DOUBT_SERVICE.delete_doubt(doubt_id.0, &req).await
}

// 配置路由
pub fn configure_doubts_routes(cfg: &mut web::ServiceConfig) {
    // 学生端：提交与查看自己的疑问
    cfg.service(
        web::scope("/api/v1/doubts")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::post().to(submit_doubt))
                    .route(web::get().to(list_my_doubts)),
            )
            .route("/{id}", web::get().to(get_doubt)),
    );

    // 管理端：全量列表、回复、删除
    cfg.service(
        web::scope("/api/v1/admin/doubts")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_all_doubts))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(respond_doubt))
                    .route(web::delete().to(delete_doubt)),
            ),
    );
}
