use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::AnalyticsService;

// 懒加载的全局 AnalyticsService 实例
static ANALYTICS_SERVICE: Lazy<AnalyticsService> = Lazy::new(AnalyticsService::new_lazy);

pub async fn platform_analytics(request: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.platform_analytics(&request).await
}

pub async fn list_students(request: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.list_students(&request).await
}

pub async fn student_stats(request: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.student_stats(&request).await
}

// 配置路由
pub fn configure_analytics_routes(cfg: &mut web::ServiceConfig) {
    // 学生查看自己的学习统计
    cfg.service(
        web::scope("/api/v1/stats")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(student_stats)),
    );

    // 管理端平台统计与学生列表
    cfg.service(
        web::resource("/api/v1/admin/analytics")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(platform_analytics)),
    );
    cfg.service(
        web::resource("/api/v1/admin/students")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(list_students)),
    );
}
