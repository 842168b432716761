use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::categories::UpdateCategoryRequest;
use crate::models::users::entities::UserRole;
use crate::services::CategoryService;

// 懒加载的全局 CategoryService 实例
static CATEGORY_SERVICE: Lazy<CategoryService> = Lazy::new(CategoryService::new_lazy);

pub async fn get_categories(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.get_categories(&req).await
}

pub async fn update_categories(
    req: HttpRequest,
    update_data: web::Json<UpdateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .update_categories(update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_categories_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/categories").service(
            web::resource("")
                // 分类树公开可读，前端登录页也要用
                .route(web::get().to(get_categories))
                .route(
                    web::put()
                        .to(update_categories)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                        .wrap(middlewares::RequireJWT),
                ),
        ),
    );
}
