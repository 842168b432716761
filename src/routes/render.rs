use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::render::RenderLatexRequest;
use crate::services::RenderService;

// 懒加载的全局 RenderService 实例
static RENDER_SERVICE: Lazy<RenderService> = Lazy::new(RenderService::new_lazy);

pub async fn render_latex(
    req: HttpRequest,
    render_data: web::Json<RenderLatexRequest>,
) -> ActixResult<HttpResponse> {
    RENDER_SERVICE
        .render_latex(render_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_render_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/render")
            .wrap(middlewares::RequireJWT)
            .route("/latex", web::post().to(render_latex)),
    );
}
