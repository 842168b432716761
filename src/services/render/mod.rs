pub mod latex;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct RenderService;

impl RenderService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 出题预览用的 LaTeX 渲染，无状态
    pub async fn render_latex(
        &self,
        render_request: crate::models::render::RenderLatexRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        latex::handle_render_latex(self, render_request, request).await
    }
}
