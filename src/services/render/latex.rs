use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::render::{RenderLatexRequest, RenderLatexResponse};
use crate::utils::latex;

use super::RenderService;

pub async fn handle_render_latex(
    _service: &RenderService,
    render_request: RenderLatexRequest,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let contains_latex = latex::contains_latex(&render_request.text);
    let rendered = latex::render_latex(&render_request.text);

    let response = RenderLatexResponse {
        rendered,
        contains_latex,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Rendered")))
}
