use serde::Deserialize;
use ts_rs::TS;

// LaTeX 预览请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/render.ts")]
pub struct RenderLatexRequest {
    pub text: String,
}
