use serde::Serialize;
use ts_rs::TS;

// LaTeX 预览响应，rendered 为替换完数学段落后的标记文本
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/render.ts")]
pub struct RenderLatexResponse {
    pub rendered: String,
    pub contains_latex: bool,
}
