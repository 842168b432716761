//! LaTeX 片段渲染
//!
//! 文本中 $$...$$ 为块级公式，$...$ 为行内公式，其余部分原样保留。
//! 单个片段渲染失败不影响其它片段，失败处输出占位符。

use latex2mathml::{DisplayStyle, latex_to_mathml};
use once_cell::sync::Lazy;
use regex::Regex;

// 先匹配块级公式，避免 $$ 被拆成两个行内定界符
static BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\$([\s\S]*?)\$\$").expect("Invalid block latex regex"));

static INLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([^$]+?)\$").expect("Invalid inline latex regex"));

pub const ERROR_PLACEHOLDER: &str = "[LaTeX Error]";

fn render_one(latex: &str, style: DisplayStyle) -> String {
    match latex_to_mathml(latex.trim(), style) {
        Ok(mathml) => mathml,
        Err(e) => {
            tracing::debug!("LaTeX render failed: {}", e);
            ERROR_PLACEHOLDER.to_string()
        }
    }
}

/// 将文本中的 LaTeX 公式替换为 MathML
pub fn render_latex(text: &str) -> String {
    let after_blocks = BLOCK_RE.replace_all(text, |caps: &regex::Captures| {
        render_one(&caps[1], DisplayStyle::Block)
    });

    INLINE_RE
        .replace_all(&after_blocks, |caps: &regex::Captures| {
            render_one(&caps[1], DisplayStyle::Inline)
        })
        .into_owned()
}

/// 文本是否包含待渲染的公式定界符
pub fn contains_latex(text: &str) -> bool {
    BLOCK_RE.is_match(text) || INLINE_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(render_latex("no math here"), "no math here");
        assert!(!contains_latex("no math here"));
    }

    #[test]
    fn test_inline_formula_rendered() {
        let out = render_latex("area is $x^2$ units");
        assert!(out.starts_with("area is "));
        assert!(out.contains("<math"));
        assert!(out.ends_with(" units"));
    }

    #[test]
    fn test_block_formula_rendered() {
        let out = render_latex("$$\\frac{a}{b}$$");
        assert!(out.contains("<math"));
        assert!(!out.contains("$$"));
    }

    #[test]
    fn test_mixed_block_and_inline() {
        let out = render_latex("inline $a+b$ and block $$c+d$$");
        assert_eq!(out.matches("<math").count(), 2);
    }

    #[test]
    fn test_detects_delimiters() {
        assert!(contains_latex("solve $x+1=0$"));
        assert!(contains_latex("$$\\int_0^1 x\\,dx$$"));
    }
}
