//! YouTube 链接解析与元数据补全
//!
//! oEmbed 请求失败不阻断视频创建，回退到默认标题与缩略图。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::{ElearnError, Result};

// 标准 watch / 短链 / embed 形式
static WATCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
        .expect("Invalid youtube watch regex")
});

// shorts 形式
static SHORTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtube\.com/shorts/([^&\n?#]+)").expect("Invalid youtube shorts regex")
});

pub const FALLBACK_TITLE: &str = "YouTube Video";

/// oEmbed 响应中用到的字段
#[derive(Debug, Deserialize)]
pub struct OembedMetadata {
    pub title: String,
    pub thumbnail_url: Option<String>,
}

/// 从 URL 中提取 YouTube 视频 ID
pub fn extract_youtube_id(url: &str) -> Option<String> {
    WATCH_RE
        .captures(url)
        .or_else(|| SHORTS_RE.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// 视频 ID 对应的默认缩略图地址
pub fn default_thumbnail(youtube_id: &str) -> String {
    format!("https://img.youtube.com/vi/{youtube_id}/maxresdefault.jpg")
}

/// 通过 oEmbed 获取视频标题与缩略图
pub async fn fetch_oembed_metadata(youtube_id: &str) -> Result<OembedMetadata> {
    let oembed_url = format!(
        "https://www.youtube.com/oembed?url=https://www.youtube.com/watch?v={youtube_id}&format=json"
    );

    let response = reqwest::get(&oembed_url)
        .await
        .map_err(|e| ElearnError::metadata_fetch(format!("oEmbed 请求失败: {e}")))?;

    if !response.status().is_success() {
        return Err(ElearnError::metadata_fetch(format!(
            "oEmbed 返回状态 {}",
            response.status()
        )));
    }

    response
        .json::<OembedMetadata>()
        .await
        .map_err(|e| ElearnError::metadata_fetch(format!("oEmbed 响应解析失败: {e}")))
}

/// 补全视频标题与缩略图
///
/// 提供的值优先；oEmbed 失败时回退到默认标题与 maxresdefault 缩略图。
pub async fn resolve_metadata(
    youtube_id: &str,
    title: Option<String>,
    thumbnail: Option<String>,
) -> (String, String) {
    let title = title.filter(|t| !t.trim().is_empty());
    let thumbnail = thumbnail.filter(|t| !t.trim().is_empty());

    if let (Some(title), Some(thumbnail)) = (&title, &thumbnail) {
        return (title.clone(), thumbnail.clone());
    }

    let oembed = match fetch_oembed_metadata(youtube_id).await {
        Ok(meta) => Some(meta),
        Err(e) => {
            tracing::warn!("oEmbed metadata fetch failed for {}: {}", youtube_id, e);
            None
        }
    };

    let resolved_title = title
        .or_else(|| oembed.as_ref().map(|m| m.title.clone()))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());
    let resolved_thumbnail = thumbnail
        .or_else(|| oembed.and_then(|m| m.thumbnail_url))
        .unwrap_or_else(|| default_thumbnail(youtube_id));

    (resolved_title, resolved_thumbnail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_watch_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_short_url() {
        assert_eq!(
            extract_youtube_id("https://youtu.be/dQw4w9WgXcQ?t=42"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_embed_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_shorts_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/shorts/abc123XYZ_-"),
            Some("abc123XYZ_-".to_string())
        );
    }

    #[test]
    fn test_extract_rejects_other_hosts() {
        assert_eq!(extract_youtube_id("https://vimeo.com/12345"), None);
        assert_eq!(extract_youtube_id("not a url"), None);
    }

    #[test]
    fn test_default_thumbnail() {
        assert_eq!(
            default_thumbnail("dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }
}
