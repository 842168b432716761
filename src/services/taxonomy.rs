//! 新增内容时的分类校验
//!
//! 只在创建视频 / 题目时校验，存量数据不受分类调整影响。

use std::sync::Arc;

use crate::errors::Result;
use crate::models::categories::defaults::{
    CONFIG_KEY_CLASSES, CONFIG_KEY_SUBJECTS, default_classes, default_subjects,
};
use crate::storage::Storage;

// 校验 class_level 与 subject 是否落在当前配置的分类里。
// 返回 Ok(Some(描述)) 表示校验失败，调用方应回 400。
pub async fn taxonomy_error(
    storage: &Arc<dyn Storage>,
    class_level: &str,
    subject: &str,
) -> Result<Option<String>> {
    let classes = match storage.get_platform_config(CONFIG_KEY_CLASSES).await? {
        Some(values) => values,
        None => default_classes(),
    };
    if !classes.iter().any(|c| c == class_level) {
        return Ok(Some(format!("Unknown class level: {class_level}")));
    }

    let subjects = match storage.get_platform_config(CONFIG_KEY_SUBJECTS).await? {
        Some(values) => values,
        None => default_subjects(),
    };
    if !subjects.iter().any(|s| s == subject) {
        return Ok(Some(format!("Unknown subject: {subject}")));
    }

    Ok(None)
}
