use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 三级分类：班级 / 学科 / 章节
//
// classes 与 subjects 来自 platform_config 键值行，
// chapters 按学科名聚合自 chapters 表（无数据时回退到内置默认值）。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/categories.ts")]
pub struct Categories {
    pub classes: Vec<String>,
    pub subjects: Vec<String>,
    pub chapters: HashMap<String, Vec<String>>,
}

// 章节实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/categories.ts")]
pub struct Chapter {
    pub id: i64,
    pub name: String,
    // 按名称关联学科，不是外键
    pub subject: String,
    pub class_level: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
